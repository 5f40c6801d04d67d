// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The catalog shipped with the site.

use crate::model::{LocalizedText, ToolCategory, ToolRecord};

fn tool(
	slug: &str,
	translation_key: &str,
	icon: &str,
	premium: bool,
	title: &str,
	short_title: &str,
	description: &str,
) -> ToolRecord {
	ToolRecord {
		slug: slug.to_string(),
		translation_key: translation_key.to_string(),
		icon: icon.to_string(),
		premium,
		title: title.to_string(),
		short_title: short_title.to_string(),
		description: description.to_string(),
	}
}

pub(crate) fn categories() -> Vec<ToolCategory> {
	vec![
		ToolCategory {
			id: "numerology".to_string(),
			translation_key: "numerology".to_string(),
			name: LocalizedText::new("Numerology", "अंक ज्योतिष"),
			description: LocalizedText::new(
				"Discover what your numbers reveal about your life path.",
				"जानिए आपके अंक आपके जीवन पथ के बारे में क्या बताते हैं।",
			),
			style: "amber".to_string(),
			tools: vec![
				tool(
					"lucky-number-calculator",
					"lucky-number",
					"hash",
					false,
					"Lucky Number Calculator",
					"Lucky Number",
					"Find the number that brings you fortune, from your date of birth.",
				),
				tool(
					"life-path-number",
					"life-path",
					"route",
					false,
					"Life Path Number Calculator",
					"Life Path",
					"Reveal the core number that shapes your purpose.",
				),
				tool(
					"name-numerology",
					"name-number",
					"type",
					false,
					"Name Numerology Calculator",
					"Name Number",
					"Calculate the vibration of your name using Chaldean values.",
				),
				tool(
					"mobile-number-numerology",
					"mobile-number",
					"smartphone",
					false,
					"Mobile Number Numerology",
					"Mobile Number",
					"Check whether your mobile number is in harmony with you.",
				),
			],
		},
		ToolCategory {
			id: "astrology".to_string(),
			translation_key: "astrology".to_string(),
			name: LocalizedText::new("Astrology", "ज्योतिष"),
			description: LocalizedText::new(
				"Birth charts, nakshatras and yogas from Vedic astrology.",
				"वैदिक ज्योतिष से जन्म कुंडली, नक्षत्र और योग।",
			),
			style: "indigo".to_string(),
			tools: vec![
				tool(
					"kundli",
					"kundli",
					"circle-dot",
					false,
					"Free Kundli Generator",
					"Kundli",
					"Generate your Vedic birth chart with planetary positions.",
				),
				tool(
					"nakshatra-finder",
					"nakshatra",
					"star",
					false,
					"Nakshatra Finder",
					"Nakshatra",
					"Find your birth star and its ruling deity.",
				),
				tool(
					"lagna-calculator",
					"lagna",
					"sunrise",
					false,
					"Lagna (Ascendant) Calculator",
					"Lagna",
					"Work out your rising sign from time and place of birth.",
				),
				tool(
					"manglik-dosha",
					"manglik",
					"flame",
					false,
					"Manglik Dosha Check",
					"Manglik",
					"Check for Mangal dosha in your chart and its remedies.",
				),
				tool(
					"raj-yoga",
					"raj-yoga",
					"crown",
					true,
					"Raj Yoga Calculator",
					"Raj Yoga",
					"Identify the royal combinations present in your chart.",
				),
				tool(
					"kundli-matching",
					"kundli-matching",
					"heart",
					true,
					"Kundli Matching",
					"Kundli Matching",
					"Compare two charts using the Ashtakoota guna milan.",
				),
			],
		},
		ToolCategory {
			id: "vastu".to_string(),
			translation_key: "vastu".to_string(),
			name: LocalizedText::new("Vastu", "वास्तु"),
			description: LocalizedText::new(
				"Arrange your home in harmony with the directions.",
				"दिशाओं के अनुरूप अपने घर की व्यवस्था करें।",
			),
			style: "emerald".to_string(),
			tools: vec![
				tool(
					"room-advisor",
					"room-advisor",
					"home",
					false,
					"Vastu Room Advisor",
					"Room Advisor",
					"Find the best direction for every room in your home.",
				),
				tool(
					"entrance-direction",
					"entrance",
					"door-open",
					true,
					"Main Entrance Direction",
					"Entrance",
					"Evaluate the facing of your main door.",
				),
			],
		},
		ToolCategory {
			id: "muhurat".to_string(),
			translation_key: "muhurat".to_string(),
			name: LocalizedText::new("Muhurat", "मुहूर्त"),
			description: LocalizedText::new(
				"Pick auspicious times for important beginnings.",
				"महत्वपूर्ण शुरुआत के लिए शुभ समय चुनें।",
			),
			style: "rose".to_string(),
			tools: vec![
				tool(
					"choghadiya",
					"choghadiya",
					"clock",
					false,
					"Today's Choghadiya",
					"Choghadiya",
					"See the auspicious and inauspicious periods of the day.",
				),
				tool(
					"shubh-muhurat",
					"shubh-muhurat",
					"calendar",
					true,
					"Shubh Muhurat Finder",
					"Shubh Muhurat",
					"Find favourable dates for weddings, griha pravesh and more.",
				),
			],
		},
	]
}
