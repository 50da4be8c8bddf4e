// Builds the daily rate announcement from form values.
//
// Two steps: `build_fields` turns raw form input into display-ready fields
// (trimmed, grouped, placeholders applied), then `compose_message` renders the
// fixed template. Both are pure; identical input gives byte-identical text.

use shared::models::{AddressParts, MessageFields, RateInput};
use shared::utils::indian_format::group_digits;

use crate::config::{AddressStyle, MessageSettings};

const BANNER_RULE: &str = "=======================";
const SECTION_RULE: &str = "━━━━━━━━━━━━━━━━━";
const SECTION_TITLE: &str = "💰 బంగారు & వెండి ధరలు 💰";

// Labels are padded so the colons line up in a monospace chat bubble.
const TELUGU_GOLD_LABEL: &str = "💛 బంగారు (22ct – 1gm) :";
const TELUGU_SILVER_LABEL: &str = "🤍 వెండి (10gm)        :";
const ENGLISH_GOLD_LABEL: &str = "🌟 Gold (22ct – 1gm)   :";
const ENGLISH_SILVER_LABEL: &str = "🌟 Silver (10gm)       :";
const GATTU_LABEL: &str = "💐 గట్టుబంగారు         :";
const GATTU_GLYPH: &str = "💐";

fn bold_rupees(value: &str) -> String {
    format!("*₹{}*", value)
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

/// Trims and formats raw form input into the record the template reads.
pub fn build_fields(input: &RateInput, settings: &MessageSettings) -> MessageFields {
    let shop_name = match input.shop_name.trim() {
        "" => settings.default_shop_name.trim().to_string(),
        name => name.to_string(),
    };

    MessageFields {
        shop_name,
        date: input.date.trim().to_string(),
        gold: or_placeholder(group_digits(input.gold_rate_raw.trim()), &settings.placeholder),
        silver: or_placeholder(group_digits(input.silver_rate_raw.trim()), &settings.placeholder),
        gattu: group_digits(input.gattu_rate_raw.trim()),
        address: input.address.trim().to_string(),
        extra_contact: input.extra_contact.trim().to_string(),
    }
}

fn push_address_lines(lines: &mut Vec<String>, address: &str, style: AddressStyle) {
    match style {
        AddressStyle::Raw => lines.push(format!("📍 {}", address)),
        AddressStyle::Split => {
            let parts = AddressParts::parse(address);
            let location: Vec<&str> = [parts.street.as_str(), parts.contact.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            if !location.is_empty() {
                lines.push(format!("📍 Address: {}", location.join(" | ")));
            }
            if !parts.map_link.is_empty() {
                lines.push(format!("🗺️ Location: {}", parts.map_link));
            }
        }
    }
}

/// Renders the announcement. Lines are joined with `\n`, no trailing newline.
pub fn compose_message(fields: &MessageFields, style: AddressStyle) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(28);

    // Banner
    lines.push(BANNER_RULE.to_string());
    lines.push(format!("💎 {} 💎", fields.shop_name.to_uppercase()));
    lines.push(BANNER_RULE.to_string());
    lines.push(String::new());

    lines.push(format!("📅 *{}*", fields.date));
    lines.push(String::new());

    lines.push(SECTION_TITLE.to_string());
    lines.push(String::new());
    lines.push(SECTION_RULE.to_string());
    lines.push(String::new());

    lines.push(format!("{} {}", TELUGU_GOLD_LABEL, bold_rupees(&fields.gold)));
    lines.push(format!("{} {}", TELUGU_SILVER_LABEL, bold_rupees(&fields.silver)));
    lines.push(String::new());

    lines.push(format!("{} {}", ENGLISH_GOLD_LABEL, bold_rupees(&fields.gold)));
    lines.push(format!("{} {}", ENGLISH_SILVER_LABEL, bold_rupees(&fields.silver)));

    if !fields.gattu.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "{} {} {}",
            GATTU_LABEL,
            bold_rupees(&fields.gattu),
            GATTU_GLYPH
        ));
    }

    lines.push(String::new());
    lines.push(SECTION_RULE.to_string());

    if !fields.address.is_empty() {
        push_address_lines(&mut lines, &fields.address, style);
    }

    if !fields.extra_contact.is_empty() {
        lines.push(format!("☎️ {}", fields.extra_contact));
    }

    lines.push(SECTION_RULE.to_string());

    lines.join("\n")
}

/// `build_fields` followed by `compose_message`.
pub fn compose(input: &RateInput, settings: &MessageSettings) -> String {
    compose_message(&build_fields(input, settings), settings.address_style)
}
