use serde::{Deserialize, Serialize};

/// Raw values as typed into the rate form. Nothing here is trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateInput {
    pub shop_name: String,
    pub date: String,
    pub gold_rate_raw: String,
    pub silver_rate_raw: String,
    pub gattu_rate_raw: String,
    // Either free text or "street|contact|map-link".
    pub address: String,
    pub extra_contact: String,
}

impl RateInput {
    /// Resets the per-day fields. Shop name, date and address stay, since they
    /// rarely change between announcements.
    pub fn cleared(&self) -> RateInput {
        RateInput {
            shop_name: self.shop_name.clone(),
            date: self.date.clone(),
            address: self.address.clone(),
            ..RateInput::default()
        }
    }

    // The remote rate log only ever sees the grouped amounts, never the raw text.
    pub fn rate_log(&self) -> RateLog {
        use crate::utils::indian_format::group_digits;

        RateLog {
            gold_24k: group_digits(self.gattu_rate_raw.trim()),
            gold_22k: group_digits(self.gold_rate_raw.trim()),
            silver: group_digits(self.silver_rate_raw.trim()),
        }
    }
}

/// Form values after trimming, defaulting and digit grouping; the only input
/// the message template reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFields {
    pub shop_name: String,
    pub date: String,
    pub gold: String,
    pub silver: String,
    // Empty means the gattu block is left out.
    pub gattu: String,
    pub address: String,
    pub extra_contact: String,
}

/// The three pipe-separated segments of an address field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub contact: String,
    pub map_link: String,
}

impl AddressParts {
    /// Splits on `|` into at most three trimmed segments. Missing segments are
    /// empty; a third segment keeps any further pipes so map links survive intact.
    pub fn parse(address: &str) -> Self {
        let mut segments = address.splitn(3, '|').map(|s| s.trim().to_string());
        AddressParts {
            street: segments.next().unwrap_or_default(),
            contact: segments.next().unwrap_or_default(),
            map_link: segments.next().unwrap_or_default(),
        }
    }
}

/// Payload for the remote rate log. Gattu is recorded as the 24ct rate and the
/// regular gold rate as 22ct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLog {
    #[serde(rename = "gold24k")]
    pub gold_24k: String,
    #[serde(rename = "gold22k")]
    pub gold_22k: String,
    pub silver: String,
}
