//! # Date-Time Codec
//!
//! Fixed `YYYY/MM/DD HH:MM:SS` format shared by the store encoding and all
//! displayed output. Local wall-clock time, no timezone offset.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::NaiveDateTime;

use crate::constants::DATETIME_FORMAT;

/// Parses a date-time in the fixed store format.
pub fn parse(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
}

/// Formats a date-time in the fixed store format.
pub fn format(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Serde adapter for `Option<NaiveDateTime>` fields.
///
/// Encodes as a plain string in the fixed format; pairs with
/// `skip_serializing_if = "Option::is_none"` so unset fields vanish from the
/// document entirely.
pub mod optional {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(*dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| super::parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
