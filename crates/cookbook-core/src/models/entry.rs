// ABOUTME: Recipe entry model with its identifier, wire shape, and creation-time validation
// ABOUTME: Serializes as `{ _id, title, text, imageUrl, createdAt, updatedAt }`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Store-generated entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EntryId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| AppError::invalid_format(messages::INVALID_ID).with_source(e))
    }
}

/// A persisted recipe entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Store-generated identifier, used as the delete key
    #[serde(rename = "_id")]
    pub id: EntryId,
    /// Recipe title
    pub title: String,
    /// Recipe description / body
    pub text: String,
    /// Pasted or relay-hosted image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Insert time, used for ordering
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Always equal to `created_at`; entries are never updated
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Creation input for an entry
///
/// Built either directly (store-level callers) or through
/// [`NewEntry::validated`], which applies the Entry Service's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Recipe title
    pub title: String,
    /// Recipe description / body
    pub text: String,
    /// Optional image URL
    pub image_url: Option<String>,
}

impl NewEntry {
    /// Trim and validate raw request fields
    ///
    /// Missing fields count as empty. The title is checked first; then text
    /// and image URL must *both* be present.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` carrying the user-facing message of the
    /// first rule that fails.
    pub fn validated(
        title: Option<&str>,
        text: Option<&str>,
        image_url: Option<&str>,
    ) -> AppResult<Self> {
        let title = title.unwrap_or_default().trim();
        let text = text.unwrap_or_default().trim();
        let image_url = image_url.unwrap_or_default().trim();

        if title.is_empty() {
            return Err(AppError::missing_field(messages::TITLE_REQUIRED));
        }
        if text.is_empty() || image_url.is_empty() {
            return Err(AppError::missing_field(
                messages::DESCRIPTION_AND_IMAGE_REQUIRED,
            ));
        }

        Ok(Self {
            title: title.to_owned(),
            text: text.to_owned(),
            image_url: Some(image_url.to_owned()),
        })
    }

    /// Materialize the stored entry
    #[must_use]
    pub fn into_entry(self, id: EntryId, created_at: DateTime<Utc>) -> Entry {
        Entry {
            id,
            title: self.title,
            text: self.text,
            image_url: self.image_url,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Millisecond-precision RFC 3339 timestamps (`2025-01-02T03:04:05.678Z`)
///
/// Usable as a `#[serde(with = "timestamp")]` module.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Current time truncated to the stored precision
    #[must_use]
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    /// Render a timestamp in wire format
    #[must_use]
    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parse any RFC 3339 timestamp into UTC
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error for malformed input
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
    }

    /// Serialize in wire format
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    /// Deserialize from any RFC 3339 string
    ///
    /// # Errors
    ///
    /// Fails on non-string or malformed input
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_validated_trims_all_fields() {
        let entry = NewEntry::validated(
            Some("  Soup "),
            Some("\tBoil it\n"),
            Some(" https://x/y.png "),
        )
        .unwrap();

        assert_eq!(entry.title, "Soup");
        assert_eq!(entry.text, "Boil it");
        assert_eq!(entry.image_url.as_deref(), Some("https://x/y.png"));
    }

    #[test]
    fn test_blank_title_wins_over_other_failures() {
        let err = NewEntry::validated(Some("   "), None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(err.message, messages::TITLE_REQUIRED);
    }

    #[test]
    fn test_text_without_image_is_rejected() {
        let err = NewEntry::validated(Some("Soup"), Some("Boil it"), Some("  ")).unwrap_err();
        assert_eq!(err.message, messages::DESCRIPTION_AND_IMAGE_REQUIRED);
    }

    #[test]
    fn test_image_without_text_is_rejected() {
        let err = NewEntry::validated(Some("Soup"), None, Some("https://x/y.png")).unwrap_err();
        assert_eq!(err.message, messages::DESCRIPTION_AND_IMAGE_REQUIRED);
    }

    #[test]
    fn test_entry_wire_shape() {
        let created_at = timestamp::parse("2025-01-02T03:04:05.678Z").unwrap();
        let id: EntryId = "3f2c8a4e-9b1d-4c55-8e2a-6f0b7d9c1e23".parse().unwrap();
        let entry = NewEntry {
            title: "Soup".into(),
            text: "Boil it".into(),
            image_url: Some("https://x/y.png".into()),
        }
        .into_entry(id, created_at);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["_id"], "3f2c8a4e-9b1d-4c55-8e2a-6f0b7d9c1e23");
        assert_eq!(json["imageUrl"], "https://x/y.png");
        assert_eq!(json["createdAt"], "2025-01-02T03:04:05.678Z");
        assert_eq!(json["updatedAt"], json["createdAt"]);

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_missing_image_is_omitted() {
        let entry = NewEntry {
            title: "Bread".into(),
            text: "Knead".into(),
            image_url: None,
        }
        .into_entry(EntryId::generate(), timestamp::now());

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_malformed_id_is_invalid_format() {
        let err = "not-an-id".parse::<EntryId>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.message, messages::INVALID_ID);
    }
}
