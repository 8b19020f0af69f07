use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a creation.
///
/// Draft creations are only visible to their owner; published creations
/// appear in the agency browse view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationStatus {
    #[default]
    Draft,
    Published,
}

impl std::fmt::Display for CreationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreationStatus::Draft => write!(f, "draft"),
            CreationStatus::Published => write!(f, "published"),
        }
    }
}

/// The known creation categories.
///
/// Source records carry the category as free text (see [`Creation::kind`]);
/// this enum exists for UI tab filters and is parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationType {
    Image,
    Text,
    Music,
    Video,
    Software,
}

impl CreationType {
    pub const ALL: [CreationType; 5] = [
        CreationType::Image,
        CreationType::Text,
        CreationType::Music,
        CreationType::Video,
        CreationType::Software,
    ];

    /// Parse a category label case-insensitively.
    ///
    /// `"audio"` is accepted as an alias for [`CreationType::Music`], which
    /// is how older records label sound works.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "image" => Some(CreationType::Image),
            "text" => Some(CreationType::Text),
            "music" | "audio" => Some(CreationType::Music),
            "video" => Some(CreationType::Video),
            "software" => Some(CreationType::Software),
            _ => None,
        }
    }
}

impl std::fmt::Display for CreationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreationType::Image => write!(f, "image"),
            CreationType::Text => write!(f, "text"),
            CreationType::Music => write!(f, "music"),
            CreationType::Video => write!(f, "video"),
            CreationType::Software => write!(f, "software"),
        }
    }
}

/// Optional structured metadata attached to a creation.
///
/// Unknown keys in source records are ignored on deserialization; only the
/// fields the pipeline reads are modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// A single uploaded creative work with rights metadata.
///
/// Consumed read-only by the catalog pipeline. Every field except `id` is
/// optional in source records; absence never causes an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creation {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights: Option<String>,
    /// The raw category label, e.g. `"Image"`. Matched case-insensitively.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: CreationStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CreationMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
}

impl Creation {
    /// The creation date as a UTC timestamp.
    ///
    /// Accepts RFC 3339 or plain `YYYY-MM-DD`; a missing or unparseable
    /// date resolves to the Unix epoch so it sorts last in descending
    /// chronological order.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.date_created
            .as_deref()
            .and_then(parse_date)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// The creator attribution from structured metadata, if present.
    #[must_use]
    pub fn metadata_creator(&self) -> Option<&str> {
        self.metadata.as_ref()?.creator.as_deref()
    }
}

/// Parses a date string into a UTC timestamp.
///
/// Tries RFC 3339 first, then `YYYY-MM-DD` (interpreted as midnight UTC).
/// Returns `None` if neither format matches.
#[must_use]
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
