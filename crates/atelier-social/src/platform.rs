use serde::{Deserialize, Serialize};

use crate::error::SocialError;

/// The supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Tiktok,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Tiktok,
        Platform::Linkedin,
    ];

    /// Host used for synthetic post permalinks.
    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram.com",
            Platform::Twitter => "twitter.com",
            Platform::Tiktok => "tiktok.com",
            Platform::Linkedin => "linkedin.com",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::Tiktok => write!(f, "tiktok"),
            Platform::Linkedin => write!(f, "linkedin"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = SocialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "twitter" => Ok(Platform::Twitter),
            "tiktok" => Ok(Platform::Tiktok),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(SocialError::UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Platform::from_str("Instagram").unwrap(), Platform::Instagram);
        assert_eq!(Platform::from_str("TIKTOK").unwrap(), Platform::Tiktok);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = Platform::from_str("myspace").unwrap_err();
        assert!(err.to_string().contains("unknown platform"));
    }

    #[test]
    fn display_round_trips() {
        for p in Platform::ALL {
            assert_eq!(Platform::from_str(&p.to_string()).unwrap(), p);
        }
    }
}
