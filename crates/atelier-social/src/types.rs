use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three post categories tracked in the content distribution.
///
/// `Carousel` stands in for each platform's third content type (carousels
/// on Instagram, threads on Twitter, articles on LinkedIn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Photo,
    Video,
    Carousel,
}

/// Percentage breakdown of a profile's posts. Always sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDistribution {
    pub photos: u8,
    pub videos: u8,
    pub carousels: u8,
}

impl ContentDistribution {
    #[must_use]
    pub fn total(self) -> u16 {
        u16::from(self.photos) + u16::from(self.videos) + u16::from(self.carousels)
    }
}

/// One month of the engagement series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEngagement {
    pub month: String,
    pub likes: u64,
    pub comments: u64,
}

/// A synthetic recent post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub kind: PostKind,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    /// Only set where a platform override defines view counts for the
    /// post kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    pub thumbnail_url: String,
    pub permalink: String,
}

/// A complete generated analytics profile for one connected account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub username: String,
    pub profile_picture: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub avg_shares: u64,
    pub content_distribution: ContentDistribution,
    /// Exactly 12 entries, January first.
    pub monthly_engagement: Vec<MonthEngagement>,
    /// Exactly 9 entries.
    pub recent_posts: Vec<RecentPost>,
    pub best_posting_day: String,
    pub best_posting_time: String,
    pub last_updated: DateTime<Utc>,
}

impl SocialProfile {
    /// Engagement rate as a percentage: `(avg likes + avg comments) /
    /// followers * 100`. Zero followers yields `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn engagement_rate(&self) -> f64 {
        if self.followers == 0 {
            return 0.0;
        }
        (self.avg_likes + self.avg_comments) as f64 / self.followers as f64 * 100.0
    }
}
