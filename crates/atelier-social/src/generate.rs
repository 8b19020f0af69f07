//! The synthetic profile generator.
//!
//! A single pass of uniform sampling produces the platform-neutral
//! profile; the per-platform override (see [`crate::overrides`]) is
//! applied last and may rescale followers, posts, content distribution,
//! or engagement.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::overrides::override_for;
use crate::platform::Platform;
use crate::types::{ContentDistribution, MonthEngagement, PostKind, RecentPost, SocialProfile};

/// Follower magnitude tiers. A profile lands in one tier at random and
/// jitters within it.
const TIERS: [u64; 4] = [100, 1_000, 10_000, 100_000];

/// Number of synthetic recent posts per profile.
pub(crate) const RECENT_POST_COUNT: usize = 9;

/// Months trailing the current one that receive a recency boost.
const RECENCY_WINDOW: u32 = 6;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const CAPTIONS: [&str; 10] = [
    "New work, same obsession.",
    "Behind the scenes of the latest piece.",
    "Golden hour did most of the work here.",
    "Finally ready to share this one.",
    "Process over perfection.",
    "A study in light and patience.",
    "From the archive, still one of my favorites.",
    "Made this one for the quiet hours.",
    "Small detail, big difference.",
    "Thanks for all the love on the last drop!",
];

const BIOS: [&str; 6] = [
    "Independent creator. All inquiries via the link below.",
    "Making things and occasionally posting them.",
    "Visual storyteller | commissions open",
    "Art, process, and the odd studio cat.",
    "Creating daily. Licensing available.",
    "Here for the craft.",
];

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const TIMES: [&str; 6] = [
    "9:00 AM", "11:00 AM", "1:00 PM", "3:00 PM", "6:00 PM", "8:00 PM",
];

/// Strip a single leading `@` from a username.
#[must_use]
pub fn normalize_username(username: &str) -> &str {
    username.strip_prefix('@').unwrap_or(username)
}

/// Generate a complete synthetic profile for one (platform, username) pair.
///
/// Every sample is drawn from `rng`, so a seeded generator reproduces the
/// exact same profile. The caller is responsible for rejecting empty
/// usernames before calling; see [`crate::ProfileCache`].
pub fn generate<R: Rng>(
    rng: &mut R,
    platform: Platform,
    username: &str,
    now: DateTime<Utc>,
) -> SocialProfile {
    let username = normalize_username(username);

    // Follower base: small multiplier on a magnitude tier, plus jitter of
    // up to one tier.
    let tier = TIERS[rng.random_range(0..TIERS.len())];
    let followers = tier * rng.random_range(1..=3) + rng.random_range(0..tier);

    let engagement_rate = rng.random_range(0.02..0.07);
    let avg_likes = scale(followers, engagement_rate);
    let avg_comments = scale(avg_likes, rng.random_range(0.05..0.15));
    let avg_shares = scale(avg_likes, rng.random_range(0.02..0.10));

    // videos is bounded by the remaining budget, so carousels is
    // non-negative by construction.
    let photos = rng.random_range(30..90_u8);
    let videos = rng.random_range(5..(95 - photos));
    let content_distribution = ContentDistribution {
        photos,
        videos,
        carousels: 100 - photos - videos,
    };

    let monthly_engagement = monthly_series(rng, avg_likes, avg_comments, now);
    let recent_posts = recent_posts(rng, platform, username, avg_likes, avg_comments);

    let following = rng.random_range(100..1500_u64).min(followers);
    let posts = rng.random_range(50..=500);

    let mut profile = SocialProfile {
        username: username.to_string(),
        profile_picture: format!("https://i.pravatar.cc/150?u={username}"),
        bio: BIOS[rng.random_range(0..BIOS.len())].to_string(),
        followers,
        following,
        posts,
        avg_likes,
        avg_comments,
        avg_shares,
        content_distribution,
        monthly_engagement,
        recent_posts,
        best_posting_day: DAYS[rng.random_range(0..DAYS.len())].to_string(),
        best_posting_time: TIMES[rng.random_range(0..TIMES.len())].to_string(),
        last_updated: now,
    };

    override_for(platform)(&mut profile, rng);

    tracing::debug!(
        platform = %platform,
        username = %profile.username,
        followers = profile.followers,
        "generated synthetic profile"
    );

    profile
}

/// Twelve months of engagement, January first. Each month applies an
/// independent variance multiplier in [0.8, 1.2]; the `RECENCY_WINDOW`
/// months trailing `now`'s month get a linearly increasing boost, largest
/// for the most recent month.
fn monthly_series<R: Rng>(
    rng: &mut R,
    avg_likes: u64,
    avg_comments: u64,
    now: DateTime<Utc>,
) -> Vec<MonthEngagement> {
    let current = now.month0();

    (0..12_u32)
        .map(|month| {
            let months_back = (current + 12 - month) % 12;
            let boost = if months_back < RECENCY_WINDOW {
                1.0 + 0.05 * f64::from(RECENCY_WINDOW - months_back)
            } else {
                1.0
            };

            MonthEngagement {
                month: MONTHS[month as usize].to_string(),
                likes: scale(avg_likes, rng.random_range(0.8..1.2) * boost),
                comments: scale(avg_comments, rng.random_range(0.8..1.2) * boost),
            }
        })
        .collect()
}

fn recent_posts<R: Rng>(
    rng: &mut R,
    platform: Platform,
    username: &str,
    avg_likes: u64,
    avg_comments: u64,
) -> Vec<RecentPost> {
    (0..RECENT_POST_COUNT)
        .map(|i| {
            let kind = match rng.random_range(0..3_u8) {
                0 => PostKind::Photo,
                1 => PostKind::Video,
                _ => PostKind::Carousel,
            };
            RecentPost {
                kind,
                caption: CAPTIONS[rng.random_range(0..CAPTIONS.len())].to_string(),
                likes: scale(avg_likes, rng.random_range(0.8..1.2)),
                comments: scale(avg_comments, rng.random_range(0.8..1.2)),
                views: None,
                thumbnail_url: format!("https://picsum.photos/seed/{username}-{i}/400/400"),
                permalink: format!("https://{}/{}/post/{}", platform.domain(), username, i + 1),
            }
        })
        .collect()
}

/// Multiply a count by a factor, rounding to the nearest whole number.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn scale(value: u64, factor: f64) -> u64 {
    (value as f64 * factor).round() as u64
}
