//! Per-platform statistical overrides.
//!
//! Applied after the generic computation, replacing the corresponding
//! generic fields. Each platform maps to one override function so the
//! rules stay declarative and independently testable.

use rand::{Rng, RngCore};

use crate::generate::scale;
use crate::platform::Platform;
use crate::types::{ContentDistribution, PostKind, SocialProfile};

pub type OverrideFn = fn(&mut SocialProfile, &mut dyn RngCore);

/// Look up the override for a platform.
#[must_use]
pub fn override_for(platform: Platform) -> OverrideFn {
    match platform {
        Platform::Instagram => instagram,
        Platform::Twitter => twitter,
        Platform::Tiktok => tiktok,
        Platform::Linkedin => linkedin,
    }
}

/// Instagram: shares become "saves" at 5% of likes; photos skew toward
/// likes, videos toward comments; videos carry view counts.
fn instagram(profile: &mut SocialProfile, _rng: &mut dyn RngCore) {
    profile.avg_shares = scale(profile.avg_likes, 0.05);

    let followers = profile.followers;
    for post in &mut profile.recent_posts {
        match post.kind {
            PostKind::Photo => {
                post.likes = scale(post.likes, 1.1);
                post.comments = scale(post.comments, 0.9);
            }
            PostKind::Video => {
                post.likes = scale(post.likes, 0.9);
                post.comments = scale(post.comments, 1.2);
                post.views = Some(scale(followers, 0.3));
            }
            PostKind::Carousel => {}
        }
    }
}

/// Twitter: far more posts; shares become "retweets" at 30% of likes;
/// photos underperform, videos overperform.
fn twitter(profile: &mut SocialProfile, rng: &mut dyn RngCore) {
    profile.posts = rng.random_range(500..=2500);
    profile.avg_shares = scale(profile.avg_likes, 0.30);

    let followers = profile.followers;
    for post in &mut profile.recent_posts {
        match post.kind {
            PostKind::Photo => {
                post.likes = scale(post.likes, 0.8);
                post.comments = scale(post.comments, 0.7);
            }
            PostKind::Video => {
                post.likes = scale(post.likes, 1.2);
                post.comments = scale(post.comments, 1.3);
                post.views = Some(scale(followers, 0.4));
            }
            PostKind::Carousel => {}
        }
    }
}

/// TikTok: double the followers, a fraction of the posts, video-dominant
/// distribution, and much heavier like volume.
fn tiktok(profile: &mut SocialProfile, rng: &mut dyn RngCore) {
    profile.followers *= 2;
    profile.posts = rng.random_range(20..=120);
    profile.content_distribution = ContentDistribution {
        photos: 5,
        videos: 90,
        carousels: 5,
    };
    profile.avg_likes *= 3;

    let followers = profile.followers;
    for post in &mut profile.recent_posts {
        if post.kind == PostKind::Video {
            post.likes *= 3;
            post.comments *= 2;
            post.views = Some(scale(followers, 1.5));
        }
    }
}

/// LinkedIn: smaller audience, articles instead of carousels, comment-heavy
/// engagement.
fn linkedin(profile: &mut SocialProfile, rng: &mut dyn RngCore) {
    profile.followers = scale(profile.followers, 0.7);
    profile.posts = rng.random_range(50..=250);
    profile.content_distribution = ContentDistribution {
        photos: 40,
        videos: 20,
        carousels: 40,
    };
    profile.avg_likes = scale(profile.avg_likes, 0.6);
    profile.avg_comments = scale(profile.avg_comments, 1.2);

    for post in &mut profile.recent_posts {
        if post.kind == PostKind::Photo {
            post.likes = scale(post.likes, 0.7);
            post.comments = scale(post.comments, 1.3);
        }
    }
}
