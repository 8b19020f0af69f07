//! `social` subcommands: connect mock accounts, refresh, and show analytics.

use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use atelier_core::AppConfig;
use atelier_social::{store, Platform, SocialProfile};

#[derive(Debug, Subcommand)]
pub enum SocialCommands {
    /// Connect an account; reuses the stored profile if already connected.
    Connect { platform: Platform, username: String },
    /// Regenerate the profile for an already-connected account.
    Refresh { platform: Platform, username: String },
    /// Show the stored analytics for an account.
    Show {
        platform: Platform,
        username: String,
        /// Print the raw profile as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Forget a connected account.
    Disconnect { platform: Platform, username: String },
    /// List all connected accounts.
    List,
}

pub fn run(config: &AppConfig, command: SocialCommands) -> anyhow::Result<()> {
    let store_path = &config.profile_store_path;
    let mut cache = store::load(store_path)
        .with_context(|| format!("loading profile store {}", store_path.display()))?;
    let mut rng = make_rng(config.social_seed);

    match command {
        SocialCommands::Connect { platform, username } => {
            let profile = cache.connect(&mut rng, platform, &username, Utc::now())?;
            println!(
                "connected {platform}/@{} ({} followers)",
                profile.username, profile.followers
            );
            store::save(store_path, &cache)?;
        }
        SocialCommands::Refresh { platform, username } => {
            let profile = cache.refresh(&mut rng, platform, &username, Utc::now())?;
            println!(
                "refreshed {platform}/@{} ({} followers)",
                profile.username, profile.followers
            );
            store::save(store_path, &cache)?;
        }
        SocialCommands::Show {
            platform,
            username,
            json,
        } => match cache.get(platform, &username) {
            Some(profile) if json => println!("{}", serde_json::to_string_pretty(profile)?),
            Some(profile) => print_profile(platform, profile),
            None => println!("{platform}/@{username} is not connected"),
        },
        SocialCommands::Disconnect { platform, username } => {
            if cache.disconnect(platform, &username).is_some() {
                println!("disconnected {platform}/@{username}");
                store::save(store_path, &cache)?;
            } else {
                println!("{platform}/@{username} is not connected");
            }
        }
        SocialCommands::List => {
            if cache.is_empty() {
                println!("no connected accounts");
            } else {
                for (key, profile) in cache.iter() {
                    println!("{key}  {} followers", profile.followers);
                }
            }
        }
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_profile(platform: Platform, profile: &SocialProfile) {
    println!("@{} on {platform}", profile.username);
    println!("  {}", profile.bio);
    println!(
        "  followers {}  following {}  posts {}",
        profile.followers, profile.following, profile.posts
    );
    println!(
        "  avg likes {}  avg comments {}  avg shares {}",
        profile.avg_likes, profile.avg_comments, profile.avg_shares
    );
    println!("  engagement rate {:.2}%", profile.engagement_rate());
    let d = profile.content_distribution;
    println!(
        "  content: {}% photos / {}% videos / {}% carousels",
        d.photos, d.videos, d.carousels
    );
    println!(
        "  best time to post: {} {}",
        profile.best_posting_day, profile.best_posting_time
    );
    println!("  recent posts:");
    for post in &profile.recent_posts {
        println!(
            "    {:?} {} likes, {} comments  {}",
            post.kind, post.likes, post.comments, post.caption
        );
    }
    println!("  last updated {}", profile.last_updated.to_rfc3339());
}
