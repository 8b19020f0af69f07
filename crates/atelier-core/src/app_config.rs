use std::path::PathBuf;

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Path to the seed catalog YAML file.
    pub catalog_path: PathBuf,
    /// Path to the JSON file holding cached social profiles.
    pub profile_store_path: PathBuf,
    /// Optional fixed seed for profile generation. When unset, each
    /// generation draws from entropy.
    pub social_seed: Option<u64>,
}
