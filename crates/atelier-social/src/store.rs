//! File-backed persistence for the profile cache.
//!
//! The cache is serialized as pretty-printed JSON so connected profiles
//! survive a restart. A missing store file is not an error: it loads as an
//! empty cache.

use std::path::Path;

use crate::cache::ProfileCache;
use crate::error::SocialError;

/// Load a profile cache from `path`.
///
/// # Errors
///
/// Returns [`SocialError::StoreIo`] if the file exists but cannot be read,
/// or [`SocialError::StoreDecode`] if it is not a valid cache.
pub fn load(path: &Path) -> Result<ProfileCache, SocialError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no profile store yet; starting empty");
            return Ok(ProfileCache::new());
        }
        Err(e) => {
            return Err(SocialError::StoreIo {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    Ok(serde_json::from_str(&content)?)
}

/// Persist a profile cache to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SocialError::StoreIo`] on any filesystem failure.
pub fn save(path: &Path, cache: &ProfileCache) -> Result<(), SocialError> {
    let io_err = |e: std::io::Error| SocialError::StoreIo {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let json = serde_json::to_string_pretty(cache)?;
    std::fs::write(path, json).map_err(io_err)?;

    tracing::debug!(path = %path.display(), profiles = cache.len(), "profile store saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn missing_file_loads_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = load(&dir.path().join("profiles.json")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profiles.json");
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();

        let mut cache = ProfileCache::new();
        let mut rng = StdRng::seed_from_u64(5);
        let original = cache
            .connect(&mut rng, Platform::Tiktok, "alice", now)
            .unwrap()
            .clone();

        save(&path, &cache).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(Platform::Tiktok, "alice"), Some(&original));
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SocialError::StoreDecode(_)), "got: {err}");
    }
}
