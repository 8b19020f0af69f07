//! The profile cache.
//!
//! Generated profiles are keyed by (platform, normalized username) and
//! reused on reconnect; only an explicit refresh resamples. The cache is
//! an owned value passed around by the caller — there is no ambient
//! global state.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SocialError;
use crate::generate::{generate, normalize_username};
use crate::platform::Platform;
use crate::types::SocialProfile;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileCache {
    profiles: HashMap<String, SocialProfile>,
}

impl ProfileCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect an account: return the cached profile for this
    /// (platform, username) pair, generating one only on first connect.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::EmptyUsername`] for an empty or
    /// whitespace-only username.
    pub fn connect<R: Rng>(
        &mut self,
        rng: &mut R,
        platform: Platform,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<&SocialProfile, SocialError> {
        let username = username.trim();
        let key = Self::key(platform, username)?;
        match self.profiles.entry(key) {
            Entry::Occupied(entry) => {
                tracing::debug!(platform = %platform, username, "profile cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let profile = generate(rng, platform, username, now);
                Ok(entry.insert(profile))
            }
        }
    }

    /// Resample the profile for this pair, replacing any cached entry.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::EmptyUsername`] for an empty or
    /// whitespace-only username.
    pub fn refresh<R: Rng>(
        &mut self,
        rng: &mut R,
        platform: Platform,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<&SocialProfile, SocialError> {
        let username = username.trim();
        let key = Self::key(platform, username)?;
        let profile = generate(rng, platform, username, now);
        Ok(self.profiles.entry(key).insert_entry(profile).into_mut())
    }

    /// Look up a cached profile without generating.
    #[must_use]
    pub fn get(&self, platform: Platform, username: &str) -> Option<&SocialProfile> {
        let key = Self::key(platform, username).ok()?;
        self.profiles.get(&key)
    }

    /// Remove a cached profile, returning it if present ("disconnect").
    pub fn disconnect(&mut self, platform: Platform, username: &str) -> Option<SocialProfile> {
        let key = Self::key(platform, username).ok()?;
        self.profiles.remove(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Cached (key, profile) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SocialProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn key(platform: Platform, username: &str) -> Result<String, SocialError> {
        let normalized = normalize_username(username.trim());
        if normalized.trim().is_empty() {
            return Err(SocialError::EmptyUsername);
        }
        Ok(format!("{platform}:{normalized}"))
    }
}
