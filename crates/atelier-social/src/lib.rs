//! Synthetic social analytics for Atelier.
//!
//! Generates complete mock analytics profiles for connected social
//! accounts — follower counts, engagement series, recent posts — with
//! platform-specific statistical skew. This is a fabrication engine for
//! demos; nothing here reflects real social-media data.
//!
//! All sampling goes through a caller-supplied [`rand::Rng`], so tests can
//! seed a [`rand::rngs::StdRng`] and assert exact derived values.

pub mod cache;
pub mod error;
pub mod generate;
pub mod overrides;
pub mod platform;
pub mod store;
pub mod types;

pub use cache::ProfileCache;
pub use error::SocialError;
pub use generate::{generate, normalize_username};
pub use platform::Platform;
pub use types::{ContentDistribution, MonthEngagement, PostKind, RecentPost, SocialProfile};
