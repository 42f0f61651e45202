//! User profile: fetch the signed-in user and update display preferences.

pub mod types;

use serde_json::Value;
use tracing::debug;

use crate::transport::{ApiClient, Result};

pub use types::{Preferences, Profile, ProfileUpdate, ProfileUser};

pub const PROFILE_PATH: &str = "/api/profile";

pub async fn fetch_profile(api: &ApiClient) -> Result<Profile> {
    api.get_json(PROFILE_PATH).await
}

/// Partial update: only the fields present in `update` are sent.
pub async fn update_profile(api: &ApiClient, update: &ProfileUpdate) -> Result<Value> {
    debug!(?update, "updating profile");
    api.put_json(PROFILE_PATH, update).await
}
