use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub user: ProfileUser,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    pub currency: String,
    pub theme: String,
}

/// Payload for `PUT /api/profile`; absent fields are left untouched by the
/// backend, so they are skipped in serialization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.currency.is_none() && self.theme.is_none()
    }
}
