//! User record returned by the Asana identity endpoint.

use serde::Deserialize;

/// Profile of the authenticated user from `GET /users/me`; used to verify
/// a token before any data is fetched.
#[derive(Debug, Deserialize, Clone)]
pub struct UserProfile {
    pub gid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
