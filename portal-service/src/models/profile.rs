use serde::{Deserialize, Serialize};

use crate::services::TokenClaims;

// Placeholder identity until profiles come from a user directory keyed by
// `userId`. Only `id` and `email` are real.
pub const STUB_DISPLAY_NAME: &str = "John Developer";
pub const STUB_AVATAR_URL: &str = "https://github.com/johndoe.png";
pub const STUB_PROVIDER: &str = "github";

/// Profile returned by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub provider: String,
}

impl UserProfile {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            id: claims.user_id.clone(),
            name: STUB_DISPLAY_NAME.to_string(),
            email: claims.email.clone(),
            avatar: STUB_AVATAR_URL.to_string(),
            provider: STUB_PROVIDER.to_string(),
        }
    }
}
