use axum::Json;

use crate::{middleware::AuthUser, models::UserProfile};

/// `GET /api/auth/me`: profile of the token's subject.
#[tracing::instrument(skip_all, fields(user_id = %user.0.user_id))]
pub async fn get_me(user: AuthUser) -> Json<UserProfile> {
    Json(UserProfile::from_claims(&user.0))
}
