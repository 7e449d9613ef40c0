use uuid::Uuid;

use crate::error::ApiError;

/// Caller identity for a request.
///
/// Identity is claimed by the client — an id carried in the body or the
/// path — not proven by a credential. Handlers obtain it through this
/// type, so a token scheme can replace the construction site without
/// touching the CRUD code.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    pub fn from_claimed(user_id: Option<Uuid>) -> Result<Self, ApiError> {
        match user_id {
            Some(user_id) => Ok(Self { user_id }),
            None => Err(ApiError::Authentication("User ID is required".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn missing_id_is_unauthorized() {
        let err = AuthContext::from_claimed(None).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn present_id_passes_through() {
        let id = Uuid::new_v4();
        let ctx = AuthContext::from_claimed(Some(id)).unwrap();
        assert_eq!(ctx.user_id, id);
    }
}
