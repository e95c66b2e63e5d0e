use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,

    #[serde(default)]
    pub token_type: String,
}

// Identity state for the lifetime of the application process. Held in
// memory only; the credential itself lives in the session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub user_id: Option<u64>,
    pub last_error: Option<String>,
}

impl Session {
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn confirmed(identity: UserIdentity) -> Self {
        Self {
            is_logged_in: true,
            username: Some(identity.username),
            user_id: Some(identity.id),
            last_error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            last_error: Some(error.into()),
            ..Self::default()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Session, UserIdentity};

    #[test]
    fn confirmed_login_carries_identity_and_clears_error() {
        let session = Session::failed("bad password");
        assert!(!session.is_logged_in);
        assert_eq!(session.last_error.as_deref(), Some("bad password"));

        let session = Session::confirmed(UserIdentity {
            id: 12,
            username: "ada".to_string(),
        });
        assert!(session.is_logged_in);
        assert_eq!(session.username.as_deref(), Some("ada"));
        assert_eq!(session.user_id, Some(12));
        assert!(session.last_error.is_none());
    }

    #[test]
    fn failed_login_stays_logged_out_with_error() {
        let session = Session::failed("Incorrect username or password");
        assert!(!session.is_logged_in);
        assert!(session.username.is_none());
        assert!(session.user_id.is_none());
        assert!(session.last_error.is_some());
    }

    #[test]
    fn identity_payload_shape() {
        let identity: UserIdentity =
            serde_json::from_str(r#"{"id":3,"username":"ada"}"#).expect("identity payload");
        assert_eq!(identity.id, 3);
        assert_eq!(identity.username, "ada");
    }
}
