use serde::{Deserialize, Serialize};

use crate::users::UserView;

/// Request body for user registration. Unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_unknown_fields() {
        let res = serde_json::from_str::<RegisterRequest>(
            r#"{"name":"a","email":"a@x.com","password":"secret1","role":"admin"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn register_phone_is_optional() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name":"a","email":"a@x.com","password":"secret1"}"#,
        )
        .unwrap();
        assert!(req.phone.is_none());
    }
}
