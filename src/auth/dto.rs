use serde::{Deserialize, Serialize};

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: u16,
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_wire_names() {
        let res = LoginResponse {
            status: 200,
            access_token: "a".into(),
            refresh_token: "r".into(),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains(r#""accessToken":"a""#));
        assert!(json.contains(r#""refreshToken":"r""#));
        assert!(json.contains(r#""status":200"#));
    }
}
