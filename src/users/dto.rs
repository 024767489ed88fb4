use serde::Deserialize;

use crate::users::store::default_provider;

/// Request body for signup. `provider` falls back to "default".
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub id: String,
    pub password: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_when_missing() {
        let req: SignupRequest = serde_json::from_str(r#"{"id":"u1","password":"pw1"}"#).unwrap();
        assert_eq!(req.provider, "default");
    }

    #[test]
    fn provider_kept_when_supplied() {
        let req: SignupRequest =
            serde_json::from_str(r#"{"id":"u1","password":"pw1","provider":"github"}"#).unwrap();
        assert_eq!(req.provider, "github");
    }
}
