use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use sih_core::{NewAccountIdentity, RegistrationBackend, RegistrationError};

/// HTTP client for the account-registration backend.
///
/// The opaque identity token and authorization code travel base64-encoded;
/// the backend verifies them with the authority, not us.
pub struct RegistrationClient {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct RegisterUser<'a> {
    identifier: &'a str,
    full_name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    user: RegisterUser<'a>,
    identity_token: String,
    authorization_code: String,
}

impl RegistrationClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn error_from_body(status: reqwest::StatusCode, body: &Value) -> RegistrationError {
        match body.get("error") {
            Some(error) => {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                RegistrationError::server(code, message)
            }
            None => RegistrationError::server("UNKNOWN", format!("HTTP {}", status)),
        }
    }
}

#[async_trait]
impl RegistrationBackend for RegistrationClient {
    async fn register(&self, identity: &NewAccountIdentity) -> Result<bool, RegistrationError> {
        let url = format!("{}/api/v1/users/register", self.base_url);
        let request = RegisterRequest {
            user: RegisterUser {
                identifier: &identity.identifier,
                full_name: &identity.full_name,
                email: &identity.email,
            },
            identity_token: BASE64.encode(&identity.identity_token),
            authorization_code: BASE64.encode(&identity.authorization_code),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RegistrationError::network(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| RegistrationError::invalid_response(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &body));
        }

        let registered = body
            .get("registered")
            .and_then(|v| v.as_bool())
            .ok_or_else(|| RegistrationError::invalid_response("missing 'registered' field"))?;

        log::debug!(
            "Registration for '{}' returned {}",
            identity.identifier,
            registered
        );

        Ok(registered)
    }
}
