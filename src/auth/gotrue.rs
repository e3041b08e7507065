//! GoTrue-compatible identity service over a blocking `reqwest` client.

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Value, json};

use super::provider::{AuthError, IdentityProvider, Session, SignInAttempt, SignUpAttempt, User};
use crate::listings::BackendConfig;
use crate::listings::source::api_headers;

/// Error codes meaning "the account exists but is not usable yet".
const INCOMPLETE_CODES: [&str; 2] = ["email_not_confirmed", "phone_not_confirmed"];

pub struct GoTrueProvider {
    client: Client,
    backend: BackendConfig,
}

impl GoTrueProvider {
    pub fn new(backend: BackendConfig) -> Result<Self, AuthError> {
        let headers =
            api_headers(&backend.anon_key).map_err(|err| AuthError::new(err.to_string()))?;
        let client = Client::builder()
            .timeout(None)
            .default_headers(headers)
            .build()
            .map_err(|err| AuthError::new(err.to_string()))?;
        Ok(Self { client, backend })
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, AuthError> {
        let url = self
            .backend
            .endpoint(path)
            .map_err(|err| AuthError::new(err.to_string()))?;
        debug!("identity request {path}");
        Ok(self.client.post(url))
    }

    fn send(request: RequestBuilder) -> Result<Value, AuthError> {
        let response = request.send().map_err(|err| AuthError::new(err.to_string()))?;
        let status = response.status();
        let body = response.text().map_err(|err| AuthError::new(err.to_string()))?;
        if !status.is_success() {
            return Err(auth_error(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| AuthError::new(err.to_string()))
    }
}

impl IdentityProvider for GoTrueProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<SignInAttempt, AuthError> {
        let request = self
            .post("auth/v1/token?grant_type=password")?
            .json(&json!({ "email": email, "password": password }));
        match Self::send(request) {
            Ok(body) => session_from(&body)
                .map(SignInAttempt::Complete)
                .ok_or_else(|| AuthError::new("identity service returned no session")),
            Err(err) if is_incomplete(&err) => Ok(SignInAttempt::NeedsFurtherSteps),
            Err(err) => Err(err),
        }
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<SignUpAttempt, AuthError> {
        let request = self
            .post("auth/v1/signup")?
            .json(&json!({ "email": email, "password": password }));
        let body = Self::send(request)?;
        Ok(match session_from(&body) {
            Some(session) => SignUpAttempt::Complete(session),
            None => SignUpAttempt::VerificationSent,
        })
    }

    fn verify_email(&self, email: &str, code: &str) -> Result<Session, AuthError> {
        let request = self
            .post("auth/v1/verify")?
            .json(&json!({ "type": "signup", "email": email, "token": code }));
        let body = Self::send(request)?;
        session_from(&body).ok_or_else(|| AuthError::new("Unable to complete signup"))
    }

    fn resend_code(&self, email: &str) -> Result<(), AuthError> {
        let request = self
            .post("auth/v1/resend")?
            .json(&json!({ "type": "signup", "email": email }));
        Self::send(request).map(|_| ())
    }

    fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let request = self.post("auth/v1/logout")?.bearer_auth(&session.access_token);
        Self::send(request).map(|_| ())
    }

    fn delete_account(&self, session: &Session) -> Result<(), AuthError> {
        let request = self
            .post("rest/v1/rpc/delete_user")?
            .bearer_auth(&session.access_token)
            .json(&json!({}));
        Self::send(request).map(|_| ())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error_code: Option<String>,
    error: Option<String>,
}

/// Turn an error response into messages, keeping the machine code first when
/// the body carries one so callers can branch on it.
pub(crate) fn auth_error(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let text = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("request failed with HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });
    let mut messages = vec![text];
    if let Some(code) = parsed.error_code.or(parsed.error) {
        messages.push(code);
    }
    AuthError { messages }
}

fn is_incomplete(err: &AuthError) -> bool {
    err.messages.iter().any(|message| {
        INCOMPLETE_CODES.contains(&message.as_str()) || message == "Email not confirmed"
    })
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    access_token: String,
    refresh_token: String,
    user: UserBody,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: Value,
}

/// A session when the body is a token response, `None` for a bare user.
pub(crate) fn session_from(body: &Value) -> Option<Session> {
    let token: TokenBody = serde_json::from_value(body.clone()).ok()?;
    let full_name = token
        .user
        .user_metadata
        .get("full_name")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        user: User {
            id: token.user.id,
            email: token.user.email,
            full_name,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_becomes_a_session() {
        let body = json!({
            "access_token": "at",
            "refresh_token": "rt",
            "token_type": "bearer",
            "user": {
                "id": "u1",
                "email": "ada@example.com",
                "user_metadata": {"full_name": "Ada Lovelace"}
            }
        });
        let session = session_from(&body).unwrap();
        assert_eq!(session.access_token, "at");
        assert_eq!(session.user.full_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn bare_user_response_is_not_a_session() {
        let body = json!({
            "id": "u1",
            "email": "ada@example.com",
            "confirmation_sent_at": "2024-01-01"
        });
        assert_eq!(session_from(&body), None);
    }

    #[test]
    fn error_bodies_yield_the_human_message_first() {
        let err = auth_error(
            400,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(err.first_message(), "Invalid login credentials");

        let legacy = auth_error(
            400,
            r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#,
        );
        assert_eq!(legacy.first_message(), "Email not confirmed");
        assert!(is_incomplete(&legacy));

        let plain = auth_error(502, "");
        assert_eq!(plain.first_message(), "request failed with HTTP 502");
    }
}
