//! Admin login: password step, optional emailed one-time code, access check.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError, Result};
use crate::users::UserQuery;

const LOGIN_PATH: &str = "/accounts/admin/login/";
const VERIFY_OTP_PATH: &str = "/accounts/admin/login/verify-otp/";
const OTP_LENGTH: usize = 6;

/// What the backend asked for after the password step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginOutcome {
    /// Logged in; the token is already stored in the session.
    Authenticated { access: String },
    /// A one-time code was sent; finish with [`ApiClient::verify_otp`].
    ChallengeRequired {
        challenge_token: String,
        email: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    challenge_token: &'a str,
    verification_code: &'a str,
}

/// Union of the fields either login endpoint may return.
#[derive(Debug, Default, Deserialize)]
struct LoginPayload {
    #[serde(default)]
    access: Option<String>,
    #[serde(default)]
    requires_2fa: bool,
    #[serde(default)]
    challenge_token: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl LoginPayload {
    fn into_outcome(self) -> Result<LoginOutcome> {
        if self.requires_2fa {
            if let Some(challenge_token) = self.challenge_token.filter(|t| !t.is_empty()) {
                return Ok(LoginOutcome::ChallengeRequired {
                    challenge_token,
                    email: self.email,
                });
            }
        }
        match self.access.filter(|t| !t.is_empty()) {
            Some(access) => Ok(LoginOutcome::Authenticated { access }),
            None => Err(ApiError::Auth("No access token returned.".to_string())),
        }
    }
}

impl ApiClient {
    /// Password step of the admin login.
    ///
    /// On [`LoginOutcome::Authenticated`] the token is stored and verified
    /// against a protected endpoint before returning.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginOutcome> {
        let identifier = identifier.trim();
        let password = password.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Email or phone number and password are required.".to_string(),
            ));
        }

        let builder = self
            .anonymous_request(Method::POST, LOGIN_PATH)
            .json(&LoginRequest {
                identifier,
                password,
            });
        let payload: LoginPayload = self.send_json(builder, LOGIN_PATH, "Access denied.").await?;

        let outcome = payload.into_outcome()?;
        match &outcome {
            LoginOutcome::Authenticated { access } => {
                self.establish(access).await?;
                tracing::info!("Admin login succeeded");
            }
            LoginOutcome::ChallengeRequired { email, .. } => {
                tracing::info!(email = email.as_deref().unwrap_or("-"), "Admin login requires one-time code");
            }
        }
        Ok(outcome)
    }

    /// Second step: exchange the challenge token and emailed code for an access token.
    pub async fn verify_otp(&self, challenge_token: &str, code: &str) -> Result<String> {
        let code = code.trim();
        if challenge_token.is_empty() || code.chars().count() != OTP_LENGTH {
            return Err(ApiError::Validation(
                "Enter the 6-digit verification code.".to_string(),
            ));
        }

        let builder = self
            .anonymous_request(Method::POST, VERIFY_OTP_PATH)
            .json(&VerifyOtpRequest {
                challenge_token,
                verification_code: code,
            });
        let payload: LoginPayload = self
            .send_json(builder, VERIFY_OTP_PATH, "Verification failed.")
            .await?;

        let access = payload
            .access
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Auth("No access token returned.".to_string()))?;
        self.establish(&access).await?;
        tracing::info!("Admin one-time code verified");
        Ok(access)
    }

    /// Confirm the current token can read the admin user list.
    pub async fn check_access(&self) -> Result<()> {
        let query = UserQuery {
            page_size: Some(1),
            ..Default::default()
        };
        self.list_users(&query).await.map(|_| ())
    }

    /// Store a fresh token and verify it; on failure the session is cleared.
    async fn establish(&self, access: &str) -> Result<()> {
        self.session().set_token(access);
        if let Err(e) = self.check_access().await {
            self.session().clear();
            return Err(e);
        }
        Ok(())
    }
}
