//! Login
//!
//! The login form asks an `Authenticator`; the storefront ships a demo one
//! that accepts a single configured account.

use async_trait::async_trait;

use crate::config::DemoAccount;
use crate::i18n::LocalizedText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build from raw field values, trimming surrounding whitespace
    pub fn from_fields(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, AuthError>;
}

/// Accepts exactly the configured demo account. No session is created.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    account: DemoAccount,
}

impl DemoAuthenticator {
    pub fn new(account: DemoAccount) -> Self {
        Self { account }
    }
}

#[async_trait(?Send)]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        Ok(credentials.email == self.account.email && credentials.password == self.account.password)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure,
}

impl LoginOutcome {
    pub fn message(self) -> LocalizedText {
        match self {
            LoginOutcome::Success => LocalizedText::new(
                "تم تسجيل الدخول بنجاح! مرحباً بك في My Fragrance.",
                "Login Successful! Welcome to My Fragrance.",
            ),
            LoginOutcome::Failure => LocalizedText::new(
                "البريد الإلكتروني أو كلمة المرور غير صحيحة. حاول مرة أخرى.",
                "Invalid email or password. Please try again.",
            ),
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LoginOutcome::Success => "green",
            LoginOutcome::Failure => "red",
        }
    }
}

/// Run a login attempt. Authenticator errors count as a failed login.
pub async fn attempt_login(auth: &dyn Authenticator, credentials: &Credentials) -> LoginOutcome {
    match auth.authenticate(credentials).await {
        Ok(true) => {
            log::info!("[LOGIN] Signed in as {}", credentials.email);
            LoginOutcome::Success
        }
        Ok(false) => {
            log::info!("[LOGIN] Rejected credentials for {}", credentials.email);
            LoginOutcome::Failure
        }
        Err(e) => {
            log::error!("[LOGIN] {}", e);
            LoginOutcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    #[async_trait(?Send)]
    impl Authenticator for Offline {
        async fn authenticate(&self, _credentials: &Credentials) -> Result<bool, AuthError> {
            Err(AuthError::Unavailable("offline".to_string()))
        }
    }

    fn demo() -> DemoAuthenticator {
        DemoAuthenticator::new(DemoAccount::default())
    }

    #[tokio::test]
    async fn test_demo_account_succeeds() {
        let creds = Credentials::from_fields("  user@example.com ", "123456\n");
        let outcome = attempt_login(&demo(), &creds).await;
        assert_eq!(outcome, LoginOutcome::Success);
        assert_eq!(outcome.color(), "green");
    }

    #[tokio::test]
    async fn test_other_pairs_fail() {
        for (email, password) in [
            ("user@example.com", "654321"),
            ("admin@example.com", "123456"),
            ("", ""),
            ("USER@example.com", "123456"),
        ] {
            let creds = Credentials::from_fields(email, password);
            let outcome = attempt_login(&demo(), &creds).await;
            assert_eq!(outcome, LoginOutcome::Failure);
            assert_eq!(outcome.color(), "red");
        }
    }

    #[tokio::test]
    async fn test_authenticator_error_is_failure() {
        let creds = Credentials::from_fields("user@example.com", "123456");
        assert_eq!(attempt_login(&Offline, &creds).await, LoginOutcome::Failure);
    }
}
