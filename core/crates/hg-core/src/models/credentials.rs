use crate::{CoreError, Result as CoreErrorResult};

/// Email/password pair handed to the identity provider.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only used by sign-up
    pub display_name: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Cheap local checks before the provider is contacted.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("email", "email cannot be empty"));
        }
        if !email.contains('@') {
            return Err(CoreError::validation("email", "email must contain '@'"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "password cannot be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}
