use crate::error::Result;
use crate::navigator::Navigator;
use crate::storage::Storage;

use tokenward_types::names::{LOGIN_ROUTE, TOKEN_KEY};
use tokenward_types::Settings;

/// Outcome of [`Session::require_auth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// The page was sent to the login route.
    Redirected,
}

/// Reads, writes and clears the token, and sends unauthenticated visitors to
/// the login page.
///
/// The gate is client side only: it decides what the page renders, never what
/// the server serves.
pub struct Session<S, N> {
    storage: S,
    navigator: N,
    settings: Settings,
}

impl<S: Storage, N: Navigator> Session<S, N> {
    pub fn new(storage: S, navigator: N, settings: Settings) -> Self {
        Self {
            storage,
            navigator,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn api_url(&self) -> &str {
        &self.settings.api_url
    }

    pub fn get_token(&self) -> Result<Option<String>> {
        self.storage.get(TOKEN_KEY)
    }

    /// Overwrites any previous token. The value is not validated.
    pub fn set_token(&self, token: &str) -> Result<()> {
        tracing::debug!("storing token");
        self.storage.set(TOKEN_KEY, token)
    }

    /// An empty token counts as no token.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self
            .get_token()?
            .map(|token| !token.is_empty())
            .unwrap_or(false))
    }

    /// Clears the token and leaves the page. Callers should not expect to
    /// keep running afterwards.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        tracing::info!("logged out, going to {LOGIN_ROUTE}");
        self.navigator.go_to(LOGIN_ROUTE)
    }

    pub fn require_auth(&self) -> Result<Access> {
        if self.is_authenticated()? {
            return Ok(Access::Granted);
        }
        tracing::info!("no token, going to {LOGIN_ROUTE}");
        self.navigator.go_to(LOGIN_ROUTE)?;
        Ok(Access::Redirected)
    }
}
