//! Auth session management for CampusPass.
//!
//! The manager is the single source of truth for who is signed in and
//! whether an auth operation is in flight. It orchestrates the identity
//! directory, the session store, and the view-layer collaborators.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::registration::RegistrationRequest;
use crate::directory::IdentityDirectory;
use crate::route::RoutePath;
use crate::store::SessionStore;
use crate::user::User;
use crate::view::{Navigator, Notifier};

/// Default simulated backend latency for login/register.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Auth operation errors surfaced to the form layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login email not found in the identity directory.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration email already present in the identity directory.
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// Another auth operation is already in flight; the call was
    /// ignored without any state change.
    #[error("another sign-in operation is in progress")]
    Busy,
}

/// Session state of the portal.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// No session.
    Unauthenticated,
    /// A login submission is in flight.
    AuthenticatingLogin,
    /// A registration submission is in flight.
    AuthenticatingRegister,
    /// A user is signed in.
    Authenticated(User),
}

/// Auth session manager.
///
/// One instance lives for the process lifetime and is injected into the
/// view layer; all transitions happen through `&mut self` in response
/// to discrete user events, so no locking is involved.
pub struct AuthManager {
    directory: Arc<dyn IdentityDirectory>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    state: AuthState,
}

impl AuthManager {
    /// Create a manager, restoring any persisted session.
    ///
    /// A missing or malformed stored record starts the manager
    /// unauthenticated; that case is never surfaced to the user.
    pub fn new(
        directory: Arc<dyn IdentityDirectory>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = match store.load() {
            Some(user) => {
                info!(email = %user.email, role = %user.role(), "Restored persisted session");
                AuthState::Authenticated(user)
            }
            None => AuthState::Unauthenticated,
        };

        Self {
            directory,
            store,
            navigator,
            notifier,
            latency: DEFAULT_SIMULATED_LATENCY,
            state,
        }
    }

    /// Override the simulated backend latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The currently signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a login or registration is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            AuthState::AuthenticatingLogin | AuthState::AuthenticatingRegister
        )
    }

    /// The full session state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Sign in with an email and password.
    ///
    /// Resolves the email against the identity directory; on success
    /// the user is persisted, announced, and routed to their role's
    /// landing view.
    ///
    /// Known gap, preserved from the portal this core fronts: the
    /// directory stores no credentials, so the password is accepted
    /// unchecked once the email resolves. Must not ship beyond a
    /// mock/demo identity backend.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        if self.is_busy() {
            debug!(email = %email, "Ignoring re-entrant login call");
            return Err(AuthError::Busy);
        }
        let _ = password;

        self.state = AuthState::AuthenticatingLogin;
        info!(email = %email, "Login attempt");
        self.simulate_backend().await;

        let user = match self.directory.find_by_email(email) {
            Some(user) => user,
            None => {
                self.state = AuthState::Unauthenticated;
                warn!(email = %email, "Login failed: email not in directory");
                self.notifier.error("Invalid email or password");
                return Err(AuthError::InvalidCredentials);
            }
        };

        // A failed write costs session durability, not the login itself
        if let Err(e) = self.store.save(&user) {
            warn!(email = %email, error = %e, "Failed to persist session");
        }

        let landing = user.role().landing();
        self.state = AuthState::Authenticated(user.clone());
        info!(
            email = %user.email,
            user_id = %user.id,
            role = %user.role(),
            "Login successful"
        );
        self.notifier.success("Login successful!");
        self.navigator.navigate_to(landing);

        Ok(user)
    }

    /// Register a new account.
    ///
    /// The request is expected to be form-validated already. A duplicate
    /// email fails and leaves the session state as it was; success ends
    /// unauthenticated and routes to sign-in (no auto-sign-in). The
    /// directory itself is read-only, so the returned record is the
    /// acknowledgement, not a stored account.
    pub async fn register(
        &mut self,
        request: RegistrationRequest,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.is_busy() {
            debug!(email = %request.email, "Ignoring re-entrant register call");
            return Err(AuthError::Busy);
        }
        let _ = password;

        let prior = std::mem::replace(&mut self.state, AuthState::AuthenticatingRegister);
        info!(email = %request.email, role = %request.role(), "Registration attempt");
        self.simulate_backend().await;

        if self.directory.email_exists(&request.email) {
            self.state = prior;
            warn!(email = %request.email, "Registration failed: email already registered");
            self.notifier.error("User already exists with this email");
            return Err(AuthError::DuplicateEmail);
        }

        let user = request.into_user();
        self.state = AuthState::Unauthenticated;
        info!(email = %user.email, user_id = %user.id, "Registration accepted");
        self.notifier.success("Registration successful! Please log in.");
        self.navigator.navigate_to(RoutePath::Login);

        Ok(user)
    }

    /// Sign out.
    ///
    /// Clears the persisted session and routes to sign-in. Idempotent:
    /// signing out twice leaves the same observable state.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session slot");
        }

        let was_signed_in = matches!(self.state, AuthState::Authenticated(_));
        self.state = AuthState::Unauthenticated;
        info!(was_signed_in, "Logged out");
        self.notifier.info("You have been logged out");
        self.navigator.navigate_to(RoutePath::Login);
    }

    async fn simulate_backend(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
