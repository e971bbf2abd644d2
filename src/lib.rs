//! CampusPass - attendance portal authentication core
//!
//! Role-based authentication, session persistence, and route
//! authorization for a campus attendance portal.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod route;
pub mod store;
pub mod user;
pub mod view;

pub use auth::{
    AuthError, AuthManager, AuthState, FormError, RegistrationRequest, RoleDetails,
    DEFAULT_SIMULATED_LATENCY, MIN_PASSWORD_LENGTH,
};
pub use config::Config;
pub use directory::{IdentityDirectory, SeedDirectory};
pub use error::{PortalError, Result};
pub use route::{authorize, RouteDecision, RoutePath};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_FILE};
pub use user::{Role, RoleProfile, User};
pub use view::{LogNavigator, LogNotifier, Navigator, Notifier};
