//! Authentication module for CampusPass.
//!
//! This module provides the auth session manager, registration
//! requests, and form validation.

mod manager;
mod registration;
pub mod validation;

pub use manager::{AuthError, AuthManager, AuthState, DEFAULT_SIMULATED_LATENCY};
pub use registration::{RegistrationRequest, RoleDetails};
pub use validation::{FormError, MIN_PASSWORD_LENGTH};
