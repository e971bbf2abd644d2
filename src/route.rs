//! Route authorization for CampusPass.
//!
//! The gate is a pure decision function over the current session state
//! and the set of roles a view admits: render, or redirect to sign-in /
//! the user's own landing view. It performs no side effects of its own;
//! the caller acts on the returned decision.

use std::fmt;

use crate::user::{Role, User};

/// Navigable views of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    /// Sign-in view; also the target for any unauthenticated access.
    Login,
    /// Account registration view.
    Register,
    /// Student landing view.
    StudentDashboard,
    /// Teacher landing view.
    TeacherDashboard,
    /// Admin landing view.
    AdminDashboard,
}

impl RoutePath {
    /// The path string of this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Login => "/login",
            RoutePath::Register => "/register",
            RoutePath::StudentDashboard => "/student/dashboard",
            RoutePath::TeacherDashboard => "/teacher/dashboard",
            RoutePath::AdminDashboard => "/admin/dashboard",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// The landing view a user of this role is redirected to.
    pub fn landing(self) -> RoutePath {
        match self {
            Role::Student => RoutePath::StudentDashboard,
            Role::Teacher => RoutePath::TeacherDashboard,
            Role::Admin => RoutePath::AdminDashboard,
        }
    }
}

/// Outcome of a route authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected view.
    Render,
    /// Redirect to the given view instead.
    Redirect(RoutePath),
}

/// Decide whether the current user may see a view admitting `allowed`
/// roles.
///
/// No user redirects to sign-in; a user of a role outside the allowed
/// set is sent to their own landing view rather than to sign-in. The
/// role match is exhaustive: an out-of-set role cannot fall through.
pub fn authorize(user: Option<&User>, allowed: &[Role]) -> RouteDecision {
    let user = match user {
        Some(user) => user,
        None => return RouteDecision::Redirect(RoutePath::Login),
    };

    let role = user.role();
    if allowed.contains(&role) {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect(role.landing())
    }
}
