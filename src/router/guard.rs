//! Navigation gate for auth and admin routes.

use super::routes::{LOGIN_PATH, RouteMeta};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decides whether a navigation target may render for the current session.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The admin check runs first: an admin-only route is refused for a
    /// signed-in regular user rather than falling through to the auth check.
    pub fn check(&self, meta: RouteMeta) -> GuardDecision {
        if meta.requires_admin && !self.session.is_admin() {
            tracing::debug!("Admin route refused, redirecting to login");
            GuardDecision::Redirect(LOGIN_PATH)
        } else if meta.requires_auth && !self.session.is_authenticated() {
            tracing::debug!("Protected route without token, redirecting to login");
            GuardDecision::Redirect(LOGIN_PATH)
        } else {
            GuardDecision::Allow
        }
    }
}
