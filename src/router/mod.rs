//! Client-side navigation: route table, guard and current location.

pub mod guard;
pub mod routes;

use std::sync::{Mutex, PoisonError};

pub use guard::{GuardDecision, RouteGuard};
pub use routes::{LOGIN_PATH, ResolvedRoute, Route, RouteMeta, RouteTable};

use crate::session::Session;

const MAX_REDIRECTS: usize = 8;

/// Navigation trigger used by the API client when a session ends.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed { location: String },
    Redirected { requested: String, location: String },
}

impl Navigation {
    pub fn location(&self) -> &str {
        match self {
            Navigation::Allowed { location } | Navigation::Redirected { location, .. } => location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NotFound(String),
    #[error("Too many redirects while navigating to {0}")]
    RedirectLoop(String),
}

#[derive(Debug, Default)]
struct RouterState {
    current: Option<String>,
    history: Vec<String>,
}

/// Applies the route table and the guard to every navigation.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    guard: RouteGuard,
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new(table: RouteTable, session: Session) -> Self {
        Self {
            table,
            guard: RouteGuard::new(session),
            state: Mutex::new(RouterState::default()),
        }
    }

    /// Router over the wallet route table
    pub fn wallet(session: Session) -> Self {
        Self::new(RouteTable::wallet(), session)
    }

    /// Navigates to `path`, following table redirects and guard redirects.
    ///
    /// # Errors
    /// Returns an error when no route matches or redirects do not settle.
    pub fn push(&self, path: &str) -> Result<Navigation, NavigationError> {
        let mut target = path.to_string();
        let mut redirected = false;

        for _ in 0..MAX_REDIRECTS {
            let route = self
                .table
                .resolve(&target)
                .ok_or_else(|| NavigationError::NotFound(target.clone()))?;

            if let Some(next) = route.redirect {
                target = next;
                redirected = true;
                continue;
            }

            match self.guard.check(route.meta) {
                GuardDecision::Allow => {
                    self.commit(&route.path);
                    let location = route.path;
                    return Ok(if redirected {
                        Navigation::Redirected {
                            requested: path.to_string(),
                            location,
                        }
                    } else {
                        Navigation::Allowed { location }
                    });
                }
                GuardDecision::Redirect(next) => {
                    target = next.to_string();
                    redirected = true;
                }
            }
        }

        Err(NavigationError::RedirectLoop(path.to_string()))
    }

    pub fn current(&self) -> Option<String> {
        self.state().current.clone()
    }

    /// Every committed location, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state().history.clone()
    }

    fn commit(&self, location: &str) {
        let mut state = self.state();
        state.current = Some(location.to_string());
        state.history.push(location.to_string());
    }

    fn state(&self) -> std::sync::MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        match self.push(path) {
            Ok(navigation) => tracing::debug!(location = navigation.location(), "Navigated"),
            Err(err) => tracing::warn!(error = %err, "Navigation failed"),
        }
    }
}
