//! Route table of the wallet web client.

pub const LOGIN_PATH: &str = "/login";

/// Navigation annotations consumed by the guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    /// Child routes inherit every annotation of their ancestors.
    fn inherit(self, child: RouteMeta) -> RouteMeta {
        RouteMeta {
            requires_auth: self.requires_auth || child.requires_auth,
            requires_admin: self.requires_admin || child.requires_admin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    name: Option<String>,
    meta: RouteMeta,
    redirect: Option<String>,
    children: Vec<Route>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            meta: RouteMeta::default(),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    pub fn requires_admin(mut self) -> Self {
        self.meta.requires_admin = true;
        self
    }

    pub fn redirect(mut self, to: impl Into<String>) -> Self {
        self.redirect = Some(to.into());
        self
    }

    pub fn children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// A path matched against the table, with inherited annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub name: Option<String>,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Routes of the wallet web client
    pub fn wallet() -> Self {
        Self::new(vec![
            Route::new("/").redirect(LOGIN_PATH),
            Route::new(LOGIN_PATH).name("Login"),
            Route::new("/register").name("Register"),
            Route::new("/admin").name("Admin").requires_admin(),
            Route::new("/dashboard")
                .name("Dashboard")
                .requires_auth()
                .children(vec![
                    Route::new("transfer").name("Transfer"),
                    Route::new("request").name("Request"),
                    Route::new("accounts").name("Accounts"),
                    Route::new("transactions").name("Transactions"),
                ]),
        ])
    }

    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let target = normalize(path);
        Self::find(&self.routes, "", RouteMeta::default(), &target)
    }

    fn find(routes: &[Route], parent: &str, meta: RouteMeta, target: &str) -> Option<ResolvedRoute> {
        for route in routes {
            let full = join(parent, &route.path);
            let meta = meta.inherit(route.meta);

            if full == target {
                return Some(ResolvedRoute {
                    path: full,
                    name: route.name.clone(),
                    meta,
                    redirect: route.redirect.clone(),
                });
            }

            let prefix = format!("{}/", full.trim_end_matches('/'));
            if !route.children.is_empty()
                && target.starts_with(&prefix)
                && let Some(found) = Self::find(&route.children, &full, meta, target)
            {
                return Some(found);
            }
        }
        None
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::wallet()
    }
}

/// Drops query and fragment, forces a leading slash and removes trailing ones.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}

fn join(parent: &str, path: &str) -> String {
    if path.starts_with('/') {
        return normalize(path);
    }
    normalize(&format!("{}/{}", parent.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_top_level_routes() {
        let table = RouteTable::wallet();
        let login = table.resolve("/login").unwrap();
        assert_eq!(login.name.as_deref(), Some("Login"));
        assert_eq!(login.meta, RouteMeta::default());

        let admin = table.resolve("/admin").unwrap();
        assert!(admin.meta.requires_admin);
        assert!(!admin.meta.requires_auth);
    }

    #[test]
    fn root_redirects_to_login() {
        let root = RouteTable::wallet().resolve("/").unwrap();
        assert_eq!(root.redirect.as_deref(), Some(LOGIN_PATH));
    }

    #[test]
    fn children_inherit_auth_requirement() {
        let table = RouteTable::wallet();
        let transfer = table.resolve("/dashboard/transfer").unwrap();
        assert_eq!(transfer.name.as_deref(), Some("Transfer"));
        assert!(transfer.meta.requires_auth);
    }

    #[test]
    fn normalizes_trailing_slash_and_query() {
        let table = RouteTable::wallet();
        let route = table.resolve("/dashboard/accounts/?tab=1#top").unwrap();
        assert_eq!(route.path, "/dashboard/accounts");
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        let table = RouteTable::wallet();
        assert!(table.resolve("/settings").is_none());
        assert!(table.resolve("/dashboard/unknown").is_none());
        assert!(table.resolve("/dashboardx").is_none());
    }
}
