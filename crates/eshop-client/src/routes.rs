//! Client route table, guards and the navigation menu.

use eshop_auth::{Role, Session};

/// Routes of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, always forwarded to home.
    Root,
    Home,
    Login,
    SignUp,
    ProductAdd,
    ProductModify,
    ProductView,
    ProductOrder,
    /// Anything else; shows the error page.
    NotFound(String),
}

impl Route {
    /// Parse a path, ignoring any query string or trailing slash.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Root,
            "/home" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::SignUp,
            "/product/add" => Route::ProductAdd,
            "/product/modify" => Route::ProductModify,
            "/product/view" => Route::ProductView,
            "/product/order" => Route::ProductOrder,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Root => "/",
            Route::Home => "/home",
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::ProductAdd => "/product/add",
            Route::ProductModify => "/product/modify",
            Route::ProductView => "/product/view",
            Route::ProductOrder => "/product/order",
            Route::NotFound(path) => path,
        }
    }

    /// Routes only shown to visitors who are not logged in.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::SignUp)
    }

    /// Roles of which the user needs at least one.
    pub fn required_roles(&self) -> &'static [&'static str] {
        match self {
            Route::ProductAdd | Route::ProductModify => &["ADMIN"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Guard decision for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(Route),
}

/// Decide whether `session` may open `route`.
pub fn guard(route: &Route, session: Option<&Session>) -> Guard {
    match (route, session) {
        (Route::Root, _) => Guard::Redirect(Route::Home),
        (r, None) if r.is_guest_only() => Guard::Allow,
        (_, None) => Guard::Redirect(Route::Login),
        (r, Some(_)) if r.is_guest_only() => Guard::Redirect(Route::Home),
        (r, Some(s)) => {
            let required = r.required_roles();
            if required.is_empty() || s.has_role(required) {
                Guard::Allow
            } else {
                Guard::Redirect(Route::Home)
            }
        }
    }
}

/// Where a view wants to go next, with the state it hands over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    /// JSON navigation state, as read by the target view.
    pub state: Option<String>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: Route, state: impl Into<String>) -> Self {
        Self {
            route,
            state: Some(state.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Menu entries visible to `session`.
pub fn menu(session: Option<&Session>) -> Vec<MenuItem> {
    let is_admin = session.is_some_and(|s| s.has_role(&[Role::Admin.as_str()]));
    let mut items = Vec::new();
    if session.is_some() {
        items.push(MenuItem {
            label: "Home",
            path: "/home",
        });
        if is_admin {
            items.push(MenuItem {
                label: "Add Product",
                path: "/product/add",
            });
        }
    } else {
        items.push(MenuItem {
            label: "Login",
            path: "/login",
        });
        items.push(MenuItem {
            label: "Sign Up",
            path: "/signup",
        });
    }
    items
}
