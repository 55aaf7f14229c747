//! Routing shell
//!
//! Parses URL paths into [`Route`]s and applies the role gates: cart and
//! tracking pages need a session, profile/favorites need a customer,
//! restaurant pages need an owner, `/admin` needs an admin.

use std::fmt;

use shared::models::UserRole;

use super::session::SessionStore;

/// Restaurant dashboard tab (`?tab=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Orders,
    Menu,
    Reservations,
}

impl DashboardTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Menu => "menu",
            Self::Reservations => "reservations",
        }
    }

    /// Unknown tab names fall back to the default tab
    pub fn parse(value: &str) -> Self {
        match value {
            "menu" => Self::Menu,
            "reservations" => Self::Reservations,
            _ => Self::Orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Restaurant(String),
    CustomerAuth,
    RestaurantAuth,
    AdminAuth,
    Cart,
    Order(String),
    Reservation(String),
    CustomerProfile,
    Favorites,
    RestaurantHome,
    RestaurantDashboard(DashboardTab),
    Admin,
    PaymentSuccess { session_id: Option<String> },
    PaymentCancel,
    NotFound(String),
}

impl Route {
    /// Parse a path with optional query string, e.g. `/payment-success?session_id=cs_1`
    pub fn parse(input: &str) -> Self {
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (input, None),
        };
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["restaurant", id] => Self::Restaurant(id.to_string()),
            ["customer-auth"] => Self::CustomerAuth,
            ["restaurant-auth"] => Self::RestaurantAuth,
            ["admin-auth"] => Self::AdminAuth,
            ["cart"] => Self::Cart,
            ["orders", id] => Self::Order(id.to_string()),
            ["reservations", id] => Self::Reservation(id.to_string()),
            ["customer-profile"] => Self::CustomerProfile,
            ["favorites"] => Self::Favorites,
            ["restaurant-home"] => Self::RestaurantHome,
            ["restaurant-dashboard"] => Self::RestaurantDashboard(
                query_param(query, "tab")
                    .map(|t| DashboardTab::parse(&t))
                    .unwrap_or_default(),
            ),
            ["admin"] => Self::Admin,
            ["payment-success"] => Self::PaymentSuccess {
                session_id: query_param(query, "session_id").filter(|s| !s.is_empty()),
            },
            ["payment-cancel"] => Self::PaymentCancel,
            _ => Self::NotFound(input.to_string()),
        }
    }

    /// Login route for a role
    pub fn login_for(role: &UserRole) -> Self {
        match role {
            UserRole::Restaurant => Self::RestaurantAuth,
            UserRole::Admin => Self::AdminAuth,
            _ => Self::CustomerAuth,
        }
    }

    /// Role gate of this route, `None` for public routes
    pub fn gate(&self) -> Option<Gate> {
        match self {
            Self::Cart | Self::Order(_) | Self::Reservation(_) => Some(Gate::Authenticated),
            Self::CustomerProfile | Self::Favorites => Some(Gate::Role(UserRole::Customer)),
            Self::RestaurantHome | Self::RestaurantDashboard(_) => {
                Some(Gate::Role(UserRole::Restaurant))
            }
            Self::Admin => Some(Gate::Role(UserRole::Admin)),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "/"),
            Self::Restaurant(id) => write!(f, "/restaurant/{}", id),
            Self::CustomerAuth => write!(f, "/customer-auth"),
            Self::RestaurantAuth => write!(f, "/restaurant-auth"),
            Self::AdminAuth => write!(f, "/admin-auth"),
            Self::Cart => write!(f, "/cart"),
            Self::Order(id) => write!(f, "/orders/{}", id),
            Self::Reservation(id) => write!(f, "/reservations/{}", id),
            Self::CustomerProfile => write!(f, "/customer-profile"),
            Self::Favorites => write!(f, "/favorites"),
            Self::RestaurantHome => write!(f, "/restaurant-home"),
            Self::RestaurantDashboard(DashboardTab::Orders) => write!(f, "/restaurant-dashboard"),
            Self::RestaurantDashboard(tab) => {
                write!(f, "/restaurant-dashboard?tab={}", tab.as_str())
            }
            Self::Admin => write!(f, "/admin"),
            Self::PaymentSuccess { session_id: Some(id) } => {
                write!(f, "/payment-success?session_id={}", id)
            }
            Self::PaymentSuccess { session_id: None } => write!(f, "/payment-success"),
            Self::PaymentCancel => write!(f, "/payment-cancel"),
            Self::NotFound(path) => write!(f, "{}", path),
        }
    }
}

/// Access requirement of a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Authenticated,
    Role(UserRole),
}

/// Outcome of resolving a route against the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

/// Apply the route's gate
pub fn resolve(route: Route, session: &SessionStore) -> Resolution {
    match route.gate() {
        None => Resolution::Render(route),
        Some(Gate::Authenticated) if session.is_authenticated() => Resolution::Render(route),
        Some(Gate::Authenticated) => Resolution::Redirect(Route::CustomerAuth),
        Some(Gate::Role(role)) if session.has_role(&role) => Resolution::Render(route),
        Some(Gate::Role(role)) => Resolution::Redirect(Route::login_for(&role)),
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    dinedash_client::query_value(query?, name)
}
