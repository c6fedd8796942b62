//! Path routing for the console views
//!
//! Known paths are `/users`, `/users/:userId`, `/services` and `/promotions`.
//! Anything else redirects to `/users`.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Parameters captured from a matched path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn with(name: &str, value: &str) -> Self {
        let mut params = HashMap::new();
        params.insert(name.to_string(), value.to_string());
        Self(params)
    }
}

/// A view the console can show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Users,
    UserDetail { user_id: String },
    Services,
    Promotions,
}

impl Route {
    /// Route for `path`, falling back to the user list
    pub fn resolve(path: &str) -> Self {
        match Self::matches(path) {
            Some(route) => route,
            None => {
                debug!("No route for '{}', redirecting to /users", path);
                Route::Users
            }
        }
    }

    /// Route for `path` without the fallback
    pub fn matches(path: &str) -> Option<Self> {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["users"] => Some(Route::Users),
            ["users", user_id] => Some(Route::UserDetail {
                user_id: (*user_id).to_string(),
            }),
            ["services"] => Some(Route::Services),
            ["promotions"] => Some(Route::Promotions),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Users => "/users".to_string(),
            Route::UserDetail { user_id } => format!("/users/{}", user_id),
            Route::Services => "/services".to_string(),
            Route::Promotions => "/promotions".to_string(),
        }
    }

    pub fn params(&self) -> RouteParams {
        match self {
            Route::UserDetail { user_id } => RouteParams::with("userId", user_id),
            _ => RouteParams::default(),
        }
    }

    /// Whether the view is driven by the user list controller
    pub fn uses_list_controller(&self) -> bool {
        !matches!(self, Route::UserDetail { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Users => "Users",
            Route::UserDetail { .. } => "User Detail",
            Route::Services => "Services",
            Route::Promotions => "Promotions",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(Route::resolve("/users"), Route::Users);
        assert_eq!(Route::resolve("/services"), Route::Services);
        assert_eq!(Route::resolve("/promotions"), Route::Promotions);
        assert_eq!(
            Route::resolve("/users/123"),
            Route::UserDetail {
                user_id: "123".to_string()
            }
        );
    }

    #[test]
    fn test_hash_prefix_and_trailing_slash() {
        assert_eq!(Route::resolve("#/users/"), Route::Users);
        assert_eq!(Route::resolve("/services?x=1"), Route::Services);
    }

    #[test]
    fn test_unmatched_paths_redirect_to_users() {
        assert_eq!(Route::resolve("/"), Route::Users);
        assert_eq!(Route::resolve("/reports"), Route::Users);
        assert_eq!(Route::resolve("/users/1/extra"), Route::Users);
        assert!(Route::matches("/reports").is_none());
    }

    #[test]
    fn test_params_and_path() {
        let route = Route::resolve("/users/42");
        assert_eq!(route.params().get("userId"), Some("42"));
        assert_eq!(route.path(), "/users/42");
        assert!(!route.uses_list_controller());
        assert!(Route::Promotions.uses_list_controller());
        assert_eq!(Route::Users.params().get("userId"), None);
    }
}
