//! Single-user view-model

use crate::routing::RouteParams;
use crate::types::User;

/// Detail view bound to the `userId` route parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailController {
    user_id: String,
}

impl UserDetailController {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Build from the parameters of a matched route, if `userId` is present
    pub fn from_params(params: &RouteParams) -> Option<Self> {
        params.get("userId").map(Self::new)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The user this view is about, looked up in an already fetched list
    pub fn find_in<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.iter().find(|user| user.msisdn == self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;

    #[test]
    fn test_from_route_params() {
        let route = Route::resolve("/users/00351910000001");
        let detail = UserDetailController::from_params(&route.params()).unwrap();
        assert_eq!(detail.user_id(), "00351910000001");
    }

    #[test]
    fn test_missing_param() {
        let route = Route::resolve("/users");
        assert!(UserDetailController::from_params(&route.params()).is_none());
    }

    #[test]
    fn test_find_in() {
        let users = vec![User::new("1", 0.0, 0.0), User::new("2", 5.0, 0.0)];
        let detail = UserDetailController::new("2");
        assert_eq!(detail.find_in(&users).unwrap().balance, 5.0);
        assert!(UserDetailController::new("3").find_in(&users).is_none());
    }
}
