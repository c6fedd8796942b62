//! Free-text filtering of the user table

use crate::types::User;

/// Case-insensitive substring match against every column of a user row
pub fn matches_query(user: &User, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    user.msisdn.to_lowercase().contains(&needle)
        || user.balance.to_string().contains(&needle)
        || user.reserved.to_string().contains(&needle)
        || user
            .status
            .as_deref()
            .is_some_and(|status| status.to_lowercase().contains(&needle))
}

/// Rows of `users` that match `query`, in their original order
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    users
        .iter()
        .filter(|user| matches_query(user, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        let mut suspended = User::new("00351930000003", 7.0, 0.0);
        suspended.status = Some("SUSPENDED".to_string());
        vec![
            User::new("00351910000001", 100.0, 20.0),
            User::new("00351920000002", 2500.0, 0.0),
            suspended,
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(filter_users(&users(), "").len(), 3);
        assert_eq!(filter_users(&users(), "   ").len(), 3);
    }

    #[test]
    fn test_query_matches_msisdn_and_amounts() {
        let filtered = filter_users(&users(), "1920");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].msisdn, "00351920000002");

        let filtered = filter_users(&users(), "2500");
        assert_eq!(filtered.len(), 1);

        // reserved amount of the first row, MSISDN of the second
        assert_eq!(filter_users(&users(), "20").len(), 2);
    }

    #[test]
    fn test_query_is_case_insensitive_on_status() {
        let filtered = filter_users(&users(), "suspend");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].msisdn, "00351930000003");
    }

    #[test]
    fn test_query_matches_fractional_amounts() {
        let users = vec![User::new("1", 10.5, 0.0), User::new("2", 10.0, 0.0)];
        let filtered = filter_users(&users, "10.5");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].msisdn, "1");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_users(&users(), "nobody").is_empty());
    }
}
