//! Mock login — exact-match lookup against the seeded user list.

pub mod handlers;

use crate::models::user::MockUser;

/// Linear scan for a user with exactly this username and password.
/// Comparison is case-sensitive on both fields.
pub fn find_user<'a>(
    users: &'a [MockUser],
    username: &str,
    password: &str,
) -> Option<&'a MockUser> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seeded_pair_is_found() {
        let users = MockUser::seed();
        for user in &users {
            let found = find_user(&users, &user.username, &user.password)
                .unwrap_or_else(|| panic!("user {} not found", user.username));
            assert_eq!(found.id, user.id);
        }
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let users = MockUser::seed();
        assert!(find_user(&users, "bill", "wrong").is_none());
    }

    #[test]
    fn test_unknown_username_is_rejected() {
        let users = MockUser::seed();
        assert!(find_user(&users, "alice", "12").is_none());
    }

    #[test]
    fn test_credentials_do_not_cross_users() {
        // bill's password under bob's name must not match
        let users = MockUser::seed();
        assert!(find_user(&users, "bob", "12").is_none());
    }

    #[test]
    fn test_username_comparison_is_case_sensitive() {
        let users = MockUser::seed();
        assert!(find_user(&users, "Bill", "12").is_none());
    }
}
