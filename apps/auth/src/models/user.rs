/// A mock user record.
///
/// Passwords are plaintext on purpose: this service is a login stand-in for
/// client development, not a credential store. Do not reuse this shape in a
/// real authentication service.
#[derive(Debug, Clone)]
pub struct MockUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl MockUser {
    /// The fixed user list every instance starts with.
    pub fn seed() -> Vec<MockUser> {
        vec![
            MockUser {
                id: 1,
                username: "bill".to_string(),
                password: "12".to_string(),
            },
            MockUser {
                id: 2,
                username: "bob".to_string(),
                password: "my12".to_string(),
            },
        ]
    }
}
