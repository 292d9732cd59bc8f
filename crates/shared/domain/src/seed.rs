//! Records the directory starts with.

use crate::user::User;

/// Initial directory contents loaded at process start.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: Some("ana.garcia@example.com".to_string()),
            name: Some("Ana Garcia".to_string()),
            phone: vec!["555-0101".to_string(), "555-0102".to_string()],
        },
        User {
            id: 2,
            email: Some("luis.perez@example.com".to_string()),
            name: Some("Luis Perez".to_string()),
            phone: vec!["555-0201".to_string()],
        },
        User {
            id: 3,
            email: Some("marta.lopez@example.com".to_string()),
            name: Some("Marta Lopez".to_string()),
            phone: vec!["555-0301".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_phones_are_unique() {
        let users = seed_users();
        let mut phones: Vec<&String> = users.iter().flat_map(|u| u.phone.iter()).collect();
        let total = phones.len();
        phones.sort();
        phones.dedup();
        assert_eq!(phones.len(), total);
    }
}
