//! Seed data loaded at process start.

use chrono::{TimeZone, Utc};
use entities::{Identity, Record, Role};

/// The fixed identity list. Membership never changes at runtime; only
/// balances do.
pub fn default_identities() -> Vec<Identity> {
    vec![
        Identity::new("user1", "John Doe", Role::User, 500.0),
        Identity::new("user2", "Jane Smith", Role::User, 750.0),
        Identity::new("admin1", "Admin User", Role::Admin, 0.0),
    ]
}

/// Records present before any request is submitted.
pub fn initial_records() -> Vec<Record> {
    vec![
        Record::new("rec1", "user1", "Initial balance deposit")
            .with_created_at(Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap()),
        Record::new("rec2", "user1", "Monthly report submitted")
            .with_created_at(Utc.with_ymd_and_hms(2023, 2, 5, 14, 22, 0).unwrap()),
        Record::new("rec3", "user2", "Project completion request")
            .with_created_at(Utc.with_ymd_and_hms(2023, 2, 10, 9, 45, 0).unwrap()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let identities = default_identities();
        let mut ids: Vec<&str> = identities.iter().map(|i| i.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), identities.len());

        let records = initial_records();
        let mut rec_ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        rec_ids.dedup();
        assert_eq!(rec_ids.len(), records.len());
    }

    #[test]
    fn test_exactly_one_admin() {
        let admins = default_identities()
            .into_iter()
            .filter(|i| i.is_admin())
            .count();
        assert_eq!(admins, 1);
    }
}
