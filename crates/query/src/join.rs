//! Owner name joining.

use entities::{Identity, Record};

/// Display label for records whose owner cannot be resolved.
pub const UNKNOWN_OWNER_LABEL: &str = "Unknown User";

/// A record decorated with its owner's display name.
#[derive(Debug, Clone)]
pub struct OwnedRecord {
    pub record: Record,
    pub owner_display_name: String,
}

/// Left-joins each record with its owner's display name.
///
/// An unmatched owner yields [`UNKNOWN_OWNER_LABEL`], not an error.
pub fn join_owner_names(records: &[Record], identities: &[Identity]) -> Vec<OwnedRecord> {
    records
        .iter()
        .map(|record| {
            let owner_display_name = identities
                .iter()
                .find(|i| i.id == record.owner_id)
                .map(|i| i.display_name.clone())
                .unwrap_or_else(|| UNKNOWN_OWNER_LABEL.to_string());
            OwnedRecord {
                record: record.clone(),
                owner_display_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use entities::Role;

    use super::*;

    #[test]
    fn test_join_resolves_known_owners() {
        let identities = vec![
            Identity::new("user1", "John Doe", Role::User, 500.0),
            Identity::new("user2", "Jane Smith", Role::User, 750.0),
        ];
        let records = vec![
            Record::new("rec1", "user1", "First"),
            Record::new("rec2", "user2", "Second"),
        ];

        let joined = join_owner_names(&records, &identities);
        assert_eq!(joined[0].owner_display_name, "John Doe");
        assert_eq!(joined[1].owner_display_name, "Jane Smith");
    }

    #[test]
    fn test_unmatched_owner_gets_fallback_label() {
        let identities = vec![Identity::new("user1", "John Doe", Role::User, 500.0)];
        let records = vec![Record::new("rec1", "ghost", "Orphan")];

        let joined = join_owner_names(&records, &identities);
        assert_eq!(joined[0].owner_display_name, UNKNOWN_OWNER_LABEL);
    }
}
