//! Generation of new unique identifiers.

use uuid::Uuid;

/// The UID root for identifiers derived from a UUID.
pub const UUID_UID_ROOT: &str = "2.25.";

/// Create a new UID under the `2.25.` root,
/// taking the decimal form of a random (version 4) UUID.
///
/// The result is at most 44 characters long.
pub fn new_uid() -> String {
    uid_from_uuid(Uuid::new_v4())
}

/// Express the given UUID as a UID under the `2.25.` root.
pub fn uid_from_uuid(uuid: Uuid) -> String {
    format!("{}{}", UUID_UID_ROOT, uuid.as_u128())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_form() {
        let uid = new_uid();
        assert!(uid.starts_with("2.25."));
        assert!(uid.len() <= 64);
        let number = &uid[5..];
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        // no leading zeros in a UID component
        assert!(number == "0" || !number.starts_with('0'));
    }

    #[test]
    fn uids_are_unique() {
        let a = new_uid();
        let b = new_uid();
        assert_ne!(a, b);
    }

    #[test]
    fn known_uuid() {
        let uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_00ff);
        assert_eq!(uid_from_uuid(uuid), "2.25.255");
    }
}
