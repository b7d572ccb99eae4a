/// All primary keys are opaque strings (UUIDv7 for generated rows).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered entity id.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = new_entity_id();
        let b = new_entity_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
