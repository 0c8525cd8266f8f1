use super::*;
use uuid::Uuid;

#[test]
fn test_generated_ids_are_distinct_and_time_ordered() {
    let first = AccountId::generate();
    let second = AccountId::generate();
    assert_ne!(first, second);

    let uuid = Uuid::parse_str(&first.to_string()).unwrap();
    assert_eq!(uuid.get_version_num(), 7);
}

#[test]
fn test_user_id_deserializes_from_plain_string() {
    let uuid = Uuid::new_v4();
    let id: UserId = serde_json::from_str(&format!("\"{uuid}\"")).unwrap();
    assert_eq!(id.to_string(), uuid.to_string());
    assert!(serde_json::from_str::<UserId>("\"not-a-uuid\"").is_err());
}

#[test]
fn test_account_id_serializes_as_plain_string() {
    let uuid = Uuid::new_v4();
    let id: AccountId = serde_json::from_str(&format!("\"{uuid}\"")).unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{uuid}\""));
}
