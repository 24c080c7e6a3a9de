use super::*;

#[test]
fn request_copies_fields_and_gets_fresh_id() {
    let fields = ContactFields::new("Jane", "jane@x.com", "Hi");
    let first = ContactRequest::from_fields(&fields);
    let second = ContactRequest::from_fields(&fields);

    assert_eq!(first.name, "Jane");
    assert_eq!(first.email, "jane@x.com");
    assert_eq!(first.message, "Hi");
    assert_ne!(first.request_id, second.request_id);
}

#[test]
fn receipt_tolerates_minimal_body() {
    let id = Uuid::new_v4();
    let receipt: ContactReceipt =
        serde_json::from_str(&format!(r#"{{"request_id":"{id}"}}"#)).expect("receipt");
    assert_eq!(receipt.request_id, id);
    assert!(!receipt.accepted);
    assert_eq!(receipt.note, None);
}
