mod common;

use cidco_mitra_client::models::ContactMessage;
use cidco_mitra_client::PublicApi;
use common::FakePublicApi;

#[tokio::test]
async fn valid_contact_message_reaches_the_api() {
    let api = FakePublicApi::default();
    let message = ContactMessage {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        message: "Requesting details about the allotment process.".to_string(),
    };
    assert!(message.field_errors().is_empty());

    let ack = api.submit_contact(&message).await.unwrap();
    assert_eq!(ack.as_deref(), Some("Message received"));
    assert_eq!(api.contacts.lock().unwrap().len(), 1);
}

#[test]
fn invalid_contact_message_is_blocked_before_any_network_call() {
    let message = ContactMessage {
        name: "J".to_string(),
        email: "jane@example".to_string(),
        phone: None,
        message: "too short".to_string(),
    };
    let errors = message.field_errors();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("message"));
    assert!(!errors.contains_key("phone"));
}
