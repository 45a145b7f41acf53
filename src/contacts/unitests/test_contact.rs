use crate::Error;
use crate::contacts::{
    contact::sample_contacts,
    ContactBuilder,
    ContactStatus,
    Contact,
    DEFAULT_AVATAR,
};

#[test]
fn test_build_contact() {
    let result = ContactBuilder::new()
        .with_id("42")
        .with_name("Bob")
        .with_phone("555")
        .with_status(ContactStatus::Online)
        .build();
    assert_eq!(result.is_ok(), true);

    let mut contact = result.unwrap();
    assert_eq!(contact.id(), "42");
    assert_eq!(contact.name(), "Bob");
    assert_eq!(contact.phone(), Some("555"));
    assert_eq!(contact.email(), None);
    assert_eq!(contact.avatar(), DEFAULT_AVATAR);
    assert_eq!(contact.status(), ContactStatus::Online);
    assert_eq!(contact.is_online(), true);

    contact.set_email("bob@example.com");
    assert_eq!(contact.email(), Some("bob@example.com"));
    contact.set_phone("");
    assert_eq!(contact.phone(), None);
    assert_eq!(contact.check_valid().is_ok(), true);

    contact.set_email("");
    assert_eq!(matches!(contact.check_valid(), Err(Error::Validation(_))), true);

    contact.set_avatar("data:image/png;base64,AAAA");
    assert_eq!(contact.avatar(), "data:image/png;base64,AAAA");
    contact.set_avatar("");
    assert_eq!(contact.avatar(), DEFAULT_AVATAR);

    contact.set_status(ContactStatus::Offline);
    assert_eq!(contact.is_online(), false);
}

#[test]
fn test_build_invalid_contact() {
    let result = ContactBuilder::new().with_id("1").with_name("").with_phone("555").build();
    assert_eq!(matches!(result, Err(Error::Validation(_))), true);

    let result = ContactBuilder::new().with_id("1").with_name("   ").with_email("a@b.c").build();
    assert_eq!(matches!(result, Err(Error::Validation(_))), true);

    let result = ContactBuilder::new().with_id("1").with_name("Bob").with_phone("").with_email("").build();
    assert_eq!(matches!(result, Err(Error::Validation(_))), true);

    let result = ContactBuilder::new().with_id("1").with_name("Bob").with_phone("  ").build();
    assert_eq!(matches!(result, Err(Error::Validation(_))), true);

    let result = ContactBuilder::new().with_name("Bob").with_phone("555").build();
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);
}

#[test]
fn test_contact_json() {
    let contact = ContactBuilder::new()
        .with_id("7")
        .with_name("Jessica Taylor")
        .with_email("jess@example.com")
        .build()
        .unwrap();

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], "7");
    assert_eq!(json["name"], "Jessica Taylor");
    assert_eq!(json["email"], "jess@example.com");
    assert_eq!(json["avatar"], DEFAULT_AVATAR);
    assert_eq!(json["status"], "offline");
    assert_eq!(json.get("phone").is_none(), true);

    let parsed: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, contact);
}

#[test]
fn test_contact_json_lenient() {
    let data = r#"{"id":"9","name":"James","phone":"","email":"j@x.com","status":"away"}"#;
    let contact: Contact = serde_json::from_str(data).unwrap();
    assert_eq!(contact.phone(), None);
    assert_eq!(contact.email(), Some("j@x.com"));
    assert_eq!(contact.avatar(), DEFAULT_AVATAR);
    assert_eq!(contact.status(), ContactStatus::Offline);

    let data = r#"{"id":"3","name":"Alex Chen","avatar":"/placeholder.svg","status":"online"}"#;
    let contact: Contact = serde_json::from_str(data).unwrap();
    assert_eq!(contact.status(), ContactStatus::Online);
}

#[test]
fn test_sample_contacts() {
    let samples = sample_contacts();
    let ids = samples.iter().map(|v| v.id()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(samples[0].name(), "Sarah Johnson");
    assert_eq!(samples.iter().filter(|v| v.is_online()).count(), 3);
    assert_eq!(samples.iter().all(|v| v.avatar() == DEFAULT_AVATAR), true);
}
