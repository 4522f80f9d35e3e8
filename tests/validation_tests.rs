use cidco_mitra_client::validation::{
    is_valid_email, is_valid_message, is_valid_name, is_valid_phone, normalize_phone,
};

#[test]
fn name_accepts_iff_two_trimmed_characters() {
    let cases: Vec<(&str, bool)> = vec![
        ("", false),
        ("   ", false),
        ("a", false),
        (" a ", false),
        ("ab", true),
        (" ab ", true),
        ("Jane Doe", true),
        ("अ", false),
        ("अब", true),
    ];
    for (name, expected) in cases {
        assert_eq!(is_valid_name(name), expected, "name: {:?}", name);
    }
}

#[test]
fn email_requires_single_at_and_dotted_domain() {
    let cases: Vec<(&str, bool)> = vec![
        ("a@b.co", true),
        ("jane@example.com", true),
        ("a@b", false),
        ("a b@c.com", false),
        ("a@b c.com", false),
        ("@b.co", false),
        ("a@.", false),
        ("a@@b.co", false),
        ("", false),
        ("plainaddress", false),
    ];
    for (email, expected) in cases {
        assert_eq!(is_valid_email(email), expected, "email: {:?}", email);
    }
}

#[test]
fn phone_accepts_10_to_15_digits_after_normalization() {
    let cases: Vec<(&str, bool)> = vec![
        ("+91 98765 43210", true),
        ("9876543210", true),
        ("98-76-54-32-10", true),
        ("+919876543210", true),
        ("12345", false),
        ("+123456789", false),
        ("1234567890123456", false),
        ("98765abc43210", false),
        ("", false),
    ];
    for (phone, expected) in cases {
        assert_eq!(is_valid_phone(phone), expected, "phone: {:?}", phone);
    }
}

#[test]
fn plus_sign_is_only_allowed_in_front() {
    assert!(!is_valid_phone("98765+43210"));
    assert!(!is_valid_phone("++919876543210"));
}

#[test]
fn message_needs_ten_trimmed_characters() {
    assert!(!is_valid_message(""));
    assert!(!is_valid_message("   short  "));
    assert!(!is_valid_message("123456789"));
    assert!(is_valid_message("1234567890"));
    assert!(is_valid_message("  a message with substance  "));
}

#[test]
fn normalization_only_strips_spaces_and_hyphens() {
    assert_eq!(normalize_phone("+91 98765-43210"), "+919876543210");
    assert_eq!(normalize_phone("(022)1234"), "(022)1234");
}
