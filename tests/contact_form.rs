use std::time::Duration;

use folio::prelude::*;
use futures::executor::block_on;
use proptest::prelude::*;

fn fast_controller() -> ContactFormController {
    ContactFormController::simulated(
        ContactFormOptions::new()
            .submit_latency(Duration::from_millis(10))
            .status_timeout(Duration::from_millis(10)),
    )
}

#[test]
fn reference_error_messages() {
    assert_eq!(validate_name(""), "Name is required");
    assert_eq!(validate_name("A"), "Name must be at least 2 characters");
    assert_eq!(validate_name("Anna1"), "Name can only contain letters");
    assert_eq!(validate_email("a@b.com"), "");
    assert_eq!(validate_email("not-an-email"), "Please enter a valid email address");
    assert_eq!(validate_email(""), "Email is required");
    assert_eq!(
        validate_message(&"m".repeat(9)),
        "Message must be at least 10 characters"
    );
    assert_eq!(validate_message(&"m".repeat(1000)), "");
    assert_eq!(
        validate_message(&"m".repeat(1001)),
        "Message must be less than 1000 characters"
    );
}

#[test]
fn user_session_from_blur_to_expired_banner() {
    let controller = fast_controller();

    controller.set_field(Field::Name, "Li").expect("type name");
    assert_eq!(controller.blur(Field::Name).expect("blur name"), "");
    controller.set_field(Field::Email, "li@").expect("type email");
    assert_eq!(
        controller.blur(Field::Email).expect("blur email"),
        "Please enter a valid email address"
    );

    let outcome = block_on(controller.submit()).expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(
        controller.snapshot().expect("snapshot").fields.email,
        "li@"
    );

    controller
        .set_field(Field::Email, "li@example.cn")
        .expect("fix email");
    controller
        .set_field(Field::Message, "Hello there, saw your projects.")
        .expect("type message");

    let outcome = block_on(controller.submit()).expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Sent(_)));
    let banner = controller
        .status_banner()
        .expect("banner")
        .expect("success banner");
    assert_eq!(banner.status, SubmissionStatus::Success);
    assert!(controller.snapshot().expect("snapshot").fields.is_empty());

    assert!(block_on(controller.expire_status()).expect("expire"));
    assert_eq!(controller.status_banner().expect("banner"), None);
}

proptest! {
    #[test]
    fn letters_and_spaces_are_valid_names(name in "[A-Za-z ]{0,40}") {
        prop_assume!(name.trim().chars().count() >= 2);
        prop_assert_eq!(validate_name(&name), "");
    }

    #[test]
    fn names_with_digits_never_validate(prefix in "[A-Za-z]{2,10}", digit in "[0-9]") {
        let name = format!("{prefix}{digit}");
        prop_assert_eq!(validate_name(&name), "Name can only contain letters");
    }

    #[test]
    fn message_validity_tracks_trimmed_length(body in "[a-z ]{0,1100}") {
        let len = body.trim().chars().count();
        let valid = validate_message(&body).is_empty();
        prop_assert_eq!(valid, (10..=1000).contains(&len));
    }

    #[test]
    fn emails_with_whitespace_are_rejected(
        local in "[a-z]{1,8}",
        domain in "[a-z]{1,8}",
        gap in "[ \t]",
    ) {
        let email = format!("{local}{gap}@{domain}.com");
        prop_assert_eq!(validate_email(&email), "Please enter a valid email address");
    }

    #[test]
    fn invalid_submits_keep_fields(name in "[0-9]{1,5}", message in "[a-z]{0,5}") {
        let controller = fast_controller();
        controller.set_field(Field::Name, name.clone()).expect("name");
        controller.set_field(Field::Email, "a@b.com").expect("email");
        controller.set_field(Field::Message, message.clone()).expect("message");

        let outcome = block_on(controller.submit()).expect("submit");
        prop_assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        let snapshot = controller.snapshot().expect("snapshot");
        prop_assert_eq!(snapshot.submit_state, SubmitState::Editing);
        prop_assert_eq!(snapshot.fields, FormFields::new(name, "a@b.com", message));
    }
}
