use super::field::{Field, FieldErrors, FormFields};

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_INVALID: &str = "Name can only contain letters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const MESSAGE_TOO_LONG: &str = "Message must be less than 1000 characters";

/// Returns the error message for `value`, or an empty string when it is valid.
pub fn validate_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NAME_REQUIRED.to_owned();
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return NAME_TOO_SHORT.to_owned();
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
    {
        return NAME_INVALID.to_owned();
    }
    String::new()
}

pub fn validate_email(value: &str) -> String {
    if value.trim().is_empty() {
        return EMAIL_REQUIRED.to_owned();
    }
    if !is_email_shaped(value) {
        return EMAIL_INVALID.to_owned();
    }
    String::new()
}

pub fn validate_message(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return MESSAGE_REQUIRED.to_owned();
    }
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN_CHARS {
        return MESSAGE_TOO_SHORT.to_owned();
    }
    if len > MESSAGE_MAX_CHARS {
        return MESSAGE_TOO_LONG.to_owned();
    }
    String::new()
}

pub fn validate_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
    }
}

pub fn validate_form(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.set(field, validate_field(field, fields.get(field)));
    }
    errors
}

// `<local>@<domain>.<tld>`: one `@`, a dot somewhere after it with text on both
// sides, and no whitespace anywhere in the raw value.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .filter(|(_, ch)| *ch == '.')
        .any(|(index, _)| index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules_apply_in_order() {
        assert_eq!(validate_name(""), NAME_REQUIRED);
        assert_eq!(validate_name("   "), NAME_REQUIRED);
        assert_eq!(validate_name("A"), NAME_TOO_SHORT);
        assert_eq!(validate_name("  A  "), NAME_TOO_SHORT);
        assert_eq!(validate_name("1"), NAME_TOO_SHORT);
        assert_eq!(validate_name("Anna1"), NAME_INVALID);
        assert_eq!(validate_name("O'Brien"), NAME_INVALID);
        assert_eq!(validate_name("Zoë"), NAME_INVALID);
        assert_eq!(validate_name("Ada Lovelace"), "");
        assert_eq!(validate_name("  Al  "), "");
    }

    #[test]
    fn email_shape_requires_at_and_dotted_domain() {
        assert_eq!(validate_email(""), EMAIL_REQUIRED);
        assert_eq!(validate_email("  "), EMAIL_REQUIRED);
        assert_eq!(validate_email("a@b.com"), "");
        assert_eq!(validate_email("first.last@sub.example.org"), "");
        assert_eq!(validate_email("not-an-email"), EMAIL_INVALID);
        assert_eq!(validate_email("a@b"), EMAIL_INVALID);
        assert_eq!(validate_email("@b.com"), EMAIL_INVALID);
        assert_eq!(validate_email("a@.com"), EMAIL_INVALID);
        assert_eq!(validate_email("a@b."), EMAIL_INVALID);
        assert_eq!(validate_email("a@b@c.com"), EMAIL_INVALID);
        assert_eq!(validate_email("a b@c.com"), EMAIL_INVALID);
        assert_eq!(validate_email(" a@b.com"), EMAIL_INVALID);
    }

    #[test]
    fn message_length_bounds_use_trimmed_chars() {
        assert_eq!(validate_message(""), MESSAGE_REQUIRED);
        assert_eq!(validate_message(&"x".repeat(9)), MESSAGE_TOO_SHORT);
        assert_eq!(validate_message(&"x".repeat(10)), "");
        assert_eq!(validate_message(&format!("   {}   ", "x".repeat(9))), MESSAGE_TOO_SHORT);
        assert_eq!(validate_message(&"x".repeat(1000)), "");
        assert_eq!(validate_message(&format!(" {} ", "x".repeat(1000))), "");
        assert_eq!(validate_message(&"x".repeat(1001)), MESSAGE_TOO_LONG);
        assert_eq!(validate_message(&"é".repeat(1000)), "");
    }

    #[test]
    fn full_form_reports_every_field() {
        let errors = validate_form(&FormFields::default());
        assert_eq!(errors.name, NAME_REQUIRED);
        assert_eq!(errors.email, EMAIL_REQUIRED);
        assert_eq!(errors.message, MESSAGE_REQUIRED);
        assert!(!errors.is_valid());

        let errors = validate_form(&FormFields::new(
            "Grace Hopper",
            "grace@navy.mil",
            "Let's talk about compilers.",
        ));
        assert!(errors.is_valid());
        assert_eq!(errors.first_error(), None);
    }

    #[test]
    fn first_error_follows_form_order() {
        let errors = validate_form(&FormFields::new("Grace", "nope", "short"));
        let first = errors.first_error().expect("email should fail first");
        assert_eq!(first.field, Field::Email);
        assert_eq!(first.message, EMAIL_INVALID);
        assert_eq!(errors.iter_errors().count(), 2);
    }
}
