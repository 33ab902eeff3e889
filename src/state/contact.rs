/// Contact form state and field validation
///
/// Client-side checks only: first/last name must contain a letter and
/// be at least 2 characters after trimming, the email must match the
/// address pattern, and the message must be at least 10 characters.
/// Nothing is sent anywhere; a valid submission is printed to the
/// console and the form resets.

use std::sync::LazyLock;

use regex::Regex;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]").expect("valid name pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-\.]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,5})$")
        .expect("valid email pattern")
});

/// The four form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

/// Check a first or last name: at least one letter, at least 2 chars
pub fn check_name(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.len() < 2 || !NAME_PATTERN.is_match(value) {
        return Err("Please enter at least 2 letters.");
    }
    Ok(())
}

/// Check an email address against the address pattern
pub fn check_email(value: &str) -> Result<(), &'static str> {
    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

/// Check a message: at least 10 characters after trimming
pub fn check_message(value: &str) -> Result<(), &'static str> {
    if value.trim().len() < 10 {
        return Err("Please enter a message of at least 10 characters.");
    }
    Ok(())
}

/// Contact form values plus whether a submit has been attempted
///
/// Field errors are only shown once the user has tried to submit,
/// then update live as the fields are edited.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    submitted: bool,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    fn check(&self, field: Field) -> Result<(), &'static str> {
        match field {
            Field::FirstName => check_name(&self.first_name),
            Field::LastName => check_name(&self.last_name),
            Field::Email => check_email(&self.email),
            Field::Message => check_message(&self.message),
        }
    }

    /// The error to display for a field, if any
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        if !self.submitted {
            return None;
        }
        self.check(field).err()
    }

    /// Whether a field should render as validated (green border)
    pub fn is_confirmed(&self, field: Field) -> bool {
        self.submitted && self.check(field).is_ok()
    }

    pub fn is_valid(&self) -> bool {
        [Field::FirstName, Field::LastName, Field::Email, Field::Message]
            .into_iter()
            .all(|field| self.check(field).is_ok())
    }

    /// Attempt a submit: marks every field as checked and reports
    /// whether the whole form is valid
    pub fn submit(&mut self) -> bool {
        self.submitted = true;
        self.is_valid()
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_checks() {
        assert!(check_name("Jean").is_ok());
        assert!(check_name("  Lu  ").is_ok());
        assert!(check_name("J").is_err());
        assert!(check_name("").is_err());
        assert!(check_name("42").is_err());
    }

    #[test]
    fn test_email_checks() {
        assert!(check_email("jean.dupont@example.com").is_ok());
        assert!(check_email("j_d-42@mail.co").is_ok());
        assert!(check_email("jean.dupont").is_err());
        assert!(check_email("jean@").is_err());
        assert!(check_email("@example.com").is_err());
        assert!(check_email("jean@example.toolong").is_err());
    }

    #[test]
    fn test_message_checks() {
        assert!(check_message("Hello, I love your work!").is_ok());
        assert!(check_message("too short").is_err());
        assert!(check_message("          ").is_err());
    }

    #[test]
    fn test_errors_only_after_submit_attempt() {
        let mut form = ContactForm::default();
        assert_eq!(form.error_for(Field::Email), None);

        assert!(!form.submit());
        assert!(form.error_for(Field::Email).is_some());

        form.set(Field::Email, "jean@example.com".to_string());
        assert_eq!(form.error_for(Field::Email), None);
        assert!(form.is_confirmed(Field::Email));
    }

    #[test]
    fn test_valid_form_submits_and_resets() {
        let mut form = ContactForm::default();
        form.set(Field::FirstName, "Jean".to_string());
        form.set(Field::LastName, "Dupont".to_string());
        form.set(Field::Email, "jean@example.com".to_string());
        form.set(Field::Message, "I would like to book a session.".to_string());

        assert!(form.submit());

        form.reset();
        assert!(form.first_name.is_empty());
        assert_eq!(form.error_for(Field::FirstName), None);
    }
}
