//! Form validators
//!
//! Pure functions that check form input before anything is written.
//! Every validator returns a [`FieldErrors`] map holding an entry for each
//! field of its form, `None` meaning the field is fine. They never fail;
//! callers check [`FieldErrors::has_errors`] to decide whether to proceed.

use crate::config::{
    JOURNAL_CONTENT_MAX_LEN, JOURNAL_CONTENT_MIN_LEN, JOURNAL_TITLE_MAX_LEN,
    JOURNAL_TITLE_MIN_LEN, NAME_MIN_LEN, PASSWORD_MIN_LEN,
};
use crate::database::{JournalForm, LoginForm, RegistrationForm};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_CONTENT: &str = "content";

/// Field-keyed validation messages for one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Option<String>>);

impl FieldErrors {
    /// An error map with every field present and clear
    pub fn for_fields(fields: &[&'static str]) -> Self {
        Self(fields.iter().map(|field| (*field, None)).collect())
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, Some(message.into()));
    }

    /// Message for `field`, if it has one
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|message| message.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(Option::is_some)
    }

    /// Every field of the form, in name order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if let Some(message) = message {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Loose `text@text.text` shape check: no whitespace, exactly one `@`,
/// and a dot in the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.set(FIELD_EMAIL, "Email is required");
    } else if !is_valid_email(email) {
        errors.set(FIELD_EMAIL, "Please enter a valid email address");
    }
}

fn check_password_length(errors: &mut FieldErrors, password: &str) -> bool {
    if password.is_empty() {
        errors.set(FIELD_PASSWORD, "Password is required");
        false
    } else if char_len(password) < PASSWORD_MIN_LEN {
        errors.set(
            FIELD_PASSWORD,
            format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
        );
        false
    } else {
        true
    }
}

/// Validate the sign-in form
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::for_fields(&[FIELD_EMAIL, FIELD_PASSWORD]);

    check_email(&mut errors, &form.email);
    check_password_length(&mut errors, &form.password);

    errors
}

/// Validate the account creation form
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::for_fields(&[
        FIELD_NAME,
        FIELD_EMAIL,
        FIELD_PASSWORD,
        FIELD_CONFIRM_PASSWORD,
    ]);

    let name = form.name.trim();
    if name.is_empty() {
        errors.set(FIELD_NAME, "Name is required");
    } else if char_len(name) < NAME_MIN_LEN {
        errors.set(
            FIELD_NAME,
            format!("Name must be at least {} characters", NAME_MIN_LEN),
        );
    }

    check_email(&mut errors, &form.email);

    if check_password_length(&mut errors, &form.password) {
        let password = &form.password;
        let complex = password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit());

        if !complex {
            errors.set(
                FIELD_PASSWORD,
                "Password must contain uppercase, lowercase, and number",
            );
        }
    }

    if form.confirm_password.is_empty() {
        errors.set(FIELD_CONFIRM_PASSWORD, "Please confirm your password");
    } else if form.password != form.confirm_password {
        errors.set(FIELD_CONFIRM_PASSWORD, "Passwords do not match");
    }

    errors
}

/// Validate the journal create/edit form
pub fn validate_journal(form: &JournalForm) -> FieldErrors {
    let mut errors = FieldErrors::for_fields(&[FIELD_TITLE, FIELD_CONTENT]);

    let title = char_len(form.title.trim());
    if title == 0 {
        errors.set(FIELD_TITLE, "Title is required");
    } else if title < JOURNAL_TITLE_MIN_LEN {
        errors.set(
            FIELD_TITLE,
            format!("Title must be at least {} characters", JOURNAL_TITLE_MIN_LEN),
        );
    } else if title > JOURNAL_TITLE_MAX_LEN {
        errors.set(
            FIELD_TITLE,
            format!("Title must be at most {} characters", JOURNAL_TITLE_MAX_LEN),
        );
    }

    let content = char_len(form.content.trim());
    if content == 0 {
        errors.set(FIELD_CONTENT, "Content is required");
    } else if content < JOURNAL_CONTENT_MIN_LEN {
        errors.set(
            FIELD_CONTENT,
            format!("Content must be at least {} characters", JOURNAL_CONTENT_MIN_LEN),
        );
    } else if content > JOURNAL_CONTENT_MAX_LEN {
        errors.set(
            FIELD_CONTENT,
            format!("Content must be at most {} characters", JOURNAL_CONTENT_MAX_LEN),
        );
    }

    errors
}

/// Trim optional free text and cap its length; blank input becomes `None`
pub fn normalize_optional(value: Option<&str>, max_chars: usize) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}
