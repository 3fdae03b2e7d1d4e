use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::JobKey;

/// A filled-in application form, submitted against a specific listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub job_key: JobKey,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApplicationField {
    Name,
    Email,
    Phone,
    CoverLetter,
}

/// Minimum accepted cover letter length, in characters.
pub const MIN_COVER_LETTER_LEN: usize = 50;

/// Validates an application form. An empty map means the record is valid.
pub fn validate(record: &ApplicationRecord) -> BTreeMap<ApplicationField, String> {
    let mut errors = BTreeMap::new();

    if record.name.trim().is_empty() {
        errors.insert(ApplicationField::Name, "Name is required".to_string());
    }

    let email = record.email.trim();
    if email.is_empty() {
        errors.insert(ApplicationField::Email, "Email is required".to_string());
    } else if !email_regex().is_match(email) {
        errors.insert(ApplicationField::Email, "Invalid email format".to_string());
    }

    let phone = record.phone.trim();
    if phone.is_empty() {
        errors.insert(
            ApplicationField::Phone,
            "Phone number is required".to_string(),
        );
    } else if !phone_regex().is_match(phone) {
        errors.insert(ApplicationField::Phone, "Invalid phone number".to_string());
    }

    if record.cover_letter.trim().is_empty() {
        errors.insert(
            ApplicationField::CoverLetter,
            "Cover letter is required".to_string(),
        );
    } else if record.cover_letter.chars().count() < MIN_COVER_LETTER_LEN {
        errors.insert(
            ApplicationField::CoverLetter,
            format!("Cover letter must be at least {MIN_COVER_LETTER_LEN} characters"),
        );
    }

    errors
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[\d\s-]{10,}$").expect("phone regex"))
}
