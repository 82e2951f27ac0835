use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, char_len, is_valid_email};
use crate::config::ContactConfig;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name regex is valid"));

const MAX_EMAIL_LENGTH: usize = 254;

/// 联系表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// 订阅表单
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

/// 联系表单的长度限制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRules {
    pub max_name_length: usize,
    pub max_subject_length: usize,
    pub min_message_length: usize,
    pub max_message_length: usize,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self::from(&ContactConfig::default())
    }
}

impl From<&ContactConfig> for ContactRules {
    fn from(config: &ContactConfig) -> Self {
        Self {
            max_name_length: config.max_name_length,
            max_subject_length: config.max_subject_length,
            min_message_length: config.min_message_length,
            max_message_length: config.max_message_length,
        }
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Please enter a valid email address");
    } else if char_len(email) > MAX_EMAIL_LENGTH {
        errors.add("email", "Email address is too long");
    }
}

pub fn validate_contact_form(form: &ContactForm, rules: &ContactRules) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.name.is_empty() {
        errors.add("name", "Name is required");
    } else if char_len(&form.name) > rules.max_name_length {
        errors.add(
            "name",
            format!(
                "Name must be less than {} characters",
                rules.max_name_length
            ),
        );
    } else if !NAME_RE.is_match(&form.name) {
        errors.add("name", "Name can only contain letters and spaces");
    }

    check_email(&mut errors, &form.email);

    if form.subject.is_empty() {
        errors.add("subject", "Subject is required");
    } else if char_len(&form.subject) > rules.max_subject_length {
        errors.add(
            "subject",
            format!(
                "Subject must be less than {} characters",
                rules.max_subject_length
            ),
        );
    }

    let message_len = char_len(&form.message);
    if message_len < rules.min_message_length {
        errors.add(
            "message",
            format!(
                "Message must be at least {} characters",
                rules.min_message_length
            ),
        );
    } else if message_len > rules.max_message_length {
        errors.add(
            "message",
            format!(
                "Message must be less than {} characters",
                rules.max_message_length
            ),
        );
    }

    errors.into_result()
}

pub fn validate_newsletter(form: &NewsletterForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if form.email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.add("email", "Please enter a valid email address");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I enjoyed your projects!".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        assert!(validate_contact_form(&valid_form(), &ContactRules::default()).is_ok());
    }

    #[test]
    fn test_short_message_is_rejected() {
        let form = ContactForm {
            message: "Too short".to_string(),
            ..valid_form()
        };
        let errors = validate_contact_form(&form, &ContactRules::default()).unwrap_err();
        assert_eq!(
            errors.get("message"),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_message_at_minimum_is_accepted() {
        let form = ContactForm {
            message: "0123456789".to_string(),
            ..valid_form()
        };
        assert!(validate_contact_form(&form, &ContactRules::default()).is_ok());
    }

    #[test]
    fn test_message_over_maximum() {
        let form = ContactForm {
            message: "x".repeat(1001),
            ..valid_form()
        };
        let errors = validate_contact_form(&form, &ContactRules::default()).unwrap_err();
        assert_eq!(
            errors.get("message"),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_all_fields_reported_together() {
        let errors =
            validate_contact_form(&ContactForm::default(), &ContactRules::default()).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("subject"), Some("Subject is required"));
        assert!(errors.contains("message"));
    }

    #[test]
    fn test_name_rules() {
        let rules = ContactRules::default();
        let digits = ContactForm {
            name: "R2D2".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate_contact_form(&digits, &rules).unwrap_err().get("name"),
            Some("Name can only contain letters and spaces")
        );

        let long = ContactForm {
            name: "a".repeat(101),
            ..valid_form()
        };
        assert_eq!(
            validate_contact_form(&long, &rules).unwrap_err().get("name"),
            Some("Name must be less than 100 characters")
        );

        let exact = ContactForm {
            name: "a".repeat(100),
            ..valid_form()
        };
        assert!(validate_contact_form(&exact, &rules).is_ok());
    }

    #[test]
    fn test_custom_min_length() {
        let rules = ContactRules {
            min_message_length: 30,
            ..ContactRules::default()
        };
        assert!(validate_contact_form(&valid_form(), &rules).is_err());
    }

    #[test]
    fn test_newsletter() {
        assert!(
            validate_newsletter(&NewsletterForm {
                email: "a@b.io".to_string()
            })
            .is_ok()
        );
        let errors = validate_newsletter(&NewsletterForm::default()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
    }
}
