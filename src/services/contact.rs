use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ContactConfig;
use crate::site::form::SUCCESS_MESSAGE;
use crate::validation::{
    ContactForm, ContactRules, FieldErrors, NewsletterForm, validate_contact_form,
    validate_newsletter,
};

/// 模拟提交的回执
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub id: String,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl ContactReceipt {
    fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            message: message.into(),
        }
    }
}

/// 联系表单服务
///
/// 不连接任何后端：校验通过后等待一段模拟延迟，然后总是成功。
#[derive(Debug, Clone)]
pub struct ContactService {
    rules: ContactRules,
    delay: Duration,
    contact_email: String,
}

impl ContactService {
    pub fn new(rules: ContactRules, delay: Duration, contact_email: impl Into<String>) -> Self {
        Self {
            rules,
            delay,
            contact_email: contact_email.into(),
        }
    }

    pub fn from_config(config: &ContactConfig) -> Self {
        Self::new(
            ContactRules::from(config),
            Duration::from_millis(config.submit_delay_ms),
            config.email.clone(),
        )
    }

    pub fn rules(&self) -> &ContactRules {
        &self.rules
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn validate(&self, form: &ContactForm) -> Result<(), FieldErrors> {
        validate_contact_form(form, &self.rules)
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, FieldErrors> {
        if let Err(errors) = self.validate(form) {
            debug!("Contact form rejected: {}", errors);
            return Err(errors);
        }

        self.simulate_delay().await;

        let receipt = ContactReceipt::new(SUCCESS_MESSAGE);
        info!(
            id = %receipt.id,
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            message_chars = form.message.chars().count(),
            "Contact message accepted"
        );
        Ok(receipt)
    }

    pub async fn subscribe(&self, form: &NewsletterForm) -> Result<ContactReceipt, FieldErrors> {
        validate_newsletter(form)?;
        self.simulate_delay().await;

        let receipt = ContactReceipt::new("Thanks for subscribing!");
        info!(id = %receipt.id, email = %form.email, "Newsletter subscription accepted");
        Ok(receipt)
    }

    async fn simulate_delay(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(delay_ms: u64) -> ContactService {
        ContactService::new(
            ContactRules::default(),
            Duration::from_millis(delay_ms),
            "me@example.com",
        )
    }

    fn form(message: &str) -> ContactForm {
        ContactForm {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Compilers".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_accepts_valid_form() {
        let receipt = service(0)
            .submit(&form("Let's talk about COBOL."))
            .await
            .unwrap();
        assert_eq!(receipt.message, SUCCESS_MESSAGE);
        assert!(!receipt.id.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_short_message() {
        let errors = service(0).submit(&form("hi")).await.unwrap_err();
        assert!(errors.contains("message"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay() {
        let started = tokio::time::Instant::now();
        service(2000)
            .submit(&form("A long enough message."))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_pending_until_delay_elapses() {
        let svc = service(500);
        let f = form("A long enough message.");
        let mut task = tokio_test::task::spawn(svc.submit(&f));

        tokio_test::assert_pending!(task.poll());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(task.is_woken());
        tokio_test::assert_ready_ok!(task.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejection_skips_delay() {
        let started = tokio::time::Instant::now();
        let _ = service(2000).submit(&form("short")).await;
        assert!(started.elapsed() < Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_subscribe() {
        let svc = service(0);
        assert!(
            svc.subscribe(&NewsletterForm {
                email: "reader@example.com".to_string()
            })
            .await
            .is_ok()
        );
        assert!(svc.subscribe(&NewsletterForm::default()).await.is_err());
    }
}
