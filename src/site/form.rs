use std::time::{Duration, Instant};

use serde::Serialize;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";

pub const SUCCESS_RESET: Duration = Duration::from_secs(5);
pub const ERROR_RESET: Duration = Duration::from_secs(8);

pub fn error_message(email: &str) -> String {
    format!(
        "Sorry, there was an error sending your message. Please try again or contact me directly at {}.",
        email
    )
}

/// 提交状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// idle -> loading -> success | error，结果状态在超时后回到 idle
#[derive(Debug, Clone)]
pub struct FormState {
    status: FormStatus,
    entered_at: Instant,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            status: FormStatus::Idle,
            entered_at: Instant::now(),
        }
    }
}

impl FormState {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// 加载中不可重复提交
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Loading
    }

    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.enter(FormStatus::Loading, now);
        true
    }

    pub fn resolve(&mut self, ok: bool, now: Instant) {
        if self.status == FormStatus::Loading {
            let next = if ok {
                FormStatus::Success
            } else {
                FormStatus::Error
            };
            self.enter(next, now);
        }
    }

    /// 推进计时，到期后回到 idle
    pub fn tick(&mut self, now: Instant) -> FormStatus {
        let reset_after = match self.status {
            FormStatus::Success => Some(SUCCESS_RESET),
            FormStatus::Error => Some(ERROR_RESET),
            _ => None,
        };
        let elapsed = now.saturating_duration_since(self.entered_at);
        if reset_after.is_some_and(|after| elapsed >= after) {
            self.enter(FormStatus::Idle, now);
        }
        self.status
    }

    fn enter(&mut self, status: FormStatus, now: Instant) {
        self.status = status;
        self.entered_at = now;
    }
}
