//! The PIN form: keypad input, automatic submission, and result handling.
//!
//! The form is headless. A front end renders [`PinForm::pin`],
//! [`PinForm::status`], [`PinForm::notice`] and [`PinForm::field_error`],
//! forwards keypad taps to [`PinForm::press`], and schedules the returned
//! [`Redirect`] on success.

use pinpad_core::{PinCandidate, PinError};

use crate::{
    collector::PinCollector,
    config::ClientConfig,
    keypad::{keyboard_disposition, Key, KeyDisposition},
    redirect::Redirect,
    validator::PinValidator,
    ClientError,
};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// A validation request is in flight; further submits are refused.
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Destructive,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

impl Notice {
    pub const INCOMPLETE: Self = Self {
        title: "Invalid PIN",
        description: "Please enter a 4-digit PIN",
        severity: Severity::Destructive,
    };

    pub const SUCCESS: Self = Self {
        title: "Success!",
        description: "Redirecting you...",
        severity: Severity::Default,
    };

    pub const FAILURE: Self = Self {
        title: "Invalid PIN",
        description: "Please try again",
        severity: Severity::Destructive,
    };
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The server accepted the PIN; navigate once the redirect fires.
    Accepted(Redirect),
    /// The PIN was refused or the request failed. The PIN has been cleared.
    Rejected,
    /// Fewer than four digits were entered. Nothing was sent.
    Invalid,
    /// A request is already in flight.
    Busy,
    /// An answer arrived with no request pending. The form is unchanged.
    Stale,
}

/// Headless PIN entry form.
pub struct PinForm<V: PinValidator> {
    validator: V,
    config: ClientConfig,
    collector: PinCollector,
    status: FormStatus,
    notice: Option<Notice>,
    field_error: Option<PinError>,
}

impl<V: PinValidator> PinForm<V> {
    #[must_use]
    pub fn new(validator: V, config: ClientConfig) -> Self {
        Self {
            validator,
            config,
            collector: PinCollector::new(),
            status: FormStatus::Idle,
            notice: None,
            field_error: None,
        }
    }

    /// Digits entered so far.
    #[must_use]
    pub fn pin(&self) -> &str {
        self.collector.as_str()
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// The most recent toast, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Inline error under the PIN slots, set by a client-side rejection.
    #[must_use]
    pub fn field_error(&self) -> Option<&PinError> {
        self.field_error.as_ref()
    }

    /// Classify a key typed on a physical keyboard.
    ///
    /// Digits are suppressed and never reach the PIN; only [`PinForm::press`]
    /// mutates it.
    #[must_use]
    pub fn handle_keyboard(&self, key: char) -> KeyDisposition {
        let disposition = keyboard_disposition(key);
        if disposition == KeyDisposition::Suppressed {
            tracing::trace!("physical digit suppressed");
        }
        disposition
    }

    /// Apply an on-screen keypad tap.
    ///
    /// When the tap completes the fourth digit the form submits immediately
    /// and the outcome is returned; otherwise `None`.
    pub async fn press(&mut self, key: Key) -> Option<Submission> {
        let changed = match key {
            Key::Digit(d) => self.collector.append_digit(d),
            Key::Backspace => self.collector.backspace(),
            Key::Blank => false,
        };
        if changed && self.collector.is_complete() {
            Some(self.submit().await)
        } else {
            None
        }
    }

    /// Validate locally, then ask the validator.
    pub async fn submit(&mut self) -> Submission {
        let pin = match self.begin_submit() {
            Ok(pin) => pin,
            Err(outcome) => return outcome,
        };
        let result = self.validator.validate(&pin).await;
        self.finish_submit(result)
    }

    /// First half of [`PinForm::submit`]: local checks and the pending gate.
    ///
    /// On `Ok` the form is [`FormStatus::Pending`] and the caller owns the
    /// request; it must report back through [`PinForm::finish_submit`].
    ///
    /// # Errors
    /// Returns [`Submission::Busy`] while a request is pending, or
    /// [`Submission::Invalid`] if the PIN is incomplete.
    pub fn begin_submit(&mut self) -> Result<PinCandidate, Submission> {
        if self.status == FormStatus::Pending {
            return Err(Submission::Busy);
        }
        match PinCandidate::parse(self.collector.as_str()) {
            Ok(pin) => {
                self.field_error = None;
                self.notice = None;
                self.status = FormStatus::Pending;
                tracing::debug!("submitting pin");
                Ok(pin)
            }
            Err(e) => {
                self.field_error = Some(e);
                self.notice = Some(Notice::INCOMPLETE);
                Err(Submission::Invalid)
            }
        }
    }

    /// Second half of [`PinForm::submit`]: apply the validator's answer.
    ///
    /// Returns [`Submission::Stale`] without touching the form unless a
    /// request is pending.
    pub fn finish_submit(&mut self, result: Result<(), ClientError>) -> Submission {
        if self.status != FormStatus::Pending {
            tracing::debug!(status = ?self.status, "answer with no pending request ignored");
            return Submission::Stale;
        }
        match result {
            Ok(()) => {
                self.status = FormStatus::Succeeded;
                self.notice = Some(Notice::SUCCESS);
                Submission::Accepted(Redirect {
                    url: self.config.redirect_url.clone(),
                    delay: self.config.redirect_delay,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "pin not accepted");
                self.collector.clear();
                self.status = FormStatus::Failed;
                self.notice = Some(Notice::FAILURE);
                Submission::Rejected
            }
        }
    }
}
