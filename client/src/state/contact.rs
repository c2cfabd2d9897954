//! Contact form fields, submission flag, and the transient notice.
//!
//! DESIGN
//! ======
//! Submission is split into `begin_submit` (validate, mark in flight, hand
//! back a snapshot to send) and `finish` (apply the outcome). The network call
//! happens between the two, outside the reactive update, so the state never
//! holds a borrow across an await point.
//!
//! Each notice carries a sequence number. The auto-dismiss timer clears only
//! the notice it was started for, so a slow timer from an earlier attempt
//! cannot hide a newer message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::SubmitError;

/// How long a notice stays visible.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in your name, email, and message.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The three user-entered fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Wire names and values, in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
    }

    /// # Errors
    ///
    /// Returns the message to show when a field is blank or the email has no `@`.
    pub fn validate(&self) -> Result<(), &'static str> {
        if [&self.name, &self.email, &self.message].iter().any(|v| v.trim().is_empty()) {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        if !self.email.contains('@') {
            return Err(INVALID_EMAIL_MESSAGE);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: &'static str,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    /// True while a request is in flight; disables the submit button.
    pub submitting: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl ContactState {
    /// Start a submission and return the snapshot to send.
    ///
    /// # Errors
    ///
    /// `Err(None)` when a request is already in flight; nothing changes.
    /// `Err(Some(seq))` when validation fails and an error notice was posted
    /// as `seq`, which the caller schedules for dismissal.
    pub fn begin_submit(&mut self) -> Result<ContactForm, Option<u64>> {
        if self.submitting {
            return Err(None);
        }
        if let Err(message) = self.form.validate() {
            return Err(Some(self.post_notice(NoticeKind::Error, message)));
        }
        self.submitting = true;
        Ok(self.form.clone())
    }

    /// Apply the outcome of a submission and return the new notice's sequence
    /// number. Success clears the fields; failure keeps them for a retry.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> u64 {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form.clear();
                self.post_notice(NoticeKind::Success, SUCCESS_MESSAGE)
            }
            Err(err) => self.post_notice(NoticeKind::Error, err.user_message()),
        }
    }

    /// Clear the notice if it is still the one issued as `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    #[must_use]
    pub fn notice_seq(&self) -> Option<u64> {
        self.notice.as_ref().map(|n| n.seq)
    }

    fn post_notice(&mut self, kind: NoticeKind, text: &'static str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, text, seq: self.notice_seq });
        self.notice_seq
    }
}
