//! Key dialog form state
//!
//! [`KeyForm`] holds what the dialog owns: the typed key, the loading flag and
//! the error message. Every dismissal starts a new session; an attempt only
//! settles the form if it was started in the current session, so a response
//! that arrives after the dialog was closed is dropped.

use crate::error::{CheckError, INVALID_KEY_MESSAGE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyForm {
    key: String,
    loading: bool,
    error: Option<String>,
    session: u64,
}

/// A key check that has been started and not yet settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    key: String,
    session: u64,
}

impl Attempt {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Result of [`KeyForm::begin`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Begin {
    Started(Attempt),
    /// Another attempt is still in flight.
    Busy,
    /// The key was blank; the error is already set.
    Rejected,
}

/// Result of [`KeyForm::settle`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    Accepted,
    Rejected,
    /// The attempt belongs to a dismissed session and was ignored.
    Stale,
}

impl KeyForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Start an attempt with the current key.
    ///
    /// Clears the previous error. Blank keys fail immediately without an
    /// attempt; any other key is sent exactly as typed.
    pub fn begin(&mut self) -> Begin {
        if self.loading {
            return Begin::Busy;
        }

        self.error = None;

        if self.key.trim().is_empty() {
            self.error = Some(INVALID_KEY_MESSAGE.to_string());
            return Begin::Rejected;
        }

        self.loading = true;
        Begin::Started(Attempt {
            key: self.key.clone(),
            session: self.session,
        })
    }

    /// Record the result of `attempt`.
    pub fn settle(&mut self, attempt: &Attempt, result: &Result<(), CheckError>) -> Settle {
        if attempt.session != self.session {
            return Settle::Stale;
        }

        self.loading = false;

        match result {
            Ok(()) => Settle::Accepted,
            Err(err) => {
                self.error = Some(err.user_message().to_string());
                Settle::Rejected
            }
        }
    }

    /// Show the error message after a failure outside the key check itself.
    pub fn report_failure(&mut self) {
        self.loading = false;
        self.error = Some(INVALID_KEY_MESSAGE.to_string());
    }

    /// Discard the key and any pending attempt.
    pub fn dismiss(&mut self) {
        self.key.clear();
        self.error = None;
        self.loading = false;
        self.session = self.session.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(form: &mut KeyForm) -> Attempt {
        match form.begin() {
            Begin::Started(attempt) => attempt,
            other => panic!("Expected attempt to start, got {:?}", other),
        }
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = KeyForm::new();
        assert_eq!(form.key(), "");
        assert!(!form.is_loading());
        assert!(form.can_submit());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut form = KeyForm::new();
        form.set_key("bad");
        let attempt = started(&mut form);
        form.settle(&attempt, &Err(CheckError::Status(400)));
        assert_eq!(form.error(), Some(INVALID_KEY_MESSAGE));

        form.set_key("AIzaSyExample");
        let attempt = started(&mut form);

        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert_eq!(form.error(), None);
        assert_eq!(attempt.key(), "AIzaSyExample");
    }

    #[test]
    fn test_key_is_sent_as_typed() {
        let mut form = KeyForm::new();
        form.set_key("  AIzaKey \t");

        let attempt = started(&mut form);
        assert_eq!(attempt.key(), "  AIzaKey \t");
    }

    #[test]
    fn test_begin_while_loading_is_busy() {
        let mut form = KeyForm::new();
        form.set_key("AIzaSyExample");
        let _attempt = started(&mut form);

        assert_eq!(form.begin(), Begin::Busy);
        assert!(form.is_loading());
    }

    #[test]
    fn test_blank_key_is_rejected_locally() {
        let mut form = KeyForm::new();
        form.set_key("   ");

        assert_eq!(form.begin(), Begin::Rejected);
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some("Invalid Gemini API key"));
    }

    #[test]
    fn test_settle_success() {
        let mut form = KeyForm::new();
        form.set_key("AIzaSyExample");
        let attempt = started(&mut form);

        assert_eq!(form.settle(&attempt, &Ok(())), Settle::Accepted);
        assert!(!form.is_loading());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_settle_failure_collapses_to_one_message() {
        let mut form = KeyForm::new();
        form.set_key("AIzaSyExample");
        let attempt = started(&mut form);

        let result = Err(CheckError::Network("dns".to_string()));
        assert_eq!(form.settle(&attempt, &result), Settle::Rejected);
        assert!(!form.is_loading());
        assert_eq!(form.error(), Some("Invalid Gemini API key"));
        assert_eq!(form.key(), "AIzaSyExample");
    }

    #[test]
    fn test_dismiss_discards_key_and_drops_pending_attempt() {
        let mut form = KeyForm::new();
        form.set_key("AIzaSyExample");
        let attempt = started(&mut form);

        form.dismiss();
        assert_eq!(form.key(), "");
        assert!(!form.is_loading());
        assert_eq!(form.session(), 1);

        assert_eq!(
            form.settle(&attempt, &Err(CheckError::Status(400))),
            Settle::Stale
        );
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_stale_attempt_does_not_touch_new_session() {
        let mut form = KeyForm::new();
        form.set_key("first");
        let old = started(&mut form);
        form.dismiss();

        form.set_key("second");
        let _current = started(&mut form);

        assert_eq!(form.settle(&old, &Ok(())), Settle::Stale);
        assert!(form.is_loading());
    }
}
