//! Key validation driver
//!
//! [`KeyGate`] runs one submission of the key dialog: start an attempt on the
//! form, check the key, settle the form and redirect on success. The browser
//! specifics sit behind three traits:
//!
//! - [`KeyChecker`] - issues the outbound key check
//! - [`Navigator`] - performs the full-page redirect
//! - [`FormStore`] - gives short-lived mutable access to the [`KeyForm`]
//!
//! The form is never borrowed across the checker's await point, and a store
//! that has gone away (dialog unmounted) makes the rest of the submission a
//! no-op.

use std::cell::RefCell;
use std::future::Future;

use crate::config::KeyCheckConfig;
use crate::error::{NavigationError, CheckError};
use crate::form::{Begin, KeyForm, Settle};
use crate::utils::redact_key;

/// Checks whether a key is accepted by the upstream service.
pub trait KeyChecker {
    fn check(&self, key: &str) -> impl Future<Output = Result<(), CheckError>>;
}

/// Sends the browsing context to another page.
pub trait Navigator {
    fn redirect(&self, url: &str) -> Result<(), NavigationError>;
}

/// Access to the form owned by a dialog instance.
///
/// Returns `None` once the owning dialog is gone.
pub trait FormStore {
    fn update<R>(&self, f: impl FnOnce(&mut KeyForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<KeyForm> {
    fn update<R>(&self, f: impl FnOnce(&mut KeyForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a submission ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redirected,
    Rejected,
    /// An attempt was already in flight; nothing was sent.
    Busy,
    /// The dialog was dismissed or unmounted before the check finished.
    Stale,
}

pub struct KeyGate<P, N> {
    redirect_url: String,
    checker: P,
    navigator: N,
}

impl<P: KeyChecker, N: Navigator> KeyGate<P, N> {
    pub fn new(config: &KeyCheckConfig, checker: P, navigator: N) -> Self {
        Self {
            redirect_url: config.redirect_url.clone(),
            checker,
            navigator,
        }
    }

    pub fn checker(&self) -> &P {
        &self.checker
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Validate the key currently held by `store`.
    pub async fn submit<S: FormStore>(&self, store: &S) -> Outcome {
        let attempt = match store.update(KeyForm::begin) {
            Some(Begin::Started(attempt)) => attempt,
            Some(Begin::Busy) => return Outcome::Busy,
            Some(Begin::Rejected) => {
                log::warn!("Key check skipped: {}", CheckError::EmptyKey);
                return Outcome::Rejected;
            }
            None => return Outcome::Stale,
        };

        log::info!("Checking key {}", redact_key(attempt.key()));
        let result = self.checker.check(attempt.key()).await;
        if let Err(err) = &result {
            log::warn!("Key check failed: {}", err);
        }

        match store.update(|form| form.settle(&attempt, &result)) {
            Some(Settle::Accepted) => match self.navigator.redirect(&self.redirect_url) {
                Ok(()) => {
                    log::info!("Key accepted, redirecting to {}", self.redirect_url);
                    Outcome::Redirected
                }
                Err(err) => {
                    log::error!("{}", err);
                    store.update(KeyForm::report_failure);
                    Outcome::Rejected
                }
            },
            Some(Settle::Rejected) => Outcome::Rejected,
            Some(Settle::Stale) | None => {
                log::debug!("Key dialog dismissed before the check finished");
                Outcome::Stale
            }
        }
    }
}
