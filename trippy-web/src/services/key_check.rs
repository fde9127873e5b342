//! Gemini key check in the browser
//!
//! - [`GeminiChecker`] sends the listing request with gloo-net
//! - [`BrowserNavigator`] assigns `window.location.href`
//! - [`FormHandle`] exposes the dialog's form signal to [`KeyGate`]; once the
//!   dialog's owner is disposed every update is refused, so a late response
//!   cannot touch an unmounted dialog

use gloo_net::http::Request;
use leptos::prelude::*;
use shared::config::KeyCheckConfig;
use shared::dto::ModelList;
use shared::form::KeyForm;
use shared::gate::{FormStore, KeyGate, KeyChecker, Navigator};
use shared::{NavigationError, CheckError};

use crate::utils::constants;

pub struct GeminiChecker {
    config: KeyCheckConfig,
}

impl GeminiChecker {
    pub fn new(config: KeyCheckConfig) -> Self {
        Self { config }
    }
}

impl KeyChecker for GeminiChecker {
    async fn check(&self, key: &str) -> Result<(), CheckError> {
        let url = self.config.check_url(key);

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| CheckError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(CheckError::Status(resp.status()));
        }

        // The body is informational only
        match resp.json::<ModelList>().await {
            Ok(list) => log::debug!("Key can list {} models", list.len()),
            Err(e) => log::debug!("Unreadable model listing: {}", e),
        }

        Ok(())
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) -> Result<(), NavigationError> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError("No window available".to_string()))?;

        window
            .location()
            .set_href(url)
            .map_err(|e| NavigationError(format!("{:?}", e)))
    }
}

#[derive(Clone, Copy)]
pub struct FormHandle(pub RwSignal<KeyForm>);

impl FormStore for FormHandle {
    fn update<R>(&self, f: impl FnOnce(&mut KeyForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Resolve the key check configuration, falling back to the defaults when an
/// override does not validate.
pub fn key_check_config() -> KeyCheckConfig {
    let config = KeyCheckConfig::new(constants::KEY_CHECK_ENDPOINT, constants::REDIRECT_URL);

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            KeyCheckConfig::default()
        }
    }
}

pub fn browser_gate() -> KeyGate<GeminiChecker, BrowserNavigator> {
    let config = key_check_config();
    KeyGate::new(&config, GeminiChecker::new(config.clone()), BrowserNavigator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_updates_live_form() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(KeyForm::new());
            let handle = FormHandle(form);

            let updated = handle.update(|f| {
                f.set_key("AIzaSyExample");
                f.key().len()
            });

            assert_eq!(updated, Some(13));
            assert_eq!(form.with_untracked(|f| f.key().to_string()), "AIzaSyExample");
        });
    }

    #[test]
    fn test_handle_refuses_updates_after_dispose() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(KeyForm::new());
            let handle = FormHandle(form);

            form.dispose();

            assert_eq!(handle.update(KeyForm::begin), None);
        });
    }

    #[test]
    fn test_build_config_follows_constants() {
        let built = KeyCheckConfig::new(constants::KEY_CHECK_ENDPOINT, constants::REDIRECT_URL);

        let expected = if built.validate().is_ok() {
            built
        } else {
            KeyCheckConfig::default()
        };

        assert_eq!(key_check_config(), expected);
        assert!(key_check_config().validate().is_ok());
    }
}
