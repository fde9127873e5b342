//! Application constants
//!
//! The key check endpoint and redirect target can be overridden at build time
//! with `TRIPPY_KEY_CHECK_ENDPOINT` and `TRIPPY_REDIRECT_URL`.

use shared::config::{DEFAULT_KEY_CHECK_ENDPOINT, DEFAULT_REDIRECT_URL};

pub const KEY_CHECK_ENDPOINT: &str = match option_env!("TRIPPY_KEY_CHECK_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_KEY_CHECK_ENDPOINT,
};

pub const REDIRECT_URL: &str = match option_env!("TRIPPY_REDIRECT_URL") {
    Some(url) => url,
    None => DEFAULT_REDIRECT_URL,
};

// Element ids in index.html
pub const LOADING_SCREEN_ID: &str = "trippy-loading";

// Key dialog copy
pub const KEY_DIALOG_TITLE: &str = "Enter Gemini API Key";
pub const KEY_DIALOG_SUBTITLE: &str = "Your key is only used to validate access.";
pub const KEY_PLACEHOLDER: &str = "AIza...";
