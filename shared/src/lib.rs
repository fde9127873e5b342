//! # Trippy Shared Library
//!
//! Platform-neutral core of the trippy landing page. Everything in here runs
//! natively, so the behaviour of the key dialog can be tested without a
//! browser; the WASM front end (`trippy-web`) only supplies browser-backed
//! implementations of the seams defined in [`gate`].
//!
//! ## Structure
//!
//! - **[`content`]**: Static landing content (brand, navigation, hero, showcase cards)
//! - **[`form`]**: State of the key dialog form ([`form::KeyForm`])
//! - **[`gate`]**: Validation driver ([`gate::KeyGate`]) and its seams
//!   ([`gate::KeyChecker`], [`gate::Navigator`], [`gate::FormStore`])
//! - **[`config`]**: Key check endpoint and redirect target
//! - **[`dto`]**: Wire types of the key check endpoint
//! - **[`error`]**: Error types and the single user-facing message
//! - **[`utils`]**: Key masking for logs
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use shared::config::KeyCheckConfig;
//! use shared::form::KeyForm;
//! use shared::gate::KeyGate;
//! # async fn run(checker: impl shared::gate::KeyChecker, nav: impl shared::gate::Navigator) {
//! let gate = KeyGate::new(&KeyCheckConfig::default(), checker, nav);
//! let store = RefCell::new(KeyForm::new());
//! store.borrow_mut().set_key("AIzaSyExample");
//! let outcome = gate.submit(&store).await;
//! # }
//! ```

pub mod config;
pub mod content;
pub mod dto;
pub mod error;
pub mod form;
pub mod gate;
pub mod utils;

pub use error::{ConfigError, NavigationError, CheckError, INVALID_KEY_MESSAGE};
pub use form::KeyForm;
pub use gate::{KeyGate, Outcome};
