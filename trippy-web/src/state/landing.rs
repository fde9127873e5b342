//! Landing page state management

use leptos::prelude::*;

/// Page-wide context: whether the key dialog is open
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub dialog_open: RwSignal<bool>,
}

impl LandingContext {
    pub fn new() -> Self {
        Self {
            dialog_open: RwSignal::new(false),
        }
    }

    pub fn open_dialog(&self) {
        log::debug!("Key dialog opened");
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        log::debug!("Key dialog closed");
        self.dialog_open.set(false);
    }
}

impl Default for LandingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_landing_context() -> LandingContext {
    let context = LandingContext::new();
    provide_context(context);
    context
}

pub fn use_landing_context() -> LandingContext {
    expect_context::<LandingContext>()
}
