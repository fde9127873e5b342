//! Gemini key dialog
//!
//! Owns the key form for as long as the page is mounted. Closing the dialog
//! (Cancel, Escape or a backdrop click) dismisses the form before notifying
//! the page, which drops any check still in flight.

use leptos::prelude::*;
use shared::form::KeyForm;

use crate::services::key_check::{browser_gate, FormHandle};
use crate::utils::constants::{KEY_DIALOG_SUBTITLE, KEY_DIALOG_TITLE, KEY_PLACEHOLDER};

/// Keyboard shortcuts of the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
    Submit,
    Cancel,
}

impl DialogKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Escape" | "Esc" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Discard the typed key and any pending check, then tell the page to close.
pub fn cancel(form: RwSignal<KeyForm>, on_close: Callback<()>) {
    form.update(KeyForm::dismiss);
    on_close.run(());
}

#[component]
pub fn KeyDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(KeyForm::new());

    let close = move || cancel(form, on_close);

    let submit = move || {
        if !form.with_untracked(KeyForm::can_submit) {
            return;
        }

        leptos::task::spawn_local(async move {
            let outcome = browser_gate().submit(&FormHandle(form)).await;
            log::debug!("Key check finished: {:?}", outcome);
        });
    };

    let loading = move || form.with(KeyForm::is_loading);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                // Escape bubbles here from the input and both buttons
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=|e| e.stop_propagation()
                    on:keydown=move |e| {
                        if DialogKey::from_key(&e.key()) == Some(DialogKey::Cancel) {
                            close();
                        }
                    }
                >
                    <h2 class="modal-title">{KEY_DIALOG_TITLE}</h2>
                    <p class="modal-subtitle">{KEY_DIALOG_SUBTITLE}</p>

                    <input
                        class="modal-input"
                        type="text"
                        autocomplete="off"
                        spellcheck="false"
                        placeholder=KEY_PLACEHOLDER
                        prop:value=move || form.with(|f| f.key().to_string())
                        on:input=move |e| form.update(|f| f.set_key(event_target_value(&e)))
                        on:keydown=move |e| {
                            if DialogKey::from_key(&e.key()) == Some(DialogKey::Submit) {
                                submit();
                            }
                        }
                    />

                    {move || {
                        form.with(|f| f.error().map(str::to_owned))
                            .map(|message| view! { <p class="modal-error">{message}</p> })
                    }}

                    <div class="modal-actions">
                        <button class="btn btn--secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=loading
                            on:click=move |_| submit()
                        >
                            {move || if loading() { "Validating..." } else { "Continue" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
