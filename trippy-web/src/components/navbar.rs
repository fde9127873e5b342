//! Navigation Bar Component

use leptos::prelude::*;
use shared::content::{BRAND, NAV_LINKS};

#[component]
pub fn Navbar(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    view! {
        <nav class="navbar navbar--enter">
            <div class="navbar-brand">
                <img src=BRAND.logo alt=BRAND.name width="40" height="40"/>
                <span class="navbar-wordmark">{BRAND.wordmark}</span>
            </div>

            <div class="navbar-links">
                {NAV_LINKS
                    .iter()
                    .map(|label| view! { <a class="navbar-link">{*label}</a> })
                    .collect_view()}
            </div>

            <button class="navbar-login" on:click=move |_| on_login.run(())>
                "Login"
            </button>
        </nav>
    }
}
