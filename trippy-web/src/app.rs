//! Trippy Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::HomePage;
use crate::state::landing::provide_landing_context;

#[component]
pub fn App() -> impl IntoView {
    // The dialog visibility flag is the only page-wide state
    provide_landing_context();

    Effect::new(move || {
        log::debug!("Landing page mounted");
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="hero-cta">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
