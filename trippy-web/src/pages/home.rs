//! Landing Page - hero, showcase and key dialog

use leptos::prelude::*;
use shared::content::{BACKGROUND_IMAGE, CALL_TO_ACTION, HERO, SHOWCASE};

use crate::components::image_card::slot_class;
use crate::components::{ImageCard, KeyDialog, Navbar};
use crate::state::landing::use_landing_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let landing = use_landing_context();

    let backdrop_style = format!("background-image: url('{}');", BACKGROUND_IMAGE);

    view! {
        <div class="landing">
            <div class="landing-backdrop" style=backdrop_style></div>

            <Navbar on_login=move |()| landing.open_dialog()/>

            <main class="hero">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h2 class="hero-region">{HERO.region}</h2>
                        <h1 class="hero-title">{HERO.name}</h1>
                        <p class="hero-tagline">{HERO.tagline}</p>

                        <button class="hero-cta" on:click=move |_| landing.open_dialog()>
                            {CALL_TO_ACTION}
                        </button>
                    </div>

                    <div class="showcase">
                        {SHOWCASE
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class=slot_class(card)>
                                        <ImageCard card=*card/>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>

            <KeyDialog
                is_open=landing.dialog_open
                on_close=move |()| landing.close_dialog()
            />
        </div>
    }
}
