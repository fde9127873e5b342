//! Showcase image card with a hover caption

use leptos::prelude::*;
use shared::content::ShowcaseCard;

/// Pointer-over state of one card; the caption follows it.
#[derive(Clone, Copy)]
pub struct CardHover {
    hovered: RwSignal<bool>,
}

impl CardHover {
    pub fn new() -> Self {
        Self {
            hovered: RwSignal::new(false),
        }
    }

    pub fn enter(&self) {
        self.hovered.set(true);
    }

    pub fn leave(&self) {
        self.hovered.set(false);
    }

    pub fn caption_visible(&self) -> bool {
        self.hovered.get()
    }
}

impl Default for CardHover {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ImageCard(card: ShowcaseCard) -> impl IntoView {
    let hover = CardHover::new();

    view! {
        <div
            class="image-card image-card--enter"
            style=card.entrance_style()
            on:mouseenter=move |_| hover.enter()
            on:mouseleave=move |_| hover.leave()
        >
            <img class="image-card-img" src=card.src alt=card.alt width="360" height="260"/>
            <Show when=move || hover.caption_visible()>
                <div class="image-card-caption">{card.alt}</div>
            </Show>
        </div>
    }
}

/// Position of a card in the staggered showcase column.
pub fn slot_class(card: &ShowcaseCard) -> String {
    format!("showcase-slot showcase-slot--{}", card.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::content::SHOWCASE;

    #[test]
    fn test_slot_class() {
        assert_eq!(slot_class(&SHOWCASE[0]), "showcase-slot showcase-slot--0");
        assert_eq!(slot_class(&SHOWCASE[2]), "showcase-slot showcase-slot--2");
    }

    #[test]
    fn test_caption_follows_pointer() {
        let owner = Owner::new();
        owner.with(|| {
            let hover = CardHover::new();
            assert!(!hover.caption_visible());

            hover.enter();
            assert!(hover.caption_visible());

            hover.leave();
            assert!(!hover.caption_visible());
        });
    }

    #[test]
    fn test_hover_is_independent_per_card() {
        let owner = Owner::new();
        owner.with(|| {
            let cards: Vec<CardHover> = SHOWCASE.iter().map(|_| CardHover::new()).collect();

            for (hovered, card) in cards.iter().enumerate() {
                card.enter();

                let visible: Vec<bool> = cards.iter().map(CardHover::caption_visible).collect();
                let expected: Vec<bool> = (0..cards.len()).map(|i| i == hovered).collect();
                assert_eq!(visible, expected);

                card.leave();
                assert!(cards.iter().all(|c| !c.caption_visible()));
            }
        });
    }

    #[test]
    fn test_entrance_animation_releases_transform() {
        let css = include_str!("../../style.css");
        let rule = css
            .lines()
            .find(|line| line.starts_with(".image-card--enter"))
            .expect("entrance rule present");

        assert!(rule.contains("card-enter"));
        assert!(!rule.contains("forwards"));
        assert!(!rule.contains("both"));
    }
}
