//! Landing page content
//!
//! Copy and asset paths rendered by the landing page. Asset paths are relative
//! to the application's static directory.

/// Branding shown in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub wordmark: &'static str,
    pub logo: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "Trippy",
    wordmark: "trippy",
    logo: "/logo.png",
};

pub const NAV_LINKS: [&str; 5] = ["Hotels", "Tours", "Flights", "Packages", "Cruises"];

pub const BACKGROUND_IMAGE: &str = "/landingbg.jpg";

/// Destination featured in the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub region: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const HERO: Destination = Destination {
    region: "Italy,",
    name: "Manarola",
    tagline: "With trippy, plan your itinerary from start to finish.",
};

pub const CALL_TO_ACTION: &str = "Try Trippy";

/// Base delay before the first showcase card enters.
pub const CARD_ENTRANCE_BASE_SECS: f64 = 0.8;
/// Additional delay per card index.
pub const CARD_ENTRANCE_STEP_SECS: f64 = 0.1;

/// A decorative photograph in the hero showcase.
///
/// `index` only staggers the entrance animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseCard {
    pub src: &'static str,
    pub alt: &'static str,
    pub index: usize,
}

impl ShowcaseCard {
    pub fn entrance_delay_secs(&self) -> f64 {
        entrance_delay_secs(self.index)
    }

    /// Inline style applying the staggered entrance delay.
    pub fn entrance_style(&self) -> String {
        format!("animation-delay: {:.1}s;", self.entrance_delay_secs())
    }
}

pub fn entrance_delay_secs(index: usize) -> f64 {
    CARD_ENTRANCE_BASE_SECS + index as f64 * CARD_ENTRANCE_STEP_SECS
}

pub const SHOWCASE: [ShowcaseCard; 3] = [
    ShowcaseCard {
        src: "/Stella Boat Tour.png",
        alt: "Stella Boat Tour",
        index: 0,
    },
    ShowcaseCard {
        src: "/Manarola Downtown.png",
        alt: "Manarola Downtown",
        index: 1,
    },
    ShowcaseCard {
        src: "/Bar Enrica.png",
        alt: "Bar Enrica",
        index: 2,
    },
];
