//! UI Components

pub mod image_card;
pub mod key_dialog;
pub mod navbar;

pub use image_card::ImageCard;
pub use key_dialog::KeyDialog;
pub use navbar::Navbar;
