//! Page-level state

pub mod landing;
