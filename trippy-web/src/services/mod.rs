//! Browser-backed implementations of the key check seams

pub mod key_check;
