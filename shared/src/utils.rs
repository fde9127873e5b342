//! # Shared Utility Functions
//!
//! ## Key Masking
//!
//! API keys are never written to logs in full:
//! - [`mask_key`] - Keep the first and last `visible` characters of a long key
//! - [`redact_key`] - [`mask_key`] with the default of four characters
//!
//! ```rust
//! use shared::utils::redact_key;
//!
//! assert_eq!(redact_key("AIzaSyD3xampleKeyValue0000wxyz"), "AIza...wxyz");
//! assert_eq!(redact_key("short"), "*****");
//! ```

/// Mask a key, showing `visible` characters at each end.
///
/// Keys too short to keep at least as many hidden characters as shown ones
/// are masked completely.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_key;
///
/// assert_eq!(mask_key("AIzaSyD3xampleKeyValue0000wxyz", 6), "AIzaSy...00wxyz");
/// assert_eq!(mask_key("abcdefgh", 4), "********");
/// ```
pub fn mask_key(key: &str, visible: usize) -> String {
    let chars: Vec<char> = key.chars().collect();

    if visible == 0 || chars.len() < visible * 4 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..visible].iter().collect();
    let suffix: String = chars[chars.len() - visible..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Mask a key with the default four visible characters at each end.
pub fn redact_key(key: &str) -> String {
    mask_key(key, 4)
}
