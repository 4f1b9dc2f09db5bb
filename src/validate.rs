//! Input validation for unsocial-core.
//!
//! Every logic operation validates its arguments with these helpers before
//! touching the database. Each failure names the first invalid argument and
//! the defect kind: `invalid {field}` for a malformed value, or
//! `invalid {field} length` for a value outside its length bounds.

use url::Url;

use crate::{Result, UnsocialError};

/// Exact length of an object id (24 lowercase hex characters).
pub const ID_LENGTH: usize = 24;

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 16;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of post and comment text.
pub const MAX_TEXT_LENGTH: usize = 500;

fn invalid(field: &str) -> UnsocialError {
    UnsocialError::Validation(format!("invalid {field}"))
}

fn invalid_length(field: &str) -> UnsocialError {
    UnsocialError::Validation(format!("invalid {field} length"))
}

/// Validate an object id under the given argument name.
///
/// Ids are exactly [`ID_LENGTH`] characters of lowercase hex. The length
/// check runs first so a truncated id reports the length defect.
pub fn id(value: &str, name: &str) -> Result<()> {
    if value.len() != ID_LENGTH {
        return Err(invalid_length(name));
    }
    if !value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(invalid(name));
    }
    Ok(())
}

/// Validate a display name.
pub fn name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid("name"));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid_length("name"));
    }
    Ok(())
}

/// Validate an email address.
///
/// A minimal structural check: one `@` separating a non-empty local part
/// from a domain containing a dot.
pub fn email(value: &str) -> Result<()> {
    if value.len() > MAX_EMAIL_LENGTH {
        return Err(invalid_length("email"));
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        return Err(invalid("email"));
    }
    Ok(())
}

/// Validate a username (lowercase alphanumeric, `-` and `_`).
pub fn username(value: &str) -> Result<()> {
    let len = value.chars().count();
    if len < MIN_USERNAME_LENGTH || len > MAX_USERNAME_LENGTH {
        return Err(invalid_length("username"));
    }
    let ok = value
        .bytes()
        .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_'));
    if !ok {
        return Err(invalid("username"));
    }
    Ok(())
}

/// Validate a password (length bounds only; content is unconstrained).
pub fn password(value: &str) -> Result<()> {
    let len = value.chars().count();
    if len < MIN_PASSWORD_LENGTH || len > MAX_PASSWORD_LENGTH {
        return Err(invalid_length("password"));
    }
    Ok(())
}

/// Validate a post image address: must parse as an http(s) URL.
pub fn image(value: &str) -> Result<()> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(invalid("image")),
    }
}

/// Validate post or comment text.
pub fn text(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid("text"));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(invalid_length("text"));
    }
    Ok(())
}
