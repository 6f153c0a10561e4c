//! Client-side input checks that run before any request is sent.
//!
//! These are UI-agnostic so the forms can reuse them without depending on
//! terminal types. A rejected input never reaches the wire.

use std::fmt;

/// Count submitted when the count field is empty or not an integer.
pub const DEFAULT_PING_COUNT: u32 = 4;

/// Synchronous input rejection. Surfaced inline next to the form; no
/// request is made and nothing is logged as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyHost,
    BadPrefix,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyHost => write!(f, "Please enter a host or IP address"),
            InputError::BadPrefix => {
                write!(f, "Invalid network prefix. Please use format: 192.168.1")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Trim the host field; an empty result blocks the ping.
pub fn normalize_host(raw: &str) -> Result<String, InputError> {
    let host = raw.trim();
    if host.is_empty() {
        return Err(InputError::EmptyHost);
    }
    Ok(host.to_string())
}

/// Parse the ping count field, falling back to [`DEFAULT_PING_COUNT`] when
/// the field is empty or non-numeric. No bounds are enforced client-side.
pub fn parse_ping_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_PING_COUNT)
}

/// Validate a dotted three-octet prefix (e.g. `192.168.1`): exactly three
/// segments, each an integer in `[0, 255]`. Returns the trimmed prefix.
pub fn validate_prefix(raw: &str) -> Result<String, InputError> {
    let prefix = raw.trim();
    if prefix.is_empty() {
        return Err(InputError::BadPrefix);
    }

    let segments: Vec<&str> = prefix.split('.').collect();
    if segments.len() != 3 {
        return Err(InputError::BadPrefix);
    }
    for segment in &segments {
        match segment.parse::<u16>() {
            Ok(octet) if octet <= 255 => {}
            _ => return Err(InputError::BadPrefix),
        }
    }

    Ok(prefix.to_string())
}
