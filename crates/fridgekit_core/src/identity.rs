//! Opaque identity handle supplied by the external session provider.
//!
//! # Responsibility
//! - Carry the externally attached identity for display purposes only.
//!
//! # Invariants
//! - Core logic never branches on handle contents, only on attachment state.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identity string (e.g. a wallet address) owned by the session
/// provider. The engine treats it as display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityHandle(String);

impl IdentityHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated presentation form: first six characters, ellipsis, last
    /// four. Handles short enough to display whole are returned unchanged.
    pub fn short_display(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl Display for IdentityHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityHandle;

    #[test]
    fn short_display_truncates_long_handles() {
        let handle = IdentityHandle::new("0x3f9B873aC41E33054e6aF55221aA0e5aFf8d72EC");
        assert_eq!(handle.short_display(), "0x3f9B…72EC");
    }

    #[test]
    fn short_display_keeps_short_handles_whole() {
        let handle = IdentityHandle::new("guest-42");
        assert_eq!(handle.short_display(), "guest-42");
    }
}
