//! The unit of work a [`Keymaker`](crate::Keymaker) produces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key, described by its shape.
///
/// # Example
///
/// ```
/// use keymaker_lib::Key;
///
/// let key = Key::new("Basic");
/// assert_eq!(key.shape(), "Basic");
/// assert_eq!(key.to_string(), "Basic");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    shape: String,
}

impl Key {
    /// Create a key with the given shape.
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// The shape of this key.
    pub fn shape(&self) -> &str {
        &self.shape
    }
}

impl From<&str> for Key {
    fn from(shape: &str) -> Self {
        Self::new(shape)
    }
}

impl From<String> for Key {
    fn from(shape: String) -> Self {
        Self::new(shape)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shape)
    }
}
