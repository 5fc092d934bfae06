//! Error types for Keymaker operations.
//!
//! Delivering to nobody is not an error for [`Keymaker::produce_key`]. These
//! errors only surface through the strict
//! [`Keymaker::produce_key_required`] path.
//!
//! [`Keymaker::produce_key`]: crate::Keymaker::produce_key
//! [`Keymaker::produce_key_required`]: crate::Keymaker::produce_key_required

use crate::Key;

/// Error raised when a produced key could not be handed to a delegate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymakerError {
    /// No delegate was ever registered, or it was cleared.
    #[error("no delegate registered to receive key '{0}'")]
    NoDelegate(Key),

    /// A delegate was registered but has since been dropped.
    #[error("delegate dropped before key '{0}' was delivered")]
    DelegateDropped(Key),
}

impl KeymakerError {
    /// The key that was produced but not delivered.
    pub fn key(&self) -> &Key {
        match self {
            Self::NoDelegate(key) | Self::DelegateDropped(key) => key,
        }
    }

    /// Recover the undelivered key.
    pub fn into_key(self) -> Key {
        match self {
            Self::NoDelegate(key) | Self::DelegateDropped(key) => key,
        }
    }
}
