//! Delegate trait
//!
//! The output interface a [`Keymaker`] uses to hand over finished work. The
//! keymaker never cares about the concrete type behind it.

use crate::{Key, Keymaker};

/// Receiver of keys produced by a [`Keymaker`].
///
/// Implementors are registered through [`Keymaker::register`], which stores
/// only a weak handle. Notification arrives through `&self`, so state updated
/// on delivery needs interior mutability.
pub trait Keymaking {
    /// Called synchronously by `producer` once `key` is ready.
    fn on_key_produced(&self, producer: &Keymaker, key: Key);
}
