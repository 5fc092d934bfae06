//! The keymaker service.
//!
//! A [`Keymaker`] serves one delegate at a time: the last one registered.
//! It holds that delegate through a [`Weak`] handle, so a delegate that goes
//! away simply stops receiving keys.
//!
//! # Delivery
//!
//! [`Keymaker::produce_key`] never fails. When nobody is listening the key is
//! dropped and the returned [`Delivery`] says why. Callers that must know the
//! key landed use [`Keymaker::produce_key_required`] instead.

use crate::traits::Keymaking;
use crate::{Key, KeymakerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::{Rc, Weak};

/// Outcome of a single [`Keymaker::produce_key`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// The registered delegate received the key.
    Delivered,
    /// No delegate is registered; the key was dropped.
    NoDelegate,
    /// The registered delegate no longer exists; the key was dropped.
    DelegateDropped,
}

impl Delivery {
    /// Whether the key reached a delegate.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl From<&KeymakerError> for Delivery {
    fn from(err: &KeymakerError) -> Self {
        match err {
            KeymakerError::NoDelegate(_) => Self::NoDelegate,
            KeymakerError::DelegateDropped(_) => Self::DelegateDropped,
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Delivered => "delivered",
            Self::NoDelegate => "no delegate",
            Self::DelegateDropped => "delegate dropped",
        };
        f.write_str(label)
    }
}

/// Produces keys for whichever delegate registered last.
///
/// # Example
///
/// ```
/// use keymaker_lib::{Delivery, Key, Keymaker};
///
/// // Nobody registered: the key is dropped without complaint.
/// let keymaker = Keymaker::new();
/// assert_eq!(keymaker.produce_key(Key::new("X")), Delivery::NoDelegate);
/// ```
#[derive(Default)]
pub struct Keymaker {
    delegate: Option<Weak<dyn Keymaking>>,
}

impl Keymaker {
    /// Creates a keymaker with no delegate.
    pub fn new() -> Self {
        Self { delegate: None }
    }

    /// Registers `delegate` as the receiver of produced keys.
    ///
    /// Replaces any previously registered delegate. Only a weak handle is
    /// kept.
    pub fn register<T: Keymaking + 'static>(&mut self, delegate: &Rc<T>) {
        let handle: Weak<T> = Rc::downgrade(delegate);
        self.set_delegate(handle);
    }

    /// Registers an already-downgraded delegate handle.
    pub fn set_delegate(&mut self, delegate: Weak<dyn Keymaking>) {
        #[cfg(feature = "tracing")]
        if self.delegate.is_some() {
            tracing::debug!("replacing registered delegate");
        }
        self.delegate = Some(delegate);
    }

    /// Forgets the current delegate, if any.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Returns true while a registered delegate is still alive.
    pub fn has_delegate(&self) -> bool {
        self.delegate().is_some()
    }

    /// Returns a strong handle to the live delegate, if any.
    pub fn delegate(&self) -> Option<Rc<dyn Keymaking>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Hands `key` to the registered delegate.
    ///
    /// The delegate is notified synchronously, before this returns. If there
    /// is no live delegate the key is dropped and that is not an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, key), fields(shape = %key.shape())))]
    pub fn produce_key(&self, key: Key) -> Delivery {
        match self.deliver(key) {
            Ok(()) => Delivery::Delivered,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("dropping key: {err}");
                Delivery::from(&err)
            }
        }
    }

    /// Like [`produce_key`](Self::produce_key), but a missing delegate is
    /// reported as an error carrying the undelivered key.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, key), fields(shape = %key.shape())))]
    pub fn produce_key_required(&self, key: Key) -> Result<()> {
        self.deliver(key)
    }

    fn deliver(&self, key: Key) -> Result<()> {
        let Some(handle) = self.delegate.as_ref() else {
            return Err(KeymakerError::NoDelegate(key));
        };
        let Some(delegate) = handle.upgrade() else {
            return Err(KeymakerError::DelegateDropped(key));
        };
        delegate.on_key_produced(self, key);
        Ok(())
    }
}

impl fmt::Debug for Keymaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keymaker")
            .field("has_delegate", &self.has_delegate())
            .finish()
    }
}
