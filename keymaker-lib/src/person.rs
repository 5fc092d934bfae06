//! The end user who needs a key made.

use crate::{Key, Keymaker, Keymaking};
use std::cell::RefCell;
use std::rc::Rc;

/// Name a [`Person`] gets when none is given.
pub const DEFAULT_NAME: &str = "Me";

/// Someone who may or may not be holding a [`Key`].
///
/// A person is shared through [`Rc`] so a [`Keymaker`] can point back at it
/// without owning it.
#[derive(Debug)]
pub struct Person {
    name: String,
    key: RefCell<Option<Key>>,
}

impl Person {
    /// Creates a person with no key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: RefCell::new(None),
        }
    }

    /// The name this person goes by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A copy of the key this person holds, if any.
    pub fn key(&self) -> Option<Key> {
        self.key.borrow().clone()
    }

    /// Whether this person currently holds a key.
    pub fn has_key(&self) -> bool {
        self.key.borrow().is_some()
    }

    /// Hands over the held key, leaving this person without one.
    pub fn take_key(&self) -> Option<Key> {
        self.key.borrow_mut().take()
    }

    /// Registers this person as `keymaker`'s delegate, replacing whoever was
    /// registered before.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(person = %self.name)))]
    pub fn register_with(self: &Rc<Self>, keymaker: &mut Keymaker) {
        keymaker.register(self);
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Keymaking for Person {
    fn on_key_produced(&self, _producer: &Keymaker, key: Key) {
        #[cfg(feature = "tracing")]
        tracing::debug!(person = %self.name, shape = %key.shape(), "received key");
        *self.key.borrow_mut() = Some(key);
    }
}
