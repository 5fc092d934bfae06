//! Keymaker library.
//!
//! A [`Keymaker`] produces [`Key`]s and reports each one to whoever is
//! currently registered as its delegate. The delegate is anything implementing
//! [`Keymaking`]; the keymaker only keeps a weak handle to it, so registering
//! never extends the delegate's lifetime.
//!
//! # Example
//!
//! ```
//! use keymaker_lib::{Key, Keymaker, Person};
//! use std::rc::Rc;
//!
//! let me = Rc::new(Person::default());
//! assert!(me.key().is_none());
//!
//! let mut keymaker = Keymaker::new();
//! me.register_with(&mut keymaker);
//!
//! keymaker.produce_key(Key::new("Basic"));
//! assert_eq!(me.key(), Some(Key::new("Basic")));
//! ```

pub mod errors;
pub mod key;
pub mod keymaker;
pub mod person;
pub mod prelude;
mod traits;

/// Test utilities for delegate testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::KeymakerError;
pub use key::Key;
pub use keymaker::{Delivery, Keymaker};
pub use person::Person;
pub use traits::Keymaking;

/// Common result alias for Keymaker operations.
pub type Result<T> = std::result::Result<T, KeymakerError>;
