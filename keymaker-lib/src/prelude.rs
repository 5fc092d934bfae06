//! Prelude module for convenient imports.
//!
//! ```rust
//! use keymaker_lib::prelude::*;
//! ```

pub use crate::errors::KeymakerError;
pub use crate::keymaker::{Delivery, Keymaker};
pub use crate::person::Person;
pub use crate::traits::Keymaking;
pub use crate::{Key, Result};
