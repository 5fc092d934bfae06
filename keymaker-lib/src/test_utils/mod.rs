//! Test utilities for Keymaker.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keymaker_lib::test_utils::RecordingDelegate;
//!
//! let recorder = Rc::new(RecordingDelegate::new());
//! keymaker.register(&recorder);
//! keymaker.produce_key(Key::new("Basic"));
//! assert_eq!(recorder.count(), 1);
//! ```

mod recording;

pub use recording::RecordingDelegate;
