//! Contains common functionality: error types, logging and text reading helpers.

mod error;
pub use self::error::*;

mod text_reader;
pub(crate) use self::text_reader::*;

use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by readers.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
