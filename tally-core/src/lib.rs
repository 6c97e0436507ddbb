//! Tally Core - Fundamental types
//!
//! This crate provides the core types used throughout Tally:
//! - `Qty`: quantity values, native float or arbitrary-precision decimal
//! - `Value`: dynamic caller-supplied input values
//! - `QtyError`: numeric errors

mod qty;
mod value;

pub use qty::{Qty, QtyError};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Qty, QtyError, Value};
}
