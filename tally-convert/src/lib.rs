//! Tally Convert - stateful base-unit / pack-type conversion
//!
//! A [`Converter`] is built from a base unit name and a list of type
//! definitions, each giving the number of base units per unit of the
//! type (a "case" with qty 50 against base unit "lb" means
//! 1 case = 50 lb). It then converts amounts in both directions and
//! formats results as `"<result> x <unit name>"`.
//!
//! The converter knows nothing about real-world unit systems; all
//! ratios come from the caller. Definitions are validated once at
//! construction, and the registry never changes afterwards.
//!
//! ```
//! use tally_convert::{Converter, ConverterConfig, TypeDef};
//!
//! let converter = Converter::new(ConverterConfig {
//!     base_unit_name: Some("lb".to_string()),
//!     types: vec![TypeDef::new("case", "case (50lb)", 50i64)],
//! })?;
//!
//! assert_eq!(converter.str_convert_to(100, Some("case"))?, "2 x case (50lb)");
//! assert_eq!(converter.str_convert_from(2, Some("case"))?, "100 x lb");
//! # Ok::<(), tally_convert::ConvertError>(())
//! ```

mod convert;
mod error;
mod registry;

pub use convert::{convert_from_unit_qty, convert_to_unit_qty, Converter, ConverterConfig};
pub use error::ConvertError;
pub use registry::{Registry, TypeDef, UnitType};

pub use tally_core::{Qty, QtyError, Value};
