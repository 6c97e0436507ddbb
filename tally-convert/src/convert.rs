//! The conversion engine
//!
//! A `Converter` holds a validated registry and a base unit name, and
//! converts amounts between the base unit and registered types in both
//! directions. Conversions never mutate the registry; a converter is
//! freely shareable across threads.

use crate::{ConvertError, Registry, TypeDef};
use serde::{Deserialize, Serialize};
use tally_core::{Qty, QtyError};

/// Construction input for [`Converter`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Cosmetic only: rendered in formatted strings for base-unit
    /// results. Absent renders as the empty string.
    #[serde(default)]
    pub base_unit_name: Option<String>,
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// Direction-aware converter over a validated type registry
#[derive(Debug, Clone)]
pub struct Converter {
    base_unit_name: Option<String>,
    registry: Registry,
}

impl Converter {
    /// Build a converter from a config.
    ///
    /// Runs the registry validator once; fails with the validator's
    /// error, unwrapped, when any type definition is invalid.
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        let registry = Registry::validate(&config.types)?;
        Ok(Converter {
            base_unit_name: config.base_unit_name,
            registry,
        })
    }

    /// The registry built at construction
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn base_unit_name(&self) -> &str {
        self.base_unit_name.as_deref().unwrap_or("")
    }

    /// Resolve a type id to its display name and ratio.
    ///
    /// `None` targets the base unit itself: ratio 1, display name =
    /// base unit name.
    fn resolve(&self, type_id: Option<&str>) -> Result<(&str, Qty), ConvertError> {
        match type_id {
            None => Ok((self.base_unit_name(), Qty::one())),
            Some(id) => {
                let entry = self
                    .registry
                    .get(id)
                    .ok_or_else(|| ConvertError::UnknownType(id.to_string()))?;
                Ok((entry.name.as_str(), entry.qty.clone()))
            }
        }
    }

    /// Convert an amount of base units into a count of `type_id` units
    pub fn convert_to(
        &self,
        amount: impl Into<Qty>,
        type_id: Option<&str>,
    ) -> Result<Qty, ConvertError> {
        let (_, qty) = self.resolve(type_id)?;
        Ok(amount.into().checked_div(&qty)?)
    }

    /// Convert a count of `type_id` units into an amount of base units
    pub fn convert_from(
        &self,
        count: impl Into<Qty>,
        type_id: Option<&str>,
    ) -> Result<Qty, ConvertError> {
        let (_, qty) = self.resolve(type_id)?;
        Ok(count.into().mul(&qty))
    }

    /// [`Converter::convert_to`], formatted as `"<result> x <type name>"`
    pub fn str_convert_to(
        &self,
        amount: impl Into<Qty>,
        type_id: Option<&str>,
    ) -> Result<String, ConvertError> {
        let (name, qty) = self.resolve(type_id)?;
        let result = amount.into().checked_div(&qty)?;
        Ok(format!("{} x {}", result, name))
    }

    /// [`Converter::convert_from`], formatted as `"<result> x <base unit name>"`
    pub fn str_convert_from(
        &self,
        count: impl Into<Qty>,
        type_id: Option<&str>,
    ) -> Result<String, ConvertError> {
        let (_, qty) = self.resolve(type_id)?;
        let result = count.into().mul(&qty);
        Ok(format!("{} x {}", result, self.base_unit_name()))
    }
}

// ========== Stateless helpers ==========
//
// The same ratio arithmetic as the instance methods, for callers who
// already hold the ratio and do not want to build a converter.

/// Multiply a unit count by its per-unit quantity: the amount in base units
pub fn convert_to_unit_qty(count: impl Into<Qty>, unit_qty: impl Into<Qty>) -> Qty {
    count.into().mul(&unit_qty.into())
}

/// Divide an amount by a per-unit quantity: the unit count
///
/// The divisor bypasses registry validation here, so the division is
/// checked.
pub fn convert_from_unit_qty(
    count: impl Into<Qty>,
    unit_qty: impl Into<Qty>,
) -> Result<Qty, QtyError> {
    count.into().checked_div(&unit_qty.into())
}
