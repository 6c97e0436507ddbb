//! Registry of pack-type definitions
//!
//! Definitions are validated eagerly, in order, at construction time.
//! Check order is fixed so error messages are deterministic: id
//! presence, qty presence, qty type, qty sign.

use crate::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_core::{Qty, Value};

/// A caller-supplied type definition, prior to validation
///
/// All fields are optional so sparse JSON input maps on directly;
/// validation decides what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDef {
    /// Lookup key for conversions
    #[serde(default)]
    pub id: Option<String>,
    /// Display name used in formatted conversion results
    #[serde(default)]
    pub name: Option<String>,
    /// Number of base units that make up one unit of this type
    #[serde(default)]
    pub qty: Option<Value>,
}

impl TypeDef {
    /// Convenience constructor for a fully-specified definition
    pub fn new(id: &str, name: &str, qty: impl Into<Qty>) -> Self {
        TypeDef {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            qty: Some(Value::Number(qty.into())),
        }
    }
}

/// A validated registry entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    /// Display name (empty when the definition had none)
    pub name: String,
    /// Base units per one unit of this type; finite and positive
    pub qty: Qty,
}

/// Immutable lookup of validated type definitions, keyed by id
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, UnitType>,
}

impl Registry {
    /// Validate definitions in order and build the registry.
    ///
    /// The first failing definition aborts construction; no partial
    /// registry escapes. When two definitions share an id, the later
    /// registration wins.
    pub fn validate(types: &[TypeDef]) -> Result<Self, ConvertError> {
        let mut entries = HashMap::with_capacity(types.len());

        for def in types {
            let id = match def.id.as_deref() {
                Some(id) if !id.is_empty() => id,
                _ => return Err(ConvertError::MissingId),
            };

            let qty = match &def.qty {
                None | Some(Value::Null) => {
                    return Err(ConvertError::MissingQty(id.to_string()))
                }
                // Non-finite floats fail the numeric check along with
                // text and bool values
                Some(value) => match value.as_number() {
                    Some(q) if q.is_finite() => q,
                    _ => return Err(ConvertError::NotNumeric(id.to_string())),
                },
            };

            if !qty.is_positive() {
                return Err(ConvertError::NonPositive(id.to_string()));
            }

            entries.insert(
                id.to_string(),
                UnitType {
                    name: def.name.clone().unwrap_or_default(),
                    qty: qty.clone(),
                },
            );
        }

        Ok(Registry { entries })
    }

    /// Look up a validated entry by id
    pub fn get(&self, id: &str) -> Option<&UnitType> {
        self.entries.get(id)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no types are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_definitions() {
        let registry = Registry::validate(&[
            TypeDef::new("id1", "case (50lb)", 50i64),
            TypeDef::new("id2", "porterhouse (1.5lb)", 1.5),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        let entry = registry.get("id1").unwrap();
        assert_eq!(entry.name, "case (50lb)");
        assert_eq!(entry.qty, Qty::from_i64(50));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let registry = Registry::validate(&[]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_id() {
        let def = TypeDef {
            qty: Some(Value::from(10i64)),
            ..Default::default()
        };
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingId));
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let def = TypeDef::new("", "nameless", 10i64);
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingId));
    }

    #[test]
    fn test_missing_qty() {
        let def = TypeDef {
            id: Some("stuff".to_string()),
            ..Default::default()
        };
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingQty(id) if id == "stuff"));
    }

    #[test]
    fn test_null_qty_counts_as_missing() {
        let def = TypeDef {
            id: Some("stuff".to_string()),
            qty: Some(Value::Null),
            ..Default::default()
        };
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::MissingQty(_)));
    }

    #[test]
    fn test_numeric_string_is_rejected() {
        let def = TypeDef {
            id: Some("stuff".to_string()),
            qty: Some(Value::from("1000")),
            ..Default::default()
        };
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::NotNumeric(id) if id == "stuff"));
    }

    #[test]
    fn test_bool_qty_is_rejected() {
        let def = TypeDef {
            id: Some("stuff".to_string()),
            qty: Some(Value::from(true)),
            ..Default::default()
        };
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::NotNumeric(_)));
    }

    #[test]
    fn test_nan_qty_is_rejected() {
        let def = TypeDef::new("stuff", "", f64::NAN);
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::NotNumeric(_)));
    }

    #[test]
    fn test_zero_qty_is_rejected() {
        let def = TypeDef::new("stuff", "", 0i64);
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::NonPositive(id) if id == "stuff"));
    }

    #[test]
    fn test_negative_qty_is_rejected() {
        let def = TypeDef::new("stuff", "", -102i64);
        let err = Registry::validate(&[def]).unwrap_err();
        assert!(matches!(err, ConvertError::NonPositive(_)));
    }

    #[test]
    fn test_first_failure_aborts() {
        let err = Registry::validate(&[
            TypeDef::new("good", "fine", 1i64),
            TypeDef::new("bad", "", 0i64),
        ])
        .unwrap_err();
        assert!(matches!(err, ConvertError::NonPositive(id) if id == "bad"));
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let registry = Registry::validate(&[
            TypeDef::new("id1", "first", 10i64),
            TypeDef::new("id1", "second", 20i64),
        ])
        .unwrap();

        assert_eq!(registry.len(), 1);
        let entry = registry.get("id1").unwrap();
        assert_eq!(entry.name, "second");
        assert_eq!(entry.qty, Qty::from_i64(20));
    }

    #[test]
    fn test_big_qty_is_accepted() {
        let def = TypeDef {
            id: Some("exact".to_string()),
            name: Some("exact pack".to_string()),
            qty: Some(Value::Number(Qty::from_str("1.5").unwrap())),
        };
        let registry = Registry::validate(&[def]).unwrap();
        assert_eq!(
            registry.get("exact").unwrap().qty,
            Qty::from_str("1.5").unwrap()
        );
    }

    #[test]
    fn test_typedef_from_json() {
        let def: TypeDef =
            serde_json::from_str(r#"{"id": "id1", "name": "case (50lb)", "qty": 50}"#).unwrap();
        assert_eq!(def.id.as_deref(), Some("id1"));
        assert!(def.qty.unwrap().as_number().is_some());
    }
}
