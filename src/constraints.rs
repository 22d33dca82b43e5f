//! Constraint schema registry: which constraint keys each base type accepts,
//! and their defaults.
//!
//! The table is the single source of truth for type/constraint coupling;
//! no presentation-layer knowledge leaks in. Resolution is a pure lookup
//! invoked once per add/update cycle, before a field spec is finalized.

use crate::model::{BaseType, ConstraintMap, ConstraintValue, NULLABLE_KEY};
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

/// Allowed keys and defaults for one base type.
#[derive(Debug, Clone)]
pub struct ConstraintSchema {
    pub base_type: BaseType,
    pub defaults: Vec<(&'static str, ConstraintValue)>,
}

impl ConstraintSchema {
    pub fn allowed_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defaults.iter().map(|(key, _)| *key)
    }
}

/// One schema per base type, covering the whole enumeration.
pub static CONSTRAINT_SCHEMAS: Lazy<Vec<ConstraintSchema>> =
    Lazy::new(|| BaseType::iter().map(schema_for).collect());

fn schema_for(base_type: BaseType) -> ConstraintSchema {
    let defaults: Vec<(&'static str, ConstraintValue)> = match base_type {
        BaseType::Str => vec![
            ("min_length", ConstraintValue::Int(0)),
            ("max_length", ConstraintValue::Int(100)),
            (NULLABLE_KEY, ConstraintValue::Bool(false)),
        ],
        BaseType::Int => vec![
            ("gt", ConstraintValue::Int(0)),
            ("lt", ConstraintValue::Int(100)),
            (NULLABLE_KEY, ConstraintValue::Bool(false)),
        ],
        BaseType::Float => vec![
            ("gt", ConstraintValue::Int(0)),
            ("lt", ConstraintValue::Int(100)),
            ("max_digits", ConstraintValue::Int(10)),
            ("decimal_places", ConstraintValue::Int(2)),
            (NULLABLE_KEY, ConstraintValue::Bool(false)),
        ],
        BaseType::Bool
        | BaseType::Date
        | BaseType::DateTime
        | BaseType::Dict
        | BaseType::List
        | BaseType::Time => vec![(NULLABLE_KEY, ConstraintValue::Bool(false))],
    };
    ConstraintSchema {
        base_type,
        defaults,
    }
}

/// Looks up the schema for a base type.
pub fn get_schema(base_type: BaseType) -> &'static ConstraintSchema {
    CONSTRAINT_SCHEMAS
        .iter()
        .find(|schema| schema.base_type == base_type)
        .expect("every base type has a constraint schema")
}

/// Default constraint map for a base type, in table order.
pub fn defaults_for(base_type: BaseType) -> ConstraintMap {
    get_schema(base_type)
        .defaults
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

/// Whether `key` is configurable for `base_type`.
pub fn is_allowed(base_type: BaseType, key: &str) -> bool {
    get_schema(base_type).allowed_keys().any(|k| k == key)
}

/// Resolves a caller-supplied override bag against the defaults.
///
/// Starts from [`defaults_for`] and applies overrides for permitted keys
/// only, preserving table order. Unknown keys are dropped (debug-logged),
/// which upholds the invariant that a finalized constraint map never carries
/// a key outside its type's schema.
pub fn resolve(base_type: BaseType, overrides: &ConstraintMap) -> ConstraintMap {
    let mut resolved = defaults_for(base_type);
    for (key, value) in overrides {
        if resolved.contains_key(key.as_str()) {
            resolved.insert(key.clone(), value.clone());
        } else {
            tracing::debug!(%base_type, key = %key, "dropped constraint not in type schema");
        }
    }
    resolved
}
