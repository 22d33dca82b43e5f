//! Domain types for interactively described schemas.
//!
//! A schema is a [`ModelSpec`]: a class name plus an ordered sequence of
//! [`FieldSpec`]s. Ordering is semantically meaningful everywhere in this
//! crate: field order determines declaration order in generated source, and
//! constraint-map iteration order determines `Field(...)` argument order.
//!
//! All types derive `Serialize`/`Deserialize` so a UI session can persist
//! and restore its working state, and `JsonSchema` so form frontends can
//! introspect the expected shape.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Constraint-bag key used by UIs to request `Optional[...]` wrapping.
///
/// Consumed by [`FieldSpec::from_parts`] and never emitted as a `Field(...)`
/// argument.
pub const NULLABLE_KEY: &str = "nullable";

// ============================================================================
// BaseType
// ============================================================================

/// The fixed set of declarable field types.
///
/// Display, `FromStr`, and serde all use the Python-side spelling
/// (`str`, `int`, `float`, `bool`, `date`, `datetime`, `dict`, `list`,
/// `time`), which is also exactly what appears in generated annotations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BaseType {
    Str,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    Dict,
    List,
    Time,
}

impl BaseType {
    /// The Python type name used in generated annotations.
    pub fn python_name(self) -> &'static str {
        self.into()
    }

    /// Whether example values of this type are emitted inside quotes.
    pub fn is_textual(self) -> bool {
        matches!(self, BaseType::Str)
    }
}

// ============================================================================
// Constraint values
// ============================================================================

/// A single constraint argument value.
///
/// Untagged on the wire so UI payloads stay plain JSON scalars
/// (`{"gt": 0, "nullable": false}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ConstraintValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl ConstraintValue {
    /// Converts a JSON scalar into a constraint value.
    ///
    /// Returns `None` for arrays, objects, and null; constraint bags carry
    /// scalars only.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(ConstraintValue::Bool(*b)),
            serde_json::Value::Number(n) if n.is_i64() => Some(ConstraintValue::Int(n.as_i64()?)),
            serde_json::Value::Number(n) => Some(ConstraintValue::Float(n.as_f64()?)),
            serde_json::Value::String(s) => Some(ConstraintValue::Str(s.clone())),
            _ => None,
        }
    }

    /// True for `Bool(true)`.
    pub fn is_truthy(&self) -> bool {
        matches!(self, ConstraintValue::Bool(true))
    }
}

impl From<i64> for ConstraintValue {
    fn from(v: i64) -> Self {
        ConstraintValue::Int(v)
    }
}

impl From<f64> for ConstraintValue {
    fn from(v: f64) -> Self {
        ConstraintValue::Float(v)
    }
}

impl From<bool> for ConstraintValue {
    fn from(v: bool) -> Self {
        ConstraintValue::Bool(v)
    }
}

impl From<&str> for ConstraintValue {
    fn from(v: &str) -> Self {
        ConstraintValue::Str(v.to_string())
    }
}

/// Ordered constraint-name to value mapping. Iteration order is the order
/// arguments are emitted in.
pub type ConstraintMap = IndexMap<String, ConstraintValue>;

// ============================================================================
// Custom validations
// ============================================================================

/// A user-authored validation rule: a boolean expression over `value` and the
/// message raised when it holds.
///
/// Both strings are trusted raw text from the user and are embedded in
/// generated source verbatim, never parsed or escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomValidation {
    pub logic: String,
    pub message: String,
}

impl CustomValidation {
    pub fn new(logic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            logic: logic.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// One described field: name, declared type, nullability, constraint bag,
/// example value, and ordered custom validations.
///
/// Name uniqueness within a model is NOT enforced; duplicates pass through
/// and produce duplicate declarations (see [`crate::codegen::lint`] for the
/// advisory check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    pub name: String,
    pub base_type: BaseType,
    /// When true the declared type is wrapped as `Optional[base]`.
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub constraints: ConstraintMap,
    /// Raw text used verbatim in the example-construction statement.
    #[serde(default)]
    pub example_value: String,
    #[serde(default)]
    pub custom_validations: Vec<CustomValidation>,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        base_type: BaseType,
        nullable: bool,
        constraints: ConstraintMap,
        example_value: impl Into<String>,
        custom_validations: Vec<CustomValidation>,
    ) -> Self {
        Self {
            name: name.into(),
            base_type,
            nullable,
            constraints,
            example_value: example_value.into(),
            custom_validations,
        }
    }

    /// Builds a field from the raw pieces a form UI collects.
    ///
    /// The constraint bag may carry an internal `nullable` entry; it is
    /// consumed here to compute the nullability flag and removed so it never
    /// reaches the emitted argument list. Order of the remaining entries is
    /// preserved.
    pub fn from_parts(
        name: impl Into<String>,
        base_type: BaseType,
        mut constraints: ConstraintMap,
        example_value: impl Into<String>,
        custom_validations: Vec<CustomValidation>,
    ) -> Self {
        let nullable = constraints
            .shift_remove(NULLABLE_KEY)
            .is_some_and(|v| v.is_truthy());
        Self::new(
            name,
            base_type,
            nullable,
            constraints,
            example_value,
            custom_validations,
        )
    }
}

// ============================================================================
// ModelSpec
// ============================================================================

/// A model name plus its ordered field sequence, the unit passed to
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl ModelSpec {
    /// Creates a model spec.
    ///
    /// # Errors
    /// Returns [`Error::EmptyModelName`] when the name is empty; the name is
    /// used verbatim as a class identifier.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyModelName);
        }
        Ok(Self { name, fields })
    }
}
