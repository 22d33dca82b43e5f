//! Python surface-syntax composition rules.
//!
//! Every quoting, wrapping, and repr decision the generator makes lives in
//! this one module so the rules stay centralized and independently testable
//! instead of being re-derived at each emission site. Nothing here escapes or
//! validates user text; generation is trusted textual templating by design.

use crate::model::{BaseType, ConstraintMap, ConstraintValue, FieldSpec, NULLABLE_KEY};

/// Renders the annotation for a field: the bare Python type name, or
/// `Optional[...]` when the field is nullable. Pure string composition.
pub fn declared_type(base_type: BaseType, nullable: bool) -> String {
    let base = base_type.python_name();
    if nullable {
        format!("Optional[{base}]")
    } else {
        base.to_string()
    }
}

/// Python `repr` of a constraint value, as it appears inside `Field(...)`.
///
/// Whole floats keep a trailing `.0` to match Python repr; strings take
/// single quotes with no escaping.
pub fn py_repr(value: &ConstraintValue) -> String {
    match value {
        ConstraintValue::Int(i) => i.to_string(),
        ConstraintValue::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.1}"),
        ConstraintValue::Float(f) => f.to_string(),
        ConstraintValue::Bool(true) => "True".to_string(),
        ConstraintValue::Bool(false) => "False".to_string(),
        ConstraintValue::Str(s) => format!("'{s}'"),
    }
}

/// Comma-joined `key=repr(value)` argument list in map iteration order,
/// excluding the internal `nullable` entry.
pub fn constraint_args(constraints: &ConstraintMap) -> String {
    constraints
        .iter()
        .filter(|(key, _)| key.as_str() != NULLABLE_KEY)
        .map(|(key, value)| format!("{key}={}", py_repr(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One example-construction keyword argument.
///
/// String-typed fields get the example value double-quoted; every other type
/// embeds it raw, so a non-numeric example for a numeric field comes out
/// syntactically present but possibly non-evaluating. Accepted behavior.
/// Quoting follows the base type, so nullable strings are still quoted.
pub fn example_kwarg(field: &FieldSpec) -> String {
    if field.base_type.is_textual() {
        format!("{}=\"{}\"", field.name, field.example_value)
    } else {
        format!("{}={}", field.name, field.example_value)
    }
}

/// Comma-joined example kwargs in declaration order.
pub fn example_args(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(example_kwarg)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Variable name for the example statement: the model name lowercased with
/// the literal substring `model` stripped (`UserModel` becomes `user`).
pub fn example_binding(model_name: &str) -> String {
    model_name.to_lowercase().replace("model", "")
}

/// Suggested name for a download artifact holding the generated source.
pub fn suggested_filename(model_name: &str) -> String {
    format!("{model_name}.py")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_type_wraps_optional() {
        assert_eq!(declared_type(BaseType::Int, false), "int");
        assert_eq!(declared_type(BaseType::Int, true), "Optional[int]");
        assert_eq!(declared_type(BaseType::DateTime, true), "Optional[datetime]");
    }

    #[test]
    fn py_repr_matches_python() {
        assert_eq!(py_repr(&ConstraintValue::Int(0)), "0");
        assert_eq!(py_repr(&ConstraintValue::Int(-5)), "-5");
        assert_eq!(py_repr(&ConstraintValue::Float(2.0)), "2.0");
        assert_eq!(py_repr(&ConstraintValue::Float(2.5)), "2.5");
        assert_eq!(py_repr(&ConstraintValue::Bool(true)), "True");
        assert_eq!(py_repr(&ConstraintValue::Bool(false)), "False");
        assert_eq!(py_repr(&ConstraintValue::Str("abc".into())), "'abc'");
    }

    #[test]
    fn constraint_args_skip_nullable_and_keep_order() {
        let mut constraints = ConstraintMap::new();
        constraints.insert("gt".to_string(), ConstraintValue::Int(0));
        constraints.insert(NULLABLE_KEY.to_string(), ConstraintValue::Bool(true));
        constraints.insert("lt".to_string(), ConstraintValue::Int(150));
        assert_eq!(constraint_args(&constraints), "gt=0, lt=150");
    }

    #[test]
    fn constraint_args_empty_map() {
        assert_eq!(constraint_args(&ConstraintMap::new()), "");
    }

    #[test]
    fn example_kwarg_quotes_strings_only() {
        let string_field =
            FieldSpec::new("name", BaseType::Str, false, ConstraintMap::new(), "Alice", vec![]);
        assert_eq!(example_kwarg(&string_field), "name=\"Alice\"");

        let int_field =
            FieldSpec::new("age", BaseType::Int, false, ConstraintMap::new(), "30", vec![]);
        assert_eq!(example_kwarg(&int_field), "age=30");
    }

    #[test]
    fn nullable_string_still_quoted() {
        let field =
            FieldSpec::new("nick", BaseType::Str, true, ConstraintMap::new(), "Al", vec![]);
        assert_eq!(example_kwarg(&field), "nick=\"Al\"");
    }

    #[test]
    fn binding_strips_model_substring() {
        assert_eq!(example_binding("User"), "user");
        assert_eq!(example_binding("UserModel"), "user");
        assert_eq!(example_binding("ModelModel"), "");
    }

    #[test]
    fn filename_suggestion() {
        assert_eq!(suggested_filename("User"), "User.py");
    }
}
