//! Code generation: from a [`ModelSpec`](crate::model::ModelSpec) to Pydantic
//! class source text.
//!
//! The pipeline is a single-pass, stateless transform:
//!
//! ```text
//! ModelSpec → context preparation (Rust) → Tera rendering → source text
//! ```
//!
//! Rust-side preparation computes everything with semantics attached
//! (declared types, constraint argument lists, validator indices, example
//! kwargs, the example binding name); the embedded Tera template owns only
//! line layout. All quoting rules live in [`python`]; advisory checks live in
//! [`lint`].

pub mod lint;
pub mod python;

use crate::error::Result;
use crate::model::{FieldSpec, ModelSpec};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tera::Tera;

const MODEL_TEMPLATE_NAME: &str = "model.py.tera";
const MODEL_TEMPLATE: &str = include_str!("../../templates/model.py.tera");

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    // Generated Python must never be HTML-escaped.
    tera.autoescape_on(Vec::new());
    tera.add_raw_template(MODEL_TEMPLATE_NAME, MODEL_TEMPLATE)
        .expect("embedded model template parses");
    tera
});

/// Generation toggles. `Default` produces the full layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Emit the trailing `# Example Usage` construction statement.
    pub include_example: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_example: true,
        }
    }
}

#[derive(Serialize)]
struct FieldContext {
    name: String,
    declared_type: String,
    constraint_args: String,
    validators: Vec<ValidatorContext>,
}

#[derive(Serialize)]
struct ValidatorContext {
    index: usize,
    logic: String,
    message: String,
}

#[derive(Serialize)]
struct ExampleContext {
    binding: String,
    args: String,
}

fn field_context(field: &FieldSpec) -> FieldContext {
    FieldContext {
        name: field.name.clone(),
        declared_type: python::declared_type(field.base_type, field.nullable),
        constraint_args: python::constraint_args(&field.constraints),
        validators: field
            .custom_validations
            .iter()
            .enumerate()
            .map(|(i, validation)| ValidatorContext {
                // 1-based, local to the field, in submission order.
                index: i + 1,
                logic: validation.logic.clone(),
                message: validation.message.clone(),
            })
            .collect(),
    }
}

/// Generates class-definition source text for a model.
///
/// Emits the fixed import header, the class line, one `Field(...)`
/// declaration per field in insertion order, one validator block per custom
/// validation, and (by default) a trailing example-construction statement.
/// User-supplied logic, messages, and example values are embedded verbatim.
///
/// # Errors
/// Only template rendering can fail; malformed user text passes through.
pub fn generate(model: &ModelSpec, options: &GeneratorOptions) -> Result<String> {
    let fields: Vec<FieldContext> = model.fields.iter().map(field_context).collect();

    let mut context = tera::Context::new();
    context.insert("model_name", &model.name);
    context.insert("fields", &fields);
    context.insert("include_example", &options.include_example);
    context.insert(
        "example",
        &ExampleContext {
            binding: python::example_binding(&model.name),
            args: python::example_args(&model.fields),
        },
    );

    let rendered = TEMPLATES.render(MODEL_TEMPLATE_NAME, &context)?;
    tracing::debug!(
        model = %model.name,
        fields = model.fields.len(),
        bytes = rendered.len(),
        "model source generated"
    );
    Ok(rendered)
}
