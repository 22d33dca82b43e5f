pub mod codegen;
pub mod constraints;
pub mod error;
pub mod model;
pub mod registry;

pub use codegen::lint::{LintIssue, LintReport, LintSeverity, lint_model};
pub use codegen::python::suggested_filename;
pub use codegen::{GeneratorOptions, generate};
pub use constraints::{defaults_for, resolve};
pub use error::{Error, Result};
pub use model::{
    BaseType, ConstraintMap, ConstraintValue, CustomValidation, FieldSpec, ModelSpec, NULLABLE_KEY,
};
