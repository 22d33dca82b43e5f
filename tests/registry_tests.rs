//! Registry operations and the full add → resolve → generate session flow.

use assert_matches::assert_matches;
use modelforge::{
    BaseType, ConstraintMap, ConstraintValue, Error, FieldSpec, GeneratorOptions, ModelSpec,
    generate, registry, resolve,
};

fn field(name: &str, base: BaseType) -> FieldSpec {
    FieldSpec::new(name, base, false, ConstraintMap::new(), "", vec![])
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn remove_length_invariants() {
    let mut fields = vec![field("a", BaseType::Str), field("b", BaseType::Int)];

    registry::remove(&mut fields, 99);
    assert_eq!(fields.len(), 2);

    registry::remove(&mut fields, 1);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "a");

    let mut empty: Vec<FieldSpec> = Vec::new();
    registry::remove(&mut empty, 0);
    assert!(empty.is_empty());
}

#[test]
fn update_faults_out_of_range_and_leaves_sequence_intact() {
    let mut fields = vec![field("a", BaseType::Str)];
    let before = fields.clone();

    let err = registry::update(&mut fields, 3, field("x", BaseType::Int)).unwrap_err();
    assert_matches!(err, Error::IndexOutOfBounds { index: 3, len: 1 });
    assert_eq!(fields, before);
}

#[test]
fn update_replaces_wholesale_at_position() {
    let mut fields = vec![
        field("a", BaseType::Str),
        field("b", BaseType::Int),
        field("c", BaseType::Bool),
    ];
    registry::update(&mut fields, 1, field("b2", BaseType::Float)).unwrap();
    assert_eq!(fields[1].name, "b2");
    assert_eq!(fields[1].base_type, BaseType::Float);
    assert_eq!(fields.len(), 3);
}

#[test]
fn session_flow_add_resolve_generate() -> anyhow::Result<()> {
    init_tracing();

    // What the UI collaborator does per submission: resolve the constraint
    // bag for the chosen type, finalize the field, append, regenerate.
    let mut fields: Vec<FieldSpec> = Vec::new();

    let mut overrides = ConstraintMap::new();
    overrides.insert("lt".to_string(), ConstraintValue::Int(150));
    let constraints = resolve(BaseType::Int, &overrides);
    registry::add(
        &mut fields,
        FieldSpec::from_parts("age", BaseType::Int, constraints, "30", vec![]),
    );

    let mut overrides = ConstraintMap::new();
    overrides.insert("nullable".to_string(), ConstraintValue::Bool(true));
    let constraints = resolve(BaseType::Str, &overrides);
    registry::add(
        &mut fields,
        FieldSpec::from_parts("nickname", BaseType::Str, constraints, "Al", vec![]),
    );

    let model = ModelSpec::new("User", fields)?;
    let source = generate(&model, &GeneratorOptions::default())?;

    assert!(source.contains("    age: int = Field(gt=0, lt=150)\n"));
    assert!(
        source.contains("    nickname: Optional[str] = Field(min_length=0, max_length=100)\n")
    );
    assert!(source.contains("user = User(age=30, nickname=\"Al\")"));
    Ok(())
}
