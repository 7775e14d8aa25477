//! Integration tests for out-of-band signature overrides.

use jbind_common::{DiagnosticCategory, Visibility, diagnostic_codes};
use jbind_sema::{
    BindingTrace, ClassKind, ClassRegistryTransformer, ClassSymbol, ConstructorDescriptor,
    ConstructorResolver, SemanticType, SyntaxKey, TypeParameter,
};
use jbind_syntax::{
    AnnotationSyntax, ClassSyntax, ConstructorSyntax, CtorId, ParamSyntax, PrimitiveKind,
    SyntaxArena, TypeSyntax,
};
use std::sync::Arc;

fn transformer() -> ClassRegistryTransformer {
    let mut t = ClassRegistryTransformer::new();
    t.register("java.lang.String");
    t.register("java.util.List");
    t
}

/// One class with one declared constructor `(raw: String)` carrying the
/// given annotations.
fn class_with_ctor(
    arena: &mut SyntaxArena,
    annotations: Vec<AnnotationSyntax>,
    type_parameters: Vec<TypeParameter>,
) -> (Arc<ClassSymbol>, CtorId) {
    let mut ctor = ConstructorSyntax::new(vec![ParamSyntax::new(
        "raw",
        TypeSyntax::named("String"),
    )]);
    ctor.annotations = annotations;
    let ctor_id = arena.add_constructor(ctor);
    let mut syntax = ClassSyntax::new("p.C");
    for param in &type_parameters {
        syntax.type_parameters.push(param.name.clone());
    }
    syntax.constructors.push(ctor_id);
    let class_id = arena.add_class(syntax);
    let class = ClassSymbol::new(
        class_id,
        "p.C",
        ClassKind::Class,
        type_parameters,
        Visibility::Public,
    );
    (class, ctor_id)
}

fn resolve(
    arena: &SyntaxArena,
    class: &Arc<ClassSymbol>,
    transformer: &ClassRegistryTransformer,
    trace: &mut BindingTrace,
) -> Vec<Arc<ConstructorDescriptor>> {
    ConstructorResolver::new(arena, transformer, trace)
        .resolve_constructors(class)
        .expect("resolution succeeds")
}

#[test]
fn without_override_the_inferred_signature_is_kept() {
    let mut arena = SyntaxArena::new();
    let (class, ctor_id) = class_with_ctor(&mut arena, vec![], vec![]);
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let constructors = resolve(&arena, &class, &transformer, &mut trace);
    assert_eq!(constructors[0].value_parameters.len(), 1);
    assert_eq!(constructors[0].value_parameters[0].name, "raw");
    assert!(
        trace
            .signature_error(SyntaxKey::Constructor(ctor_id))
            .is_none()
    );
}

#[test]
fn valid_override_replaces_the_inferred_parameter_list() {
    let mut arena = SyntaxArena::new();
    let (class, _) = class_with_ctor(
        &mut arena,
        vec![AnnotationSyntax::SignatureOverride(
            "(count: int, items: String...)".to_string(),
        )],
        vec![],
    );
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let constructors = resolve(&arena, &class, &transformer, &mut trace);
    let params = &constructors[0].value_parameters;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "count");
    assert_eq!(params[0].ty, SemanticType::Primitive(PrimitiveKind::Int));
    assert_eq!(params[0].index, 0);
    assert_eq!(params[1].name, "items");
    assert_eq!(
        params[1].vararg_element,
        Some(SemanticType::class("java.lang.String"))
    );
    assert_eq!(params[1].index, 1);
    assert_eq!(trace.signature_error_count(), 0);
}

#[test]
fn override_resolves_names_under_the_class_scope() {
    let mut arena = SyntaxArena::new();
    let (class, _) = class_with_ctor(
        &mut arena,
        vec![AnnotationSyntax::SignatureOverride(
            "(value: T)".to_string(),
        )],
        vec![TypeParameter::new("T", 0)],
    );
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let constructors = resolve(&arena, &class, &transformer, &mut trace);
    assert_eq!(
        constructors[0].value_parameters[0].ty,
        SemanticType::TypeVar(TypeParameter::new("T", 0))
    );
}

#[test]
fn malformed_override_keeps_inferred_signature_and_records_one_diagnostic() {
    let mut arena = SyntaxArena::new();
    let (class, ctor_id) = class_with_ctor(
        &mut arena,
        vec![AnnotationSyntax::SignatureOverride(
            "(count int".to_string(),
        )],
        vec![],
    );
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let constructors = resolve(&arena, &class, &transformer, &mut trace);
    // The inferred signature survives.
    assert_eq!(constructors[0].value_parameters.len(), 1);
    assert_eq!(constructors[0].value_parameters[0].name, "raw");

    let diagnostic = trace
        .signature_error(SyntaxKey::Constructor(ctor_id))
        .expect("diagnostic recorded");
    assert_eq!(diagnostic.category, DiagnosticCategory::Error);
    assert_eq!(
        diagnostic.code,
        diagnostic_codes::MALFORMED_SIGNATURE_OVERRIDE
    );
    assert_eq!(trace.signature_error_count(), 1);
}

#[test]
fn override_with_unresolvable_type_is_non_fatal() {
    let mut arena = SyntaxArena::new();
    let (class, ctor_id) = class_with_ctor(
        &mut arena,
        vec![AnnotationSyntax::SignatureOverride(
            "(x: NotOnClasspath)".to_string(),
        )],
        vec![],
    );
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let constructors = resolve(&arena, &class, &transformer, &mut trace);
    assert_eq!(constructors[0].value_parameters[0].name, "raw");
    assert!(
        trace
            .signature_error(SyntaxKey::Constructor(ctor_id))
            .is_some()
    );
}

#[test]
fn failed_override_does_not_re_record_on_cached_resolution() {
    let mut arena = SyntaxArena::new();
    let (class, _) = class_with_ctor(
        &mut arena,
        vec![AnnotationSyntax::SignatureOverride("garbage".to_string())],
        vec![],
    );
    let transformer = transformer();
    let mut trace = BindingTrace::new();

    let first = resolve(&arena, &class, &transformer, &mut trace);
    assert_eq!(trace.signature_error_count(), 1);
    let second = resolve(&arena, &class, &transformer, &mut trace);
    // Cached descriptor reused; the override is not consulted again.
    assert!(Arc::ptr_eq(&first[0], &second[0]));
    assert_eq!(trace.signature_error_count(), 1);
}
