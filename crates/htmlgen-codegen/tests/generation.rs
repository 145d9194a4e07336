//! Integration tests for the generation pass
//!
//! Tests the full pipeline from classification tables to emitted source:
//! - Determinism of plans and emitted text
//! - Element overload coverage
//! - Attribute conflict disambiguation, boolean and enum families
//! - Exclusion of wildcard and event handler attributes
//! - Failure on colliding names and malformed loaded tables

use std::collections::BTreeSet;

use htmlgen_codegen::{
	Arg, CodegenError, Constructor, GenerationPlan, Generator, GeneratorConfig, ParamKind,
	RustEmitter, Source,
};
use htmlgen_spec::{
	AttributeDescriptor, AttributeScope, AttributeTable, ContentCategory, Context, DisplayType,
	ElementTable, ElementType, TableError, element,
};
use rstest::*;

#[fixture]
fn elements() -> ElementTable {
	ElementTable::builtin()
}

#[fixture]
fn attributes() -> AttributeTable {
	AttributeTable::builtin()
}

fn generate(elements: &ElementTable, attributes: &AttributeTable) -> GenerationPlan {
	Generator::new(elements, attributes).generate().unwrap()
}

// ============================================================================
// Determinism
// ============================================================================

/// **Test Intent**: Two runs over the same tables yield the same plan and the
/// same emitted bytes
#[rstest]
fn test_generation_is_deterministic(elements: ElementTable, attributes: AttributeTable) {
	let first = generate(&elements, &attributes);
	let second = generate(&elements, &attributes);
	assert_eq!(first, second);

	let emitter = RustEmitter::new(GeneratorConfig::default());
	let first = emitter.emit(&first).unwrap();
	let second = emitter.emit(&second).unwrap();
	assert_eq!(first.files.len(), second.files.len());
	for (a, b) in first.files.iter().zip(&second.files) {
		assert_eq!(a.path, b.path);
		assert_eq!(a.content, b.content);
	}
}

/// **Test Intent**: Reordering the attribute table does not change which
/// accessors exist
#[rstest]
#[case::reversed(|mut d: Vec<_>| { d.reverse(); d })]
#[case::rotated(|mut d: Vec<_>| { d.rotate_left(37); d })]
fn test_attribute_order_does_not_change_accessor_set(
	elements: ElementTable,
	attributes: AttributeTable,
	#[case] reorder: fn(Vec<AttributeDescriptor>) -> Vec<AttributeDescriptor>,
) {
	let shuffled = AttributeTable::new(reorder(attributes.iter().cloned().collect())).unwrap();

	let signatures = |plan: &GenerationPlan| -> BTreeSet<String> {
		plan.attributes
			.iter()
			.map(|accessor| accessor.signature().to_string())
			.collect()
	};
	let original = generate(&elements, &attributes);
	let reordered = generate(&elements, &shuffled);

	assert_eq!(signatures(&original), signatures(&reordered));
	assert_eq!(original.conflicting_names, reordered.conflicting_names);
}

// ============================================================================
// Elements
// ============================================================================

/// **Test Intent**: Every element yields four (container) or two (void)
/// overloads
#[rstest]
fn test_every_element_is_covered(elements: ElementTable, attributes: AttributeTable) {
	let plan = generate(&elements, &attributes);
	for descriptor in &elements {
		let expected = match descriptor.element_type {
			ElementType::Void => 2,
			ElementType::Container | ElementType::RawText | ElementType::EscapableRawText => 4,
		};
		let name = htmlgen_codegen::to_identifier(&descriptor.name);
		assert_eq!(
			plan.element_overloads(&name).count(),
			expected,
			"overloads of {}",
			descriptor.name
		);
	}
}

/// **Test Intent**: `div` yields four block container overloads differing
/// only in parameter shape
#[rstest]
fn test_div_family() {
	let elements = ElementTable::new([element(
		"div",
		DisplayType::Block,
		ElementType::Container,
		&[ContentCategory::Flow],
		&[Context::Flow],
		"",
	)])
	.unwrap();
	let plan = generate(&elements, &AttributeTable::new([]).unwrap());

	let div: Vec<_> = plan.element_overloads("div").collect();
	assert_eq!(div.len(), 4);
	let shapes: Vec<_> = div.iter().map(|a| a.shape()).collect();
	assert_eq!(
		shapes,
		vec![
			vec![ParamKind::VariadicFragments],
			vec![ParamKind::IterableFragments],
			vec![ParamKind::VariadicText],
			vec![],
		]
	);
	for accessor in div {
		assert_eq!(accessor.body.constructor, Constructor::BlockContainer);
		assert_eq!(accessor.body.literal_name(), Some("div"));
	}
}

/// **Test Intent**: `br` is an inline void element with two overloads
#[rstest]
fn test_br_family(elements: ElementTable, attributes: AttributeTable) {
	let plan = generate(&elements, &attributes);
	let br: Vec<_> = plan.element_overloads("br").collect();
	assert_eq!(br.len(), 2);
	assert_eq!(br[0].shape(), vec![ParamKind::VariadicAttributes]);
	assert!(br[1].params.is_empty());
	for accessor in br {
		assert_eq!(accessor.body.constructor, Constructor::InlineVoidElement);
		assert_eq!(accessor.body.literal_name(), Some("br"));
	}
}

/// **Test Intent**: Names colliding after folding abort generation and name
/// both sources
#[rstest]
fn test_colliding_element_names_abort() {
	let elements = ElementTable::new([
		element("h-1", DisplayType::Block, ElementType::Container, &[], &[], ""),
		element("h1", DisplayType::Block, ElementType::Container, &[], &[], ""),
	])
	.unwrap();
	let error = Generator::new(&elements, &AttributeTable::new([]).unwrap())
		.generate()
		.unwrap_err();

	let message = error.to_string();
	assert!(matches!(error, CodegenError::DuplicateAccessor { .. }));
	assert!(message.contains("element 'h-1'"));
	assert!(message.contains("element 'h1'"));
}

// ============================================================================
// Attributes
// ============================================================================

/// **Test Intent**: `type` under form and link scopes gets two general
/// accessors and independent factory sets
#[rstest]
fn test_type_conflict_is_disambiguated(elements: ElementTable, attributes: AttributeTable) {
	let plan = generate(&elements, &attributes);
	assert_eq!(plan.conflicting_names, vec!["size", "type"]);

	let form: Vec<_> = plan.attribute_overloads("typeForm").collect();
	let link: Vec<_> = plan.attribute_overloads("typeLink").collect();
	assert_eq!(form.len(), 1);
	assert_eq!(link.len(), 1);
	assert_eq!(
		form[0].body.args.last(),
		Some(&Arg::Scope(AttributeScope::FormElements))
	);
	assert_eq!(
		link[0].body.args.last(),
		Some(&Arg::Scope(AttributeScope::LinkElements))
	);
	assert!(plan.attribute_overloads("type").next().is_none());

	for scope in [AttributeScope::FormElements, AttributeScope::LinkElements] {
		let descriptor = attributes.get("type", scope).unwrap();
		let factories: Vec<_> = plan
			.attributes
			.iter()
			.filter(|a| {
				a.params.is_empty()
					&& a.source
						== Source::Attribute {
							name: "type".into(),
							scope,
						}
			})
			.collect();
		assert_eq!(factories.len(), descriptor.enum_values.len());
		for factory in factories {
			let Some(Arg::Literal(value)) = factory.body.args.get(1) else {
				panic!("factory {} has no value literal", factory.name);
			};
			assert!(descriptor.enum_values.contains(value));
		}
	}
}

/// **Test Intent**: A boolean attribute yields exactly a present and a
/// conditional accessor over the same literal
#[rstest]
fn test_disabled_boolean_shape(elements: ElementTable, attributes: AttributeTable) {
	let plan = generate(&elements, &attributes);
	let disabled: Vec<_> = plan.attribute_overloads("disabled").collect();
	assert_eq!(disabled.len(), 2);
	assert!(disabled[0].params.is_empty());
	assert_eq!(disabled[1].shape(), vec![ParamKind::Boolean]);
	for accessor in disabled {
		assert_eq!(accessor.body.literal_name(), Some("disabled"));
	}
}

/// **Test Intent**: The convenience default of `dir` is `ltr` on every run
#[rstest]
fn test_dir_default_is_stable(elements: ElementTable, attributes: AttributeTable) {
	for _ in 0..3 {
		let plan = generate(&elements, &attributes);
		let convenience = plan
			.attribute_overloads("dir")
			.find(|a| a.params.is_empty())
			.unwrap();
		assert_eq!(convenience.body.args[1], Arg::Literal("ltr".into()));
	}
}

/// **Test Intent**: Wildcard and event handler entries are only reachable
/// through the fixed accessors
#[rstest]
#[case("data-*")]
#[case("onclick")]
fn test_open_ended_entries_are_excluded(
	elements: ElementTable,
	attributes: AttributeTable,
	#[case] name: &str,
) {
	let plan = generate(&elements, &attributes);
	assert!(plan.attributes.iter().all(|a| {
		a.body.literal_name() != Some(name)
			&& !matches!(&a.source, Source::Attribute { name: n, .. } if n == name)
	}));
	assert!(plan.attribute_overloads("onclick").next().is_none());
	assert!(plan.attribute_overloads("data").next().is_some());
	assert!(plan.attribute_overloads("event").next().is_some());
}

/// **Test Intent**: Event-prefixed names are excluded whatever their value
/// type or categories
#[rstest]
fn test_loaded_event_prefixed_entries_are_excluded() {
	let json = r#"{ "attributes": [
		{ "name": "onclick", "type": "STRING", "scope": "UNIVERSAL" },
		{ "name": "onmouseover", "type": "URL", "scope": "UNIVERSAL", "categories": ["GLOBAL"] },
		{ "name": "open", "type": "BOOLEAN", "scope": "INTERACTIVE_ELEMENTS" }
	] }"#;
	let attributes = AttributeTable::from_json(json).unwrap();
	let plan = generate(&ElementTable::new([]).unwrap(), &attributes);

	let names: Vec<_> = plan.attributes.iter().map(|a| a.name.as_str()).collect();
	assert_eq!(names, vec!["open", "open", "data", "event", "xmlns"]);
}

/// **Test Intent**: A loaded ENUM entry without values is rejected before
/// generation
#[rstest]
fn test_loaded_enum_without_values_is_rejected() {
	let json = r#"{ "attributes": [
		{ "name": "dir", "type": "ENUM", "scope": "UNIVERSAL" }
	] }"#;
	let error = AttributeTable::from_json(json).unwrap_err();
	assert!(matches!(error, TableError::MissingEnumValues { ref name, .. } if name == "dir"));
}

// ============================================================================
// Emission
// ============================================================================

/// **Test Intent**: Emitted Rust files cover every accessor and parse back
#[rstest]
fn test_emitted_files_parse(elements: ElementTable, attributes: AttributeTable) {
	let plan = generate(&elements, &attributes);
	let output = RustEmitter::new(GeneratorConfig::default())
		.emit(&plan)
		.unwrap();

	for file in &output.files {
		assert!(syn::parse_file(&file.content).is_ok(), "{}", file.path.display());
	}

	let names = htmlgen_codegen::rust_function_names(&plan.elements).unwrap();
	let source = &output.file("elements.rs").unwrap().content;
	for name in names {
		assert!(source.contains(&format!("pub fn {}(", name)), "missing {name}");
	}
}
