//! Element accessor generation.

use htmlgen_spec::{ContentCategory, DisplayType, ElementDescriptor, ElementType};
use tracing::trace;

use crate::error::Result;
use crate::ir::{Accessor, Arg, Body, Constructor, Param, ParamKind, Source};
use crate::naming::resolve_identifier;

/// Void elements that render as blocks.
pub const BLOCK_VOID_ELEMENTS: &[&str] = &["hr", "meta", "link", "base"];

const FRAGMENTS: Param = Param::new("children", ParamKind::VariadicFragments);
const ITERABLE_FRAGMENTS: Param = Param::new("children", ParamKind::IterableFragments);
const TEXT: Param = Param::new("text", ParamKind::VariadicText);
const ATTRIBUTES: Param = Param::new("attributes", ParamKind::VariadicAttributes);

/// Overload shapes of container elements, in emission order.
const CONTAINER_SHAPES: &[Option<Param>] = &[
	Some(FRAGMENTS),
	Some(ITERABLE_FRAGMENTS),
	Some(TEXT),
	None,
];

/// Overload shapes of void elements, in emission order.
const VOID_SHAPES: &[Option<Param>] = &[Some(ATTRIBUTES), None];

/// Constructor family of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementFamily {
	BlockContainer,
	InlineContainer,
	BlockVoid,
	InlineVoid,
}

impl ElementFamily {
	pub fn classify(descriptor: &ElementDescriptor) -> Self {
		match descriptor.element_type {
			ElementType::Container | ElementType::RawText | ElementType::EscapableRawText => {
				if is_phrasing(descriptor) {
					Self::InlineContainer
				} else {
					Self::BlockContainer
				}
			}
			ElementType::Void => {
				if BLOCK_VOID_ELEMENTS.contains(&descriptor.name.as_ref()) {
					Self::BlockVoid
				} else {
					Self::InlineVoid
				}
			}
		}
	}

	pub const fn constructor(self) -> Constructor {
		match self {
			Self::BlockContainer => Constructor::BlockContainer,
			Self::InlineContainer => Constructor::InlineContainer,
			Self::BlockVoid => Constructor::BlockVoidElement,
			Self::InlineVoid => Constructor::InlineVoidElement,
		}
	}

	pub const fn is_container(self) -> bool {
		matches!(self, Self::BlockContainer | Self::InlineContainer)
	}

	fn shapes(self) -> &'static [Option<Param>] {
		if self.is_container() {
			CONTAINER_SHAPES
		} else {
			VOID_SHAPES
		}
	}

	/// Number of accessors generated per element of this family.
	pub fn overload_count(self) -> usize {
		self.shapes().len()
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::BlockContainer => "block container",
			Self::InlineContainer => "inline container",
			Self::BlockVoid => "block void",
			Self::InlineVoid => "inline void",
		}
	}
}

/// An element flows inline if it is phrasing content or displays inline.
pub fn is_phrasing(descriptor: &ElementDescriptor) -> bool {
	descriptor.has_category(ContentCategory::Phrasing)
		|| descriptor.display_type == DisplayType::Inline
}

/// Builds the overload set of one element.
///
/// Containers get four overloads (fragments, iterable, text, empty) and void
/// elements two (attributes, empty). All of them call the same constructor
/// with the tag name.
pub fn generate_element_accessors(descriptor: &ElementDescriptor) -> Result<Vec<Accessor>> {
	let name = resolve_identifier(&descriptor.name)?;
	let family = ElementFamily::classify(descriptor);
	trace!(element = %descriptor.name, family = family.as_str(), "classified element");

	let accessors = family
		.shapes()
		.iter()
		.map(|shape| {
			let mut args = vec![Arg::Literal(descriptor.name.to_string())];
			let mut params = Vec::new();
			if let Some(param) = shape {
				args.push(Arg::Param(param.name));
				params.push(*param);
			}
			Accessor::new(
				name.clone(),
				params,
				Body::new(family.constructor(), args),
				element_doc(descriptor, shape.map(|param| param.kind)),
				Source::Element(descriptor.name.to_string()),
			)
		})
		.collect();
	Ok(accessors)
}

fn element_doc(descriptor: &ElementDescriptor, shape: Option<ParamKind>) -> String {
	let summary = if descriptor.description.is_empty() {
		format!("`<{}>` element", descriptor.name)
	} else {
		format!("{} (`<{}>`)", descriptor.description, descriptor.name)
	};
	let detail = match shape {
		Some(ParamKind::VariadicFragments) => "with the given children.",
		Some(ParamKind::IterableFragments) => "with children taken from an iterator.",
		Some(ParamKind::VariadicText) => "with text children.",
		Some(ParamKind::VariadicAttributes) => "with the given attributes.",
		Some(ParamKind::String | ParamKind::Boolean) | None => "without content.",
	};
	format!("{} {}", summary, detail)
}

#[cfg(test)]
mod tests {
	use super::*;
	use htmlgen_spec::{ElementTable, element};
	use rstest::rstest;

	fn builtin(name: &str) -> ElementDescriptor {
		ElementTable::builtin().get(name).cloned().unwrap()
	}

	#[rstest]
	#[case("div", ElementFamily::BlockContainer)]
	#[case("span", ElementFamily::InlineContainer)]
	#[case("button", ElementFamily::InlineContainer)]
	#[case("script", ElementFamily::InlineContainer)]
	#[case("style", ElementFamily::BlockContainer)]
	#[case("rt", ElementFamily::InlineContainer)]
	#[case("hr", ElementFamily::BlockVoid)]
	#[case("meta", ElementFamily::BlockVoid)]
	#[case("link", ElementFamily::BlockVoid)]
	#[case("br", ElementFamily::InlineVoid)]
	#[case("img", ElementFamily::InlineVoid)]
	#[case("col", ElementFamily::InlineVoid)]
	fn test_classify_builtin(#[case] name: &str, #[case] family: ElementFamily) {
		assert_eq!(ElementFamily::classify(&builtin(name)), family);
	}

	#[rstest]
	fn test_div_overloads() {
		let accessors = generate_element_accessors(&builtin("div")).unwrap();
		assert_eq!(accessors.len(), 4);
		for accessor in &accessors {
			assert_eq!(accessor.name, "div");
			assert_eq!(accessor.body.constructor, Constructor::BlockContainer);
			assert_eq!(accessor.body.literal_name(), Some("div"));
		}
		let shapes: Vec<_> = accessors.iter().map(Accessor::shape).collect();
		assert_eq!(
			shapes,
			vec![
				vec![ParamKind::VariadicFragments],
				vec![ParamKind::IterableFragments],
				vec![ParamKind::VariadicText],
				vec![],
			]
		);
	}

	#[rstest]
	fn test_br_overloads() {
		let accessors = generate_element_accessors(&builtin("br")).unwrap();
		assert_eq!(accessors.len(), 2);
		assert!(accessors.iter().all(|a| a.name == "br"
			&& a.body.constructor == Constructor::InlineVoidElement
			&& a.body.literal_name() == Some("br")));
		assert_eq!(accessors[0].shape(), vec![ParamKind::VariadicAttributes]);
		assert!(accessors[1].params.is_empty());
	}

	#[rstest]
	fn test_inline_display_without_phrasing_category_is_inline() {
		let descriptor = element("x-chip", DisplayType::Inline, ElementType::Container, &[], &[], "");
		assert!(is_phrasing(&descriptor));
		let accessors = generate_element_accessors(&descriptor).unwrap();
		assert_eq!(accessors[0].name, "xChip");
		assert_eq!(accessors[0].body.constructor, Constructor::InlineContainer);
	}

	#[rstest]
	fn test_unresolvable_element_name_fails() {
		let descriptor = element("--", DisplayType::Block, ElementType::Container, &[], &[], "");
		assert!(generate_element_accessors(&descriptor).is_err());
	}

	#[rstest]
	fn test_doc_mentions_description() {
		let accessors = generate_element_accessors(&builtin("p")).unwrap();
		assert_eq!(accessors[0].doc, "Paragraph (`<p>`) with the given children.");
		assert_eq!(accessors[3].doc, "Paragraph (`<p>`) without content.");
	}
}
