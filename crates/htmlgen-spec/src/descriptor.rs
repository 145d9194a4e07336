//! Element and attribute descriptors.
//!
//! Descriptors hold `Cow<'static, _>` data so the built-in tables can be
//! `static` slices assembled by the `const fn` constructors below, while
//! tables read from disk own their strings.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::model::{
	AttributeCategory, AttributeScope, AttributeType, ContentCategory, Context, DisplayType,
	ElementType,
};

/// Classification of one HTML element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
	/// Tag name, unique within a table.
	pub name: Cow<'static, str>,
	/// Content categories the element belongs to.
	#[serde(default)]
	pub content_categories: Cow<'static, [ContentCategory]>,
	/// Default display behaviour.
	pub display_type: DisplayType,
	/// Content parsing model.
	pub element_type: ElementType,
	/// Parent contexts the element may appear in.
	#[serde(default)]
	pub valid_contexts: Cow<'static, [Context]>,
	/// Human-readable description, copied into generated docs.
	#[serde(default)]
	pub description: Cow<'static, str>,
}

impl ElementDescriptor {
	/// Returns `true` if the element belongs to `category`.
	pub fn has_category(&self, category: ContentCategory) -> bool {
		self.content_categories.contains(&category)
	}
}

/// Classification of one attribute under one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
	/// Wire-level attribute name. May contain `-` or the `*` wildcard.
	pub name: Cow<'static, str>,
	/// Functional categories.
	#[serde(default)]
	pub categories: Cow<'static, [AttributeCategory]>,
	/// Value type.
	#[serde(rename = "type")]
	pub value_type: AttributeType,
	/// Elements the attribute applies to.
	pub scope: AttributeScope,
	/// Permitted literals, non-empty exactly when `value_type` is
	/// [`AttributeType::Enum`].
	#[serde(default, skip_serializing_if = "EnumValues::is_empty")]
	pub enum_values: EnumValues,
	/// Human-readable description, copied into generated docs.
	#[serde(default)]
	pub description: Cow<'static, str>,
}

impl AttributeDescriptor {
	/// Returns `true` if the attribute belongs to `category`.
	pub fn has_category(&self, category: AttributeCategory) -> bool {
		self.categories.contains(&category)
	}

	/// Returns `true` for [`AttributeType::Enum`] attributes.
	pub fn is_enum(&self) -> bool {
		self.value_type == AttributeType::Enum
	}
}

/// Enumerated value domain of an attribute.
///
/// Values keep their declaration order, which is also the order of the
/// generated per-value factories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum EnumValues {
	/// Values from a compile-time table.
	Static(&'static [&'static str]),
	/// Values read at run time.
	Owned(Vec<String>),
}

impl EnumValues {
	/// Empty value set.
	pub const EMPTY: Self = Self::Static(&[]);

	/// Iterates over the values in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		let (borrowed, owned): (&[&str], &[String]) = match self {
			Self::Static(values) => (*values, Default::default()),
			Self::Owned(values) => (Default::default(), values.as_slice()),
		};
		borrowed
			.iter()
			.copied()
			.chain(owned.iter().map(String::as_str))
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Static(values) => values.len(),
			Self::Owned(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn contains(&self, value: &str) -> bool {
		self.iter().any(|candidate| candidate == value)
	}
}

impl Default for EnumValues {
	fn default() -> Self {
		Self::EMPTY
	}
}

impl From<Vec<String>> for EnumValues {
	fn from(values: Vec<String>) -> Self {
		Self::Owned(values)
	}
}

impl From<EnumValues> for Vec<String> {
	fn from(values: EnumValues) -> Self {
		match values {
			EnumValues::Static(values) => values.iter().map(|v| (*v).to_owned()).collect(),
			EnumValues::Owned(values) => values,
		}
	}
}

/// Builds a static element entry.
///
/// # Panics
///
/// Panics (at compile time when used in a `static`) if `name` is empty.
pub const fn element(
	name: &'static str,
	display_type: DisplayType,
	element_type: ElementType,
	content_categories: &'static [ContentCategory],
	valid_contexts: &'static [Context],
	description: &'static str,
) -> ElementDescriptor {
	assert!(!name.is_empty(), "element name must not be empty");
	ElementDescriptor {
		name: Cow::Borrowed(name),
		content_categories: Cow::Borrowed(content_categories),
		display_type,
		element_type,
		valid_contexts: Cow::Borrowed(valid_contexts),
		description: Cow::Borrowed(description),
	}
}

/// Builds a static non-enumerated attribute entry.
///
/// # Panics
///
/// Panics if `name` is empty or `value_type` is [`AttributeType::Enum`];
/// enumerated attributes go through [`enum_attribute`].
pub const fn attribute(
	name: &'static str,
	value_type: AttributeType,
	scope: AttributeScope,
	categories: &'static [AttributeCategory],
	description: &'static str,
) -> AttributeDescriptor {
	assert!(!name.is_empty(), "attribute name must not be empty");
	assert!(
		!matches!(value_type, AttributeType::Enum),
		"enumerated attributes must be declared with enum_attribute"
	);
	AttributeDescriptor {
		name: Cow::Borrowed(name),
		categories: Cow::Borrowed(categories),
		value_type,
		scope,
		enum_values: EnumValues::EMPTY,
		description: Cow::Borrowed(description),
	}
}

/// Builds a static enumerated attribute entry.
///
/// # Panics
///
/// Panics if `name` is empty or `values` is empty.
pub const fn enum_attribute(
	name: &'static str,
	scope: AttributeScope,
	categories: &'static [AttributeCategory],
	description: &'static str,
	values: &'static [&'static str],
) -> AttributeDescriptor {
	assert!(!name.is_empty(), "attribute name must not be empty");
	assert!(
		!values.is_empty(),
		"enumerated attribute must declare at least one value"
	);
	AttributeDescriptor {
		name: Cow::Borrowed(name),
		categories: Cow::Borrowed(categories),
		value_type: AttributeType::Enum,
		scope,
		enum_values: EnumValues::Static(values),
		description: Cow::Borrowed(description),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_enum_values_iterate_in_declaration_order() {
		let values = EnumValues::Static(&["ltr", "rtl", "auto"]);
		assert_eq!(values.iter().collect::<Vec<_>>(), vec!["ltr", "rtl", "auto"]);

		let owned = EnumValues::from(vec!["soft".to_string(), "hard".to_string()]);
		assert_eq!(owned.iter().collect::<Vec<_>>(), vec!["soft", "hard"]);
		assert_eq!(owned.len(), 2);
		assert!(owned.contains("hard"));
		assert!(!owned.contains("off"));
	}

	#[rstest]
	fn test_static_and_owned_values_serialize_alike() {
		let values = EnumValues::Static(&["get", "post"]);
		let json = serde_json::to_string(&values).unwrap();
		assert_eq!(json, r#"["get","post"]"#);
		let parsed: EnumValues = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed.iter().collect::<Vec<_>>(), vec!["get", "post"]);
	}

	#[rstest]
	fn test_attribute_descriptor_deserializes_from_json() {
		let json = r#"{
			"name": "method",
			"categories": ["FORM"],
			"type": "ENUM",
			"scope": "FORM_ELEMENTS",
			"enum_values": ["get", "post"],
			"description": "HTTP method"
		}"#;
		let descriptor: AttributeDescriptor = serde_json::from_str(json).unwrap();
		assert_eq!(descriptor.name, "method");
		assert!(descriptor.is_enum());
		assert!(descriptor.has_category(AttributeCategory::Form));
		assert_eq!(descriptor.enum_values.len(), 2);
	}

	#[rstest]
	fn test_element_descriptor_defaults_optional_sets() {
		let json = r#"{ "name": "x-widget", "display_type": "BLOCK", "element_type": "CONTAINER" }"#;
		let descriptor: ElementDescriptor = serde_json::from_str(json).unwrap();
		assert!(descriptor.content_categories.is_empty());
		assert!(descriptor.valid_contexts.is_empty());
		assert_eq!(descriptor.description, "");
	}

	#[rstest]
	fn test_const_constructors_borrow_static_data() {
		const HR: ElementDescriptor = element(
			"hr",
			DisplayType::Block,
			ElementType::Void,
			&[ContentCategory::Flow],
			&[Context::Flow],
			"Horizontal rule",
		);
		assert!(matches!(HR.name, Cow::Borrowed("hr")));
		assert!(HR.has_category(ContentCategory::Flow));
	}
}
