//! Name-keyed metadata lookups.
//!
//! Lookups never fail: an unknown name yields an empty slice or `None`.
//! The free functions query the built-in tables through lazily built,
//! immutable indexes; [`MetadataIndex`] answers the same queries for any
//! validated table pair.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::descriptor::{AttributeDescriptor, ElementDescriptor};
use crate::model::{AttributeScope, ContentCategory, Context, DisplayType, ElementType};
use crate::table::{AttributeTable, ElementTable};

static BUILTIN_ELEMENTS: Lazy<ElementTable> = Lazy::new(ElementTable::builtin);
static BUILTIN_ATTRIBUTES: Lazy<AttributeTable> = Lazy::new(AttributeTable::builtin);
static BUILTIN_INDEX: Lazy<MetadataIndex<'static>> =
	Lazy::new(|| MetadataIndex::new(&BUILTIN_ELEMENTS, &BUILTIN_ATTRIBUTES));

/// Read-only index over an element table and an attribute table.
#[derive(Debug, Clone)]
pub struct MetadataIndex<'t> {
	elements: HashMap<&'t str, &'t ElementDescriptor>,
	attributes: HashMap<&'t str, Vec<&'t AttributeDescriptor>>,
}

impl<'t> MetadataIndex<'t> {
	pub fn new(elements: &'t ElementTable, attributes: &'t AttributeTable) -> Self {
		let elements = elements.iter().map(|d| (d.name.as_ref(), d)).collect();
		let mut by_name: HashMap<&'t str, Vec<&'t AttributeDescriptor>> = HashMap::new();
		for descriptor in attributes {
			by_name
				.entry(descriptor.name.as_ref())
				.or_default()
				.push(descriptor);
		}
		Self {
			elements,
			attributes: by_name,
		}
	}

	/// Returns the element descriptor for `name`.
	pub fn element(&self, name: &str) -> Option<&'t ElementDescriptor> {
		self.elements.get(name).copied()
	}

	pub fn content_categories_of(&self, name: &str) -> &'t [ContentCategory] {
		self.element(name)
			.map(|d| d.content_categories.as_ref())
			.unwrap_or_default()
	}

	pub fn display_type_of(&self, name: &str) -> Option<DisplayType> {
		self.element(name).map(|d| d.display_type)
	}

	pub fn element_type_of(&self, name: &str) -> Option<ElementType> {
		self.element(name).map(|d| d.element_type)
	}

	pub fn valid_contexts_of(&self, name: &str) -> &'t [Context] {
		self.element(name)
			.map(|d| d.valid_contexts.as_ref())
			.unwrap_or_default()
	}

	/// Scopes under which attribute `name` is registered, in table order.
	pub fn attribute_scopes_of(&self, name: &str) -> Vec<AttributeScope> {
		self.attributes
			.get(name)
			.map(|variants| variants.iter().map(|d| d.scope).collect())
			.unwrap_or_default()
	}

	pub fn attribute_of(&self, name: &str, scope: AttributeScope) -> Option<&'t AttributeDescriptor> {
		self.attributes
			.get(name)?
			.iter()
			.find(|d| d.scope == scope)
			.copied()
	}
}

/// Content categories of a built-in element.
pub fn content_categories_of(name: &str) -> &'static [ContentCategory] {
	BUILTIN_INDEX.content_categories_of(name)
}

/// Display type of a built-in element.
pub fn display_type_of(name: &str) -> Option<DisplayType> {
	BUILTIN_INDEX.display_type_of(name)
}

/// Element type of a built-in element.
pub fn element_type_of(name: &str) -> Option<ElementType> {
	BUILTIN_INDEX.element_type_of(name)
}

/// Parent contexts of a built-in element.
pub fn valid_contexts_of(name: &str) -> &'static [Context] {
	BUILTIN_INDEX.valid_contexts_of(name)
}

/// Scopes under which a built-in attribute is registered.
pub fn attribute_scopes_of(name: &str) -> Vec<AttributeScope> {
	BUILTIN_INDEX.attribute_scopes_of(name)
}

/// Built-in attribute entry for `(name, scope)`.
pub fn attribute_of(name: &str, scope: AttributeScope) -> Option<&'static AttributeDescriptor> {
	BUILTIN_INDEX.attribute_of(name, scope)
}
