//! Validated classification tables.
//!
//! [`ElementTable`] and [`AttributeTable`] are the only inputs to code
//! generation. The built-in tables are checked by the `const fn`
//! constructors and by this module's tests; caller-supplied descriptors go
//! through [`ElementTable::new`] / [`AttributeTable::new`].

use std::collections::HashSet;

use serde::Deserialize;

use crate::descriptor::{AttributeDescriptor, ElementDescriptor};
use crate::error::{TableError, TableResult};
use crate::model::{AttributeScope, AttributeType};
use crate::tables::{ATTRIBUTES, ELEMENTS};

/// On-disk layout of an element table: `{ "elements": [...] }`.
#[derive(Debug, Deserialize)]
struct ElementFile {
	elements: Vec<ElementDescriptor>,
}

/// On-disk layout of an attribute table: `{ "attributes": [...] }`.
#[derive(Debug, Deserialize)]
struct AttributeFile {
	attributes: Vec<AttributeDescriptor>,
}

/// An ordered list of element descriptors with unique, non-empty names.
#[derive(Debug, Clone)]
pub struct ElementTable {
	descriptors: Vec<ElementDescriptor>,
}

impl ElementTable {
	/// Validates `descriptors` and keeps them in the given order.
	///
	/// # Errors
	///
	/// Returns [`TableError::EmptyName`] or [`TableError::DuplicateElement`].
	pub fn new(descriptors: impl IntoIterator<Item = ElementDescriptor>) -> TableResult<Self> {
		let descriptors: Vec<_> = descriptors.into_iter().collect();
		let mut seen = HashSet::with_capacity(descriptors.len());
		for descriptor in &descriptors {
			if descriptor.name.is_empty() {
				return Err(TableError::EmptyName);
			}
			if !seen.insert(descriptor.name.as_ref()) {
				return Err(TableError::DuplicateElement(descriptor.name.to_string()));
			}
		}
		Ok(Self { descriptors })
	}

	/// The curated element table.
	pub fn builtin() -> Self {
		Self {
			descriptors: ELEMENTS.to_vec(),
		}
	}

	/// Parses and validates a JSON document of the form `{ "elements": [...] }`.
	pub fn from_json(content: &str) -> TableResult<Self> {
		let file: ElementFile = serde_json::from_str(content).map_err(|e| TableError::Parse {
			format: "JSON",
			message: e.to_string(),
		})?;
		Self::new(file.elements)
	}

	/// Parses and validates a TOML document with `[[elements]]` entries.
	pub fn from_toml(content: &str) -> TableResult<Self> {
		let file: ElementFile = toml::from_str(content).map_err(|e| TableError::Parse {
			format: "TOML",
			message: e.to_string(),
		})?;
		Self::new(file.elements)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ElementDescriptor> {
		self.descriptors.iter()
	}

	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	/// Looks up an element by tag name.
	pub fn get(&self, name: &str) -> Option<&ElementDescriptor> {
		self.descriptors.iter().find(|d| d.name == name)
	}
}

impl<'a> IntoIterator for &'a ElementTable {
	type Item = &'a ElementDescriptor;
	type IntoIter = std::slice::Iter<'a, ElementDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An ordered list of attribute descriptors keyed by `(name, scope)`.
#[derive(Debug, Clone)]
pub struct AttributeTable {
	descriptors: Vec<AttributeDescriptor>,
}

impl AttributeTable {
	/// Validates `descriptors` and keeps them in the given order.
	///
	/// # Errors
	///
	/// Returns [`TableError::EmptyName`], [`TableError::DuplicateAttribute`],
	/// [`TableError::MissingEnumValues`] or [`TableError::UnexpectedEnumValues`].
	pub fn new(descriptors: impl IntoIterator<Item = AttributeDescriptor>) -> TableResult<Self> {
		let descriptors: Vec<_> = descriptors.into_iter().collect();
		let mut seen: HashSet<(&str, AttributeScope)> = HashSet::with_capacity(descriptors.len());
		for descriptor in &descriptors {
			validate_attribute(descriptor)?;
			if !seen.insert((descriptor.name.as_ref(), descriptor.scope)) {
				return Err(TableError::DuplicateAttribute {
					name: descriptor.name.to_string(),
					scope: descriptor.scope,
				});
			}
		}
		Ok(Self { descriptors })
	}

	/// The curated attribute table.
	pub fn builtin() -> Self {
		Self {
			descriptors: ATTRIBUTES.to_vec(),
		}
	}

	/// Parses and validates a JSON document of the form `{ "attributes": [...] }`.
	pub fn from_json(content: &str) -> TableResult<Self> {
		let file: AttributeFile = serde_json::from_str(content).map_err(|e| TableError::Parse {
			format: "JSON",
			message: e.to_string(),
		})?;
		Self::new(file.attributes)
	}

	/// Parses and validates a TOML document with `[[attributes]]` entries.
	pub fn from_toml(content: &str) -> TableResult<Self> {
		let file: AttributeFile = toml::from_str(content).map_err(|e| TableError::Parse {
			format: "TOML",
			message: e.to_string(),
		})?;
		Self::new(file.attributes)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, AttributeDescriptor> {
		self.descriptors.iter()
	}

	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	/// Looks up the entry for `name` under `scope`.
	pub fn get(&self, name: &str, scope: AttributeScope) -> Option<&AttributeDescriptor> {
		self.descriptors
			.iter()
			.find(|d| d.name == name && d.scope == scope)
	}

	/// Every entry registered under `name`, in table order.
	pub fn variants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AttributeDescriptor> {
		self.descriptors.iter().filter(move |d| d.name == name)
	}
}

impl<'a> IntoIterator for &'a AttributeTable {
	type Item = &'a AttributeDescriptor;
	type IntoIter = std::slice::Iter<'a, AttributeDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn validate_attribute(descriptor: &AttributeDescriptor) -> TableResult<()> {
	if descriptor.name.is_empty() {
		return Err(TableError::EmptyName);
	}
	match (descriptor.value_type, descriptor.enum_values.is_empty()) {
		(AttributeType::Enum, true) => Err(TableError::MissingEnumValues {
			name: descriptor.name.to_string(),
			scope: descriptor.scope,
		}),
		(AttributeType::Enum, false) | (_, true) => Ok(()),
		(value_type, false) => Err(TableError::UnexpectedEnumValues {
			name: descriptor.name.to_string(),
			scope: descriptor.scope,
			value_type,
		}),
	}
}
