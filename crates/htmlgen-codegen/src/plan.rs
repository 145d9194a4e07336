//! One complete generation pass over a pair of tables.

use std::collections::HashMap;

use htmlgen_spec::{AttributeTable, ElementTable};
use tracing::{debug, info};

use crate::attributes::{generate_attribute_accessors, open_ended_accessors};
use crate::conflict::ConflictResolver;
use crate::elements::generate_element_accessors;
use crate::error::{CodegenError, Result};
use crate::ir::{Accessor, Signature, Source};
use crate::metadata::{MetadataMap, generate_metadata_maps};
use crate::naming::is_open_ended;

/// Complete abstract output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
	/// Element accessors in table order.
	pub elements: Vec<Accessor>,
	/// Attribute accessors in table order, followed by the fixed accessors.
	pub attributes: Vec<Accessor>,
	pub metadata: Vec<MetadataMap>,
	/// Attribute names registered under more than one scope.
	pub conflicting_names: Vec<String>,
}

impl GenerationPlan {
	/// Element accessors whose name is `name`.
	pub fn element_overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Accessor> {
		self.elements.iter().filter(move |a| a.name == name)
	}

	/// Attribute accessors whose name is `name`.
	pub fn attribute_overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Accessor> {
		self.attributes.iter().filter(move |a| a.name == name)
	}
}

/// Drives generation over an element table and an attribute table.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'t> {
	elements: &'t ElementTable,
	attributes: &'t AttributeTable,
}

impl<'t> Generator<'t> {
	pub fn new(elements: &'t ElementTable, attributes: &'t AttributeTable) -> Self {
		Self {
			elements,
			attributes,
		}
	}

	/// Runs the pass.
	///
	/// # Errors
	///
	/// Fails on the first unresolvable name, or with
	/// [`CodegenError::DuplicateAccessor`] when two accessors in the same
	/// namespace share a name and parameter shape.
	pub fn generate(&self) -> Result<GenerationPlan> {
		let elements = self.generate_elements()?;
		ensure_unique(&elements)?;

		let resolver = ConflictResolver::new(self.attributes);
		let conflicting_names: Vec<String> =
			resolver.conflicting_names().map(str::to_string).collect();
		for name in &conflicting_names {
			debug!(attribute = %name, scopes = ?resolver.scopes_of(name), "disambiguating conflicting attribute");
		}
		let attributes = self.generate_attributes(&resolver)?;
		ensure_unique(&attributes)?;

		let metadata = generate_metadata_maps(self.elements);

		info!(
			elements = self.elements.len(),
			element_accessors = elements.len(),
			attributes = self.attributes.len(),
			attribute_accessors = attributes.len(),
			conflicts = conflicting_names.len(),
			"generation plan complete"
		);

		Ok(GenerationPlan {
			elements,
			attributes,
			metadata,
			conflicting_names,
		})
	}

	fn generate_elements(&self) -> Result<Vec<Accessor>> {
		let mut accessors = Vec::new();
		for descriptor in self.elements {
			let overloads = generate_element_accessors(descriptor)?;
			debug!(element = %descriptor.name, overloads = overloads.len(), "generated element accessors");
			accessors.extend(overloads);
		}
		Ok(accessors)
	}

	fn generate_attributes(&self, resolver: &ConflictResolver<'_>) -> Result<Vec<Accessor>> {
		let mut accessors = Vec::new();
		for descriptor in self.attributes {
			if is_open_ended(descriptor) {
				debug!(attribute = %descriptor.name, "skipping open-ended attribute");
				continue;
			}
			let overloads = generate_attribute_accessors(descriptor, resolver)?;
			debug!(
				attribute = %descriptor.name,
				scope = %descriptor.scope,
				value_type = %descriptor.value_type,
				overloads = overloads.len(),
				"generated attribute accessors"
			);
			accessors.extend(overloads);
		}
		accessors.extend(open_ended_accessors());
		Ok(accessors)
	}
}

/// Rejects two accessors with the same signature.
pub(crate) fn ensure_unique(accessors: &[Accessor]) -> Result<()> {
	let mut seen: HashMap<Signature, &Source> = HashMap::with_capacity(accessors.len());
	for accessor in accessors {
		if let Some(first) = seen.insert(accessor.signature(), &accessor.source) {
			return Err(CodegenError::DuplicateAccessor {
				accessor: accessor.signature().to_string(),
				first: first.to_string(),
				second: accessor.source.to_string(),
			});
		}
	}
	Ok(())
}
