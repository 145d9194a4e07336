//! Disambiguation of attribute names registered under several scopes.
//!
//! `type` exists for form controls and for links with unrelated value sets.
//! Each scope keeps its own accessors: the general accessor is suffixed with
//! the scope token (`typeForm`, `typeLink`), and an enum value factory is
//! suffixed only if the same factory name would come out of two scopes.

use std::collections::{BTreeMap, BTreeSet};

use htmlgen_spec::{AttributeDescriptor, AttributeScope, AttributeTable};

use crate::error::Result;
use crate::naming::resolve_identifier;

/// An accessor name chosen for one attribute entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
	/// Abstract accessor name.
	pub accessor: String,
	/// `true` for the accessor taking an arbitrary value, `false` for a
	/// per-value enum factory.
	pub is_general: bool,
	/// The enum value baked into a factory.
	pub value: Option<String>,
	/// Whether the name carries a scope suffix.
	pub scoped: bool,
}

/// Index of attribute names by the scopes they are registered under.
#[derive(Debug, Clone)]
pub struct ConflictResolver<'t> {
	variants: BTreeMap<&'t str, Vec<&'t AttributeDescriptor>>,
}

impl<'t> ConflictResolver<'t> {
	pub fn new(table: &'t AttributeTable) -> Self {
		let mut variants: BTreeMap<&'t str, Vec<&'t AttributeDescriptor>> = BTreeMap::new();
		for descriptor in table {
			variants
				.entry(descriptor.name.as_ref())
				.or_default()
				.push(descriptor);
		}
		for entries in variants.values_mut() {
			entries.sort_by_key(|descriptor| descriptor.scope);
		}
		Self { variants }
	}

	/// Returns `true` if `name` is registered under two or more scopes.
	pub fn is_conflicting(&self, name: &str) -> bool {
		self.variants
			.get(name)
			.is_some_and(|entries| entries.len() > 1)
	}

	/// Conflicting names in lexicographic order.
	pub fn conflicting_names(&self) -> impl Iterator<Item = &'t str> + '_ {
		self.variants
			.iter()
			.filter(|(_, entries)| entries.len() > 1)
			.map(|(name, _)| *name)
	}

	/// Scopes registered for `name`, in scope order.
	pub fn scopes_of(&self, name: &str) -> Vec<AttributeScope> {
		self.variants
			.get(name)
			.map(|entries| entries.iter().map(|d| d.scope).collect())
			.unwrap_or_default()
	}

	/// Names every accessor generated for `descriptor`.
	///
	/// The general accessor comes first, followed by one entry per enum
	/// value in declaration order.
	///
	/// # Errors
	///
	/// Fails with [`UnresolvableIdentifier`](crate::CodegenError::UnresolvableIdentifier)
	/// if the name or a value cannot be folded.
	pub fn resolve(&self, descriptor: &AttributeDescriptor) -> Result<Vec<ResolvedName>> {
		let name = descriptor.name.as_ref();
		let token = descriptor.scope.suffix_token();
		let conflicting = self.is_conflicting(name);

		let general = if conflicting {
			resolve_identifier(&format!("{}_{}", name, token))?
		} else {
			resolve_identifier(name)?
		};
		let mut names = vec![ResolvedName {
			accessor: general,
			is_general: true,
			value: None,
			scoped: conflicting,
		}];

		if descriptor.is_enum() {
			let shared = if conflicting {
				self.shared_value_identifiers(name)?
			} else {
				BTreeSet::new()
			};
			for value in descriptor.enum_values.iter() {
				let plain = value_identifier(name, value)?;
				let scoped = shared.contains(&plain);
				let accessor = if scoped {
					resolve_identifier(&format!("{}_{}_{}", name, value, token))?
				} else {
					plain
				};
				names.push(ResolvedName {
					accessor,
					is_general: false,
					value: Some(value.to_string()),
					scoped,
				});
			}
		}
		Ok(names)
	}

	/// Value factory names produced by more than one scope of `name`.
	fn shared_value_identifiers(&self, name: &str) -> Result<BTreeSet<String>> {
		let mut owners: BTreeMap<String, BTreeSet<AttributeScope>> = BTreeMap::new();
		for descriptor in self.variants.get(name).into_iter().flatten() {
			for value in descriptor.enum_values.iter() {
				owners
					.entry(value_identifier(name, value)?)
					.or_default()
					.insert(descriptor.scope);
			}
		}
		Ok(owners
			.into_iter()
			.filter(|(_, scopes)| scopes.len() > 1)
			.map(|(identifier, _)| identifier)
			.collect())
	}
}

fn value_identifier(name: &str, value: &str) -> Result<String> {
	resolve_identifier(&format!("{}_{}", name, value))
}
