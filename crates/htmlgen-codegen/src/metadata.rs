//! Name-keyed metadata maps for the generated lookup module.

use htmlgen_spec::{ContentCategory, Context, DisplayType, ElementTable, ElementType};

/// Which element property a map records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
	ContentCategories,
	DisplayType,
	ElementType,
	ValidContexts,
}

impl MetadataKind {
	pub const ALL: &'static [Self] = &[
		Self::ContentCategories,
		Self::DisplayType,
		Self::ElementType,
		Self::ValidContexts,
	];

	/// Name of the generated lookup function.
	pub const fn getter_name(self) -> &'static str {
		match self {
			Self::ContentCategories => "content_categories_of",
			Self::DisplayType => "display_type_of",
			Self::ElementType => "element_type_of",
			Self::ValidContexts => "valid_contexts_of",
		}
	}
}

/// Value recorded for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
	Categories(Vec<ContentCategory>),
	Display(DisplayType),
	Element(ElementType),
	Contexts(Vec<Context>),
}

/// One element-name-keyed map, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataMap {
	pub kind: MetadataKind,
	pub entries: Vec<(String, MetadataValue)>,
}

impl MetadataMap {
	pub fn get(&self, name: &str) -> Option<&MetadataValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}
}

/// Builds the four metadata maps over `table`.
pub fn generate_metadata_maps(table: &ElementTable) -> Vec<MetadataMap> {
	MetadataKind::ALL
		.iter()
		.map(|&kind| MetadataMap {
			kind,
			entries: table
				.iter()
				.map(|descriptor| {
					let value = match kind {
						MetadataKind::ContentCategories => {
							MetadataValue::Categories(descriptor.content_categories.to_vec())
						}
						MetadataKind::DisplayType => MetadataValue::Display(descriptor.display_type),
						MetadataKind::ElementType => MetadataValue::Element(descriptor.element_type),
						MetadataKind::ValidContexts => {
							MetadataValue::Contexts(descriptor.valid_contexts.to_vec())
						}
					};
					(descriptor.name.to_string(), value)
				})
				.collect(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_one_map_per_kind_covering_every_element() {
		let table = ElementTable::builtin();
		let maps = generate_metadata_maps(&table);
		assert_eq!(maps.len(), 4);
		for (map, kind) in maps.iter().zip(MetadataKind::ALL) {
			assert_eq!(map.kind, *kind);
			assert_eq!(map.entries.len(), table.len());
			assert_eq!(map.entries[0].0, "a");
		}
	}

	#[rstest]
	fn test_map_values() {
		let maps = generate_metadata_maps(&ElementTable::builtin());
		assert_eq!(maps[1].get("div"), Some(&MetadataValue::Display(DisplayType::Block)));
		assert_eq!(maps[2].get("img"), Some(&MetadataValue::Element(ElementType::Void)));
		assert_eq!(
			maps[3].get("source"),
			Some(&MetadataValue::Contexts(vec![
				Context::Picture,
				Context::Audio,
				Context::Video
			]))
		);
		assert_eq!(maps[0].get("caption"), Some(&MetadataValue::Categories(vec![])));
		assert_eq!(maps[0].get("blink"), None);
	}
}
