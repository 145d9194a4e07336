//! Classification dimensions shared by the element and attribute tables.
//!
//! Every dimension is a closed enum. Tables loaded from JSON or TOML spell the
//! variants in `SCREAMING_SNAKE_CASE` (`INLINE_BLOCK`, `FORM_ELEMENTS`), which
//! is also what [`as_str`](DisplayType::as_str) returns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a classification enum together with its wire names.
///
/// The generated type gets `ALL` (declaration order), `as_str` (wire name),
/// `variant_name` (Rust path segment, used by the code emitter) and a
/// `Display` impl printing the wire name.
macro_rules! classification {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $wire:literal,
			)+
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(
				$(#[$vmeta])*
				#[serde(rename = $wire)]
				$variant,
			)+
		}

		impl $name {
			/// All variants in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// Returns the name used in table files.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $wire,)+
				}
			}

			/// Returns the Rust variant identifier.
			pub const fn variant_name(self) -> &'static str {
				match self {
					$(Self::$variant => stringify!($variant),)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.pad(self.as_str())
			}
		}
	};
}

classification! {
	/// HTML content category. An element may belong to several.
	pub enum ContentCategory {
		Flow => "FLOW",
		Phrasing => "PHRASING",
		Metadata => "METADATA",
		Sectioning => "SECTIONING",
		Heading => "HEADING",
		Embedded => "EMBEDDED",
		Interactive => "INTERACTIVE",
		FormAssociated => "FORM_ASSOCIATED",
		ScriptSupporting => "SCRIPT_SUPPORTING",
		Transparent => "TRANSPARENT",
	}
}

classification! {
	/// Default CSS display behaviour of an element.
	pub enum DisplayType {
		Block => "BLOCK",
		Inline => "INLINE",
		InlineBlock => "INLINE_BLOCK",
		Table => "TABLE",
		/// Not rendered (`head`, `script`, `meta`, ...).
		None => "NONE",
	}
}

classification! {
	/// Parsing model of an element's content.
	pub enum ElementType {
		/// Normal element with child nodes.
		Container => "CONTAINER",
		/// Element that never has children (`br`, `img`).
		Void => "VOID",
		/// Text content is not parsed (`script`, `style`).
		RawText => "RAW_TEXT",
		/// Text content is not parsed but entities are decoded (`textarea`, `title`).
		EscapableRawText => "ESCAPABLE_RAW_TEXT",
	}
}

classification! {
	/// Parent context an element may appear in. Informational only.
	pub enum Context {
		Flow => "FLOW_CTX",
		Phrasing => "PHRASING_CTX",
		Table => "TABLE_CTX",
		Head => "HEAD_CTX",
		Html => "HTML_CTX",
		Root => "ROOT_CTX",
		Map => "MAP_CTX",
		Colgroup => "COLGROUP_CTX",
		Dl => "DL_CTX",
		Figure => "FIGURE_CTX",
		Fieldset => "FIELDSET_CTX",
		Ul => "UL_CTX",
		Ol => "OL_CTX",
		Select => "SELECT_CTX",
		Datalist => "DATALIST_CTX",
		Ruby => "RUBY_CTX",
		Picture => "PICTURE_CTX",
		Audio => "AUDIO_CTX",
		Video => "VIDEO_CTX",
		Details => "DETAILS_CTX",
		Tr => "TR_CTX",
	}
}

classification! {
	/// Functional grouping of an attribute.
	pub enum AttributeCategory {
		Global => "GLOBAL",
		Form => "FORM",
		Media => "MEDIA",
		Link => "LINK",
		Table => "TABLE",
		Interactive => "INTERACTIVE",
		Metadata => "METADATA",
		Accessibility => "ACCESSIBILITY",
		Microdata => "MICRODATA",
		Data => "DATA",
		Event => "EVENT",
		Deprecated => "DEPRECATED",
	}
}

classification! {
	/// Value type of an attribute.
	///
	/// Only [`Boolean`](Self::Boolean) and [`Enum`](Self::Enum) change the
	/// shape of the generated accessors; every other type is passed through
	/// as a string.
	pub enum AttributeType {
		String => "STRING",
		Boolean => "BOOLEAN",
		Enum => "ENUM",
		Number => "NUMBER",
		Url => "URL",
		TokenList => "TOKEN_LIST",
		CommaList => "COMMA_LIST",
		Color => "COLOR",
		Dimension => "DIMENSION",
		Language => "LANGUAGE",
		Charset => "CHARSET",
		Regex => "REGEX",
		Script => "SCRIPT",
	}
}

classification! {
	/// Set of elements an attribute applies to.
	///
	/// Together with the attribute name this forms the key of an attribute
	/// table entry.
	pub enum AttributeScope {
		Universal => "UNIVERSAL",
		FormElements => "FORM_ELEMENTS",
		MediaElements => "MEDIA_ELEMENTS",
		LinkElements => "LINK_ELEMENTS",
		TableElements => "TABLE_ELEMENTS",
		InteractiveElements => "INTERACTIVE_ELEMENTS",
		MetadataElements => "METADATA_ELEMENTS",
		SpecificElements => "SPECIFIC_ELEMENTS",
	}
}

impl AttributeScope {
	/// Token appended to a conflicting attribute name to make it unique,
	/// e.g. `type` under [`FormElements`](Self::FormElements) becomes `typeForm`.
	pub const fn suffix_token(self) -> &'static str {
		match self {
			Self::Universal => "Global",
			Self::FormElements => "Form",
			Self::MediaElements => "Media",
			Self::LinkElements => "Link",
			Self::TableElements => "Table",
			Self::InteractiveElements => "Interactive",
			Self::MetadataElements => "Meta",
			Self::SpecificElements => "Specific",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DisplayType::InlineBlock, "\"INLINE_BLOCK\"")]
	#[case(DisplayType::None, "\"NONE\"")]
	fn test_display_type_wire_name(#[case] value: DisplayType, #[case] expected: &str) {
		let json = serde_json::to_string(&value).unwrap();
		assert_eq!(json, expected);
		assert_eq!(serde_json::from_str::<DisplayType>(expected).unwrap(), value);
	}

	#[rstest]
	fn test_context_wire_name_keeps_ctx_suffix() {
		assert_eq!(Context::Phrasing.as_str(), "PHRASING_CTX");
		let parsed: Context = serde_json::from_str("\"COLGROUP_CTX\"").unwrap();
		assert_eq!(parsed, Context::Colgroup);
	}

	#[rstest]
	fn test_unknown_variant_is_rejected() {
		let result = serde_json::from_str::<ElementType>("\"FOREIGN\"");
		assert!(result.is_err());
	}

	#[rstest]
	fn test_variant_name_matches_rust_identifier() {
		assert_eq!(ElementType::EscapableRawText.variant_name(), "EscapableRawText");
		assert_eq!(AttributeScope::FormElements.variant_name(), "FormElements");
	}

	#[rstest]
	#[case(AttributeScope::Universal, "Global")]
	#[case(AttributeScope::FormElements, "Form")]
	#[case(AttributeScope::MetadataElements, "Meta")]
	#[case(AttributeScope::SpecificElements, "Specific")]
	fn test_suffix_token(#[case] scope: AttributeScope, #[case] token: &str) {
		assert_eq!(scope.suffix_token(), token);
	}

	#[rstest]
	fn test_all_lists_every_variant_once() {
		assert_eq!(AttributeScope::ALL.len(), 8);
		assert_eq!(Context::ALL.len(), 21);
		assert_eq!(AttributeType::ALL.len(), 13);
	}
}
