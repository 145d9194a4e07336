//! Identifier folding for table names.
//!
//! Wire names such as `accept-charset` or `http-equiv` become camelCase
//! abstract accessor names (`acceptCharset`, `httpEquiv`). The emitter later
//! converts these to the casing of the target file.

use std::collections::HashSet;

use htmlgen_spec::{AttributeCategory, AttributeDescriptor};
use once_cell::sync::Lazy;

use crate::error::{CodegenError, Result};

/// Identifier used when nothing survives folding.
pub const FALLBACK_IDENTIFIER: &str = "attr";

/// Prefix for identifiers that would start with a digit.
pub const DIGIT_PREFIX: &str = "attr";

/// Suffix appended to identifiers that collide with a keyword.
pub const KEYWORD_SUFFIX: &str = "Attr";

/// Marker of a wildcard attribute family such as `data-*`.
pub const WILDCARD_MARKER: char = '*';

/// Prefix of inline event handler attributes.
pub const EVENT_PREFIX: &str = "on";

/// Strict and reserved Rust keywords.
static RUST_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
	[
		// Strict
		"as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
		"extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
		"mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
		"true", "type", "unsafe", "use", "where", "while",
		// Reserved
		"abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
		"typeof", "unsized", "virtual", "yield",
	]
	.into_iter()
	.collect()
});

/// Returns `true` if `name` cannot be used as a plain Rust identifier.
pub fn is_reserved_keyword(name: &str) -> bool {
	RUST_KEYWORDS.contains(name)
}

fn is_separator(ch: char) -> bool {
	matches!(ch, '-' | '.' | '_' | '/' | '+' | ':' | ';' | ',' | '=') || ch.is_whitespace()
}

/// Splits on separator runs and joins the segments in camelCase.
fn fold(raw: &str) -> String {
	let mut folded = String::with_capacity(raw.len());
	let segments = raw
		.trim_start_matches('_')
		.split(is_separator)
		.filter(|segment| !segment.is_empty());
	for (index, segment) in segments.enumerate() {
		if index == 0 {
			folded.push_str(&segment.to_lowercase());
			continue;
		}
		let mut chars = segment.chars();
		if let Some(first) = chars.next() {
			folded.extend(first.to_uppercase());
			folded.push_str(&chars.as_str().to_lowercase());
		}
	}
	folded
}

fn finish(mut identifier: String) -> String {
	if identifier.is_empty() {
		return FALLBACK_IDENTIFIER.to_string();
	}
	if identifier.starts_with(|ch: char| ch.is_ascii_digit()) {
		identifier.insert_str(0, DIGIT_PREFIX);
	}
	if is_reserved_keyword(&identifier) {
		identifier.push_str(KEYWORD_SUFFIX);
	}
	identifier
}

/// Folds an arbitrary table name into a camelCase identifier.
///
/// Total and deterministic: every input yields some identifier.
///
/// # Examples
///
/// ```
/// use htmlgen_codegen::naming::to_identifier;
///
/// assert_eq!(to_identifier("accept-charset"), "acceptCharset");
/// assert_eq!(to_identifier("for"), "forAttr");
/// assert_eq!(to_identifier("3d"), "attr3d");
/// assert_eq!(to_identifier("---"), "attr");
/// ```
pub fn to_identifier(raw: &str) -> String {
	finish(fold(raw))
}

/// Checked variant of [`to_identifier`] used by the generators.
///
/// # Errors
///
/// Returns [`CodegenError::UnresolvableIdentifier`] when folding leaves
/// nothing (the fallback would hide the problem) or leaves characters outside
/// `[A-Za-z0-9]`.
pub fn resolve_identifier(raw: &str) -> Result<String> {
	let folded = fold(raw);
	if folded.is_empty() {
		return Err(CodegenError::UnresolvableIdentifier {
			raw: raw.to_string(),
			reason: "no identifier characters remain after folding",
		});
	}
	if !folded.chars().all(|ch| ch.is_ascii_alphanumeric()) {
		return Err(CodegenError::UnresolvableIdentifier {
			raw: raw.to_string(),
			reason: "contains characters that cannot appear in an identifier",
		});
	}
	Ok(finish(folded))
}

/// Returns `true` for attributes serviced by the fixed `data`/`event`
/// accessors instead of per-name generation.
pub fn is_open_ended(descriptor: &AttributeDescriptor) -> bool {
	descriptor.name.contains(WILDCARD_MARKER) || is_event_handler(descriptor)
}

fn is_event_handler(descriptor: &AttributeDescriptor) -> bool {
	descriptor.name.starts_with(EVENT_PREFIX) || descriptor.has_category(AttributeCategory::Event)
}

#[cfg(test)]
mod tests {
	use super::*;
	use htmlgen_spec::{AttributeScope, AttributeType, attribute};
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("id", "id")]
	#[case("accept-charset", "acceptCharset")]
	#[case("http-equiv", "httpEquiv")]
	#[case("aria-labelledby", "ariaLabelledby")]
	#[case("_blank", "blank")]
	#[case("-foo", "foo")]
	#[case("--foo-bar", "fooBar")]
	#[case("target__blank", "targetBlank")]
	#[case("type_text/css", "typeTextCss")]
	#[case("type_application/rss+xml", "typeApplicationRssXml")]
	#[case("autocomplete_current-password", "autocompleteCurrentPassword")]
	#[case("HREF", "href")]
	#[case("a b", "aB")]
	fn test_to_identifier(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(to_identifier(raw), expected);
	}

	#[rstest]
	#[case("for", "forAttr")]
	#[case("loop", "loopAttr")]
	#[case("type", "typeAttr")]
	#[case("async", "asyncAttr")]
	fn test_keywords_get_suffix(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(to_identifier(raw), expected);
	}

	#[rstest]
	#[case("", "attr")]
	#[case("___", "attr")]
	#[case("-.-", "attr")]
	#[case("1st", "attr1st")]
	fn test_fallback_and_digit_prefix(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(to_identifier(raw), expected);
	}

	#[rstest]
	fn test_resolve_identifier_rejects_empty_fold() {
		let error = resolve_identifier("--").unwrap_err();
		assert!(matches!(error, CodegenError::UnresolvableIdentifier { ref raw, .. } if raw == "--"));
	}

	#[rstest]
	fn test_resolve_identifier_rejects_non_identifier_characters() {
		assert!(resolve_identifier("data-*").is_err());
		assert!(resolve_identifier("café").is_err());
	}

	#[rstest]
	fn test_resolve_identifier_matches_total_variant() {
		assert_eq!(resolve_identifier("for").unwrap(), "forAttr");
		assert_eq!(resolve_identifier("h1").unwrap(), "h1");
	}

	#[rstest]
	#[case(attribute("data-*", AttributeType::String, AttributeScope::Universal, &[], ""), true)]
	#[case(attribute("onclick", AttributeType::Script, AttributeScope::Universal, &[AttributeCategory::Event], ""), true)]
	#[case(attribute("onfoo", AttributeType::Script, AttributeScope::Universal, &[], ""), true)]
	#[case(attribute("open", AttributeType::Boolean, AttributeScope::InteractiveElements, &[], ""), false)]
	#[case(attribute("onclick", AttributeType::String, AttributeScope::Universal, &[], ""), true)]
	#[case(attribute("onmouseover", AttributeType::Url, AttributeScope::Universal, &[], ""), true)]
	#[case(attribute("handler", AttributeType::Script, AttributeScope::Universal, &[AttributeCategory::Event], ""), true)]
	#[case(attribute("onion", AttributeType::String, AttributeScope::Universal, &[], ""), true)]
	#[case(attribute("ping", AttributeType::Url, AttributeScope::LinkElements, &[], ""), false)]
	fn test_is_open_ended(#[case] descriptor: AttributeDescriptor, #[case] expected: bool) {
		assert_eq!(is_open_ended(&descriptor), expected);
	}

	proptest! {
		#[test]
		fn prop_to_identifier_is_deterministic(raw in ".{0,24}") {
			prop_assert_eq!(to_identifier(&raw), to_identifier(&raw));
		}

		#[test]
		fn prop_ascii_names_fold_to_valid_identifiers(raw in "[a-zA-Z0-9_./:;,=+ -]{0,24}") {
			let identifier = to_identifier(&raw);
			prop_assert!(!identifier.is_empty());
			prop_assert!(identifier.chars().all(|ch| ch.is_ascii_alphanumeric()));
			prop_assert!(identifier.starts_with(|ch: char| ch.is_ascii_lowercase()));
			prop_assert!(!is_reserved_keyword(&identifier));
		}
	}
}
