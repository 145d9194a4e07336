//! Abstract accessor descriptions.
//!
//! The generators describe every factory function as an [`Accessor`]: a
//! camelCase name, a parameter shape, a return kind and a body that calls a
//! single runtime constructor. Accessors sharing a name form an overload set;
//! the emitter decides how the set is spelled in the target language.

use std::fmt;

use htmlgen_spec::AttributeScope;

/// Parameter shape of one overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKind {
	/// Any number of child fragments.
	VariadicFragments,
	/// An iterable of child fragments.
	IterableFragments,
	/// Any number of text strings, each becoming a text fragment.
	VariadicText,
	/// Any number of attributes (void elements).
	VariadicAttributes,
	/// A single string value.
	String,
	/// A single boolean.
	Boolean,
}

impl ParamKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::VariadicFragments => "fragments...",
			Self::IterableFragments => "iterable<fragment>",
			Self::VariadicText => "text...",
			Self::VariadicAttributes => "attributes...",
			Self::String => "string",
			Self::Boolean => "bool",
		}
	}
}

/// A named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Param {
	pub name: &'static str,
	pub kind: ParamKind,
}

impl Param {
	pub const fn new(name: &'static str, kind: ParamKind) -> Self {
		Self { name, kind }
	}
}

/// Which runtime attribute type an attribute accessor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
	String,
	Boolean,
	Enum,
	ScopedString,
	ScopedBoolean,
	ScopedEnum,
}

/// Return kind of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
	BlockContainer,
	InlineContainer,
	BlockVoid,
	InlineVoid,
	Attribute(AttributeKind),
}

impl ReturnKind {
	/// Returns `true` for the four element kinds.
	pub const fn is_element(self) -> bool {
		!matches!(self, Self::Attribute(_))
	}
}

/// Runtime constructor called by an accessor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constructor {
	BlockContainer,
	InlineContainer,
	BlockVoidElement,
	InlineVoidElement,
	StringAttribute,
	BooleanAttribute,
	EnumAttribute,
	ScopedStringAttribute,
	ScopedBooleanAttribute,
	ScopedEnumAttribute,
}

impl Constructor {
	/// Name of the runtime function.
	pub const fn function_name(self) -> &'static str {
		match self {
			Self::BlockContainer => "block_container",
			Self::InlineContainer => "inline_container",
			Self::BlockVoidElement => "block_void_element",
			Self::InlineVoidElement => "inline_void_element",
			Self::StringAttribute => "string_attribute",
			Self::BooleanAttribute => "boolean_attribute",
			Self::EnumAttribute => "enum_attribute",
			Self::ScopedStringAttribute => "scoped_string_attribute",
			Self::ScopedBooleanAttribute => "scoped_boolean_attribute",
			Self::ScopedEnumAttribute => "scoped_enum_attribute",
		}
	}

	/// Kind of value the constructor produces.
	pub const fn returns(self) -> ReturnKind {
		match self {
			Self::BlockContainer => ReturnKind::BlockContainer,
			Self::InlineContainer => ReturnKind::InlineContainer,
			Self::BlockVoidElement => ReturnKind::BlockVoid,
			Self::InlineVoidElement => ReturnKind::InlineVoid,
			Self::StringAttribute => ReturnKind::Attribute(AttributeKind::String),
			Self::BooleanAttribute => ReturnKind::Attribute(AttributeKind::Boolean),
			Self::EnumAttribute => ReturnKind::Attribute(AttributeKind::Enum),
			Self::ScopedStringAttribute => ReturnKind::Attribute(AttributeKind::ScopedString),
			Self::ScopedBooleanAttribute => ReturnKind::Attribute(AttributeKind::ScopedBoolean),
			Self::ScopedEnumAttribute => ReturnKind::Attribute(AttributeKind::ScopedEnum),
		}
	}

	/// Element constructors take the tag and a child (or attribute) list.
	pub const fn is_element(self) -> bool {
		self.returns().is_element()
	}
}

/// One argument of a constructor call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
	/// A string literal such as a tag or attribute name.
	Literal(String),
	/// A boolean literal.
	Bool(bool),
	/// An attribute scope, for the scoped constructors.
	Scope(AttributeScope),
	/// A parameter of the accessor, passed through.
	Param(&'static str),
	/// A string parameter with a fixed prefix, e.g. `"data-" + name`.
	Prefixed {
		prefix: &'static str,
		param: &'static str,
	},
}

/// Body of an accessor: one constructor call.
///
/// Element bodies without a parameter argument build an element with no
/// children (or attributes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
	pub constructor: Constructor,
	pub args: Vec<Arg>,
}

impl Body {
	pub fn new(constructor: Constructor, args: Vec<Arg>) -> Self {
		Self { constructor, args }
	}

	/// Literal first argument (tag or attribute name), if any.
	pub fn literal_name(&self) -> Option<&str> {
		match self.args.first() {
			Some(Arg::Literal(name)) => Some(name),
			_ => None,
		}
	}
}

/// Table entry an accessor was generated from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
	Element(String),
	Attribute { name: String, scope: AttributeScope },
	/// One of the fixed open-ended accessors.
	Fixed(&'static str),
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Element(name) => write!(f, "element '{}'", name),
			Self::Attribute { name, scope } => write!(f, "attribute '{}' ({})", name, scope),
			Self::Fixed(name) => write!(f, "fixed accessor '{}'", name),
		}
	}
}

/// Name plus parameter shape; unique within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
	pub name: String,
	pub shape: Vec<ParamKind>,
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let shape: Vec<_> = self.shape.iter().map(|kind| kind.as_str()).collect();
		write!(f, "{}({})", self.name, shape.join(", "))
	}
}

/// One generated factory function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
	/// Abstract camelCase name, shared by an overload set.
	pub name: String,
	pub params: Vec<Param>,
	pub returns: ReturnKind,
	pub body: Body,
	/// Documentation text.
	pub doc: String,
	pub source: Source,
}

impl Accessor {
	/// Creates an accessor whose return kind follows from its constructor.
	pub fn new(
		name: impl Into<String>,
		params: Vec<Param>,
		body: Body,
		doc: impl Into<String>,
		source: Source,
	) -> Self {
		Self {
			name: name.into(),
			returns: body.constructor.returns(),
			params,
			body,
			doc: doc.into(),
			source,
		}
	}

	/// Parameter kinds in order.
	pub fn shape(&self) -> Vec<ParamKind> {
		self.params.iter().map(|param| param.kind).collect()
	}

	pub fn signature(&self) -> Signature {
		Signature {
			name: self.name.clone(),
			shape: self.shape(),
		}
	}

	/// Looks up a parameter by name.
	pub fn param(&self, name: &str) -> Option<&Param> {
		self.params.iter().find(|param| param.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_return_kind_follows_constructor() {
		let accessor = Accessor::new(
			"hidden",
			vec![],
			Body::new(
				Constructor::BooleanAttribute,
				vec![Arg::Literal("hidden".into()), Arg::Bool(true)],
			),
			"",
			Source::Attribute {
				name: "hidden".into(),
				scope: AttributeScope::Universal,
			},
		);
		assert_eq!(accessor.returns, ReturnKind::Attribute(AttributeKind::Boolean));
		assert!(!accessor.returns.is_element());
		assert_eq!(accessor.body.literal_name(), Some("hidden"));
	}

	#[rstest]
	fn test_signature_display() {
		let signature = Signature {
			name: "data".into(),
			shape: vec![ParamKind::String, ParamKind::String],
		};
		assert_eq!(signature.to_string(), "data(string, string)");
	}

	#[rstest]
	fn test_source_display() {
		let source = Source::Attribute {
			name: "type".into(),
			scope: AttributeScope::LinkElements,
		};
		assert_eq!(source.to_string(), "attribute 'type' (LINK_ELEMENTS)");
		assert_eq!(Source::Fixed("xmlns").to_string(), "fixed accessor 'xmlns'");
	}

	#[rstest]
	#[case(Constructor::BlockContainer, true)]
	#[case(Constructor::InlineVoidElement, true)]
	#[case(Constructor::ScopedEnumAttribute, false)]
	fn test_constructor_is_element(#[case] constructor: Constructor, #[case] expected: bool) {
		assert_eq!(constructor.is_element(), expected);
	}
}
