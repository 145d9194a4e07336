//! Element classification table.
//!
//! One entry per HTML element, in tag-name order. Entries are built with the
//! [`element`] const constructor, so a malformed entry fails compilation.

use crate::descriptor::{ElementDescriptor, element};
use crate::model::{ContentCategory as C, Context as X, DisplayType as D, ElementType as E};

/// Every element known to the built-in vocabulary.
pub static ELEMENTS: &[ElementDescriptor] = &[
	element(
		"a",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Interactive, C::Flow],
		&[X::Phrasing],
		"Hyperlink",
	),
	element(
		"abbr",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Abbreviation",
	),
	element(
		"address",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Contact information",
	),
	element(
		"area",
		D::None,
		E::Void,
		&[C::Phrasing, C::Interactive, C::Flow],
		&[X::Map],
		"Image map area",
	),
	element(
		"article",
		D::Block,
		E::Container,
		&[C::Flow, C::Sectioning],
		&[X::Flow],
		"Independent content",
	),
	element(
		"aside",
		D::Block,
		E::Container,
		&[C::Flow, C::Sectioning],
		&[X::Flow],
		"Sidebar content",
	),
	element(
		"audio",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Interactive, C::Flow],
		&[X::Phrasing],
		"Audio content",
	),
	element(
		"b",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Bold text",
	),
	element(
		"base",
		D::None,
		E::Void,
		&[C::Metadata],
		&[X::Head],
		"Document base URL",
	),
	element(
		"bdi",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Bidirectional isolation",
	),
	element(
		"bdo",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Bidirectional override",
	),
	element(
		"blockquote",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Block quotation",
	),
	element(
		"body",
		D::Block,
		E::Container,
		&[C::Sectioning],
		&[X::Html],
		"Document body",
	),
	element(
		"br",
		D::Inline,
		E::Void,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Line break",
	),
	element(
		"button",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Button",
	),
	element(
		"canvas",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Flow],
		&[X::Phrasing],
		"Graphics canvas",
	),
	element(
		"caption",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table caption",
	),
	element(
		"cite",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Citation",
	),
	element(
		"code",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Code fragment",
	),
	element(
		"col",
		D::Table,
		E::Void,
		&[],
		&[X::Colgroup],
		"Table column",
	),
	element(
		"colgroup",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table column group",
	),
	element(
		"data",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Machine-readable data",
	),
	element(
		"datalist",
		D::None,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Input options",
	),
	element(
		"dd",
		D::Block,
		E::Container,
		&[],
		&[X::Dl],
		"Description list description",
	),
	element(
		"del",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow, C::Transparent],
		&[X::Phrasing, X::Flow],
		"Deleted text",
	),
	element(
		"details",
		D::Block,
		E::Container,
		&[C::Flow, C::Interactive],
		&[X::Flow],
		"Disclosure widget",
	),
	element(
		"dfn",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Definition term",
	),
	element(
		"dialog",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Dialog box",
	),
	element(
		"div",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Generic container",
	),
	element(
		"dl",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Description list",
	),
	element(
		"dt",
		D::Block,
		E::Container,
		&[],
		&[X::Dl],
		"Description list term",
	),
	element(
		"em",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Emphasized text",
	),
	element(
		"embed",
		D::InlineBlock,
		E::Void,
		&[C::Phrasing, C::Embedded, C::Interactive, C::Flow],
		&[X::Phrasing],
		"External application",
	),
	element(
		"fieldset",
		D::Block,
		E::Container,
		&[C::Flow, C::FormAssociated],
		&[X::Flow],
		"Form field group",
	),
	element(
		"figcaption",
		D::Block,
		E::Container,
		&[],
		&[X::Figure],
		"Figure caption",
	),
	element(
		"figure",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Figure with caption",
	),
	element(
		"footer",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Footer",
	),
	element(
		"form",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Form",
	),
	element(
		"h1",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 1 heading",
	),
	element(
		"h2",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 2 heading",
	),
	element(
		"h3",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 3 heading",
	),
	element(
		"h4",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 4 heading",
	),
	element(
		"h5",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 5 heading",
	),
	element(
		"h6",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Level 6 heading",
	),
	element(
		"head",
		D::None,
		E::Container,
		&[],
		&[X::Html],
		"Document head",
	),
	element(
		"header",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Header",
	),
	element(
		"hgroup",
		D::Block,
		E::Container,
		&[C::Flow, C::Heading],
		&[X::Flow],
		"Heading group",
	),
	element(
		"hr",
		D::Block,
		E::Void,
		&[C::Flow],
		&[X::Flow],
		"Horizontal rule",
	),
	element(
		"html",
		D::Block,
		E::Container,
		&[],
		&[X::Root],
		"Document root",
	),
	element(
		"i",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Italic text",
	),
	element(
		"iframe",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Interactive, C::Flow],
		&[X::Phrasing],
		"Inline frame",
	),
	element(
		"img",
		D::InlineBlock,
		E::Void,
		&[C::Phrasing, C::Embedded, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Image",
	),
	element(
		"input",
		D::InlineBlock,
		E::Void,
		&[C::Phrasing, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Form input",
	),
	element(
		"ins",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow, C::Transparent],
		&[X::Phrasing, X::Flow],
		"Inserted text",
	),
	element(
		"kbd",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Keyboard input",
	),
	element(
		"label",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Form label",
	),
	element(
		"legend",
		D::Block,
		E::Container,
		&[],
		&[X::Fieldset],
		"Fieldset legend",
	),
	element(
		"li",
		D::Block,
		E::Container,
		&[],
		&[X::Ul, X::Ol],
		"List item",
	),
	element(
		"link",
		D::None,
		E::Void,
		&[C::Metadata, C::Phrasing, C::Flow],
		&[X::Head, X::Phrasing],
		"External resource link",
	),
	element(
		"main",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Main content",
	),
	element(
		"map",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow, C::Transparent],
		&[X::Phrasing],
		"Image map",
	),
	element(
		"mark",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Marked text",
	),
	element(
		"math",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Flow],
		&[X::Phrasing],
		"MathML math",
	),
	element(
		"menu",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Menu",
	),
	element(
		"meta",
		D::None,
		E::Void,
		&[C::Metadata],
		&[X::Head],
		"Metadata",
	),
	element(
		"meter",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Scalar measurement",
	),
	element(
		"nav",
		D::Block,
		E::Container,
		&[C::Flow, C::Sectioning],
		&[X::Flow],
		"Navigation",
	),
	element(
		"noscript",
		D::Inline,
		E::Container,
		&[C::Metadata, C::Phrasing, C::Flow],
		&[X::Head, X::Phrasing],
		"No script fallback",
	),
	element(
		"object",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Generic object",
	),
	element(
		"ol",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Ordered list",
	),
	element(
		"optgroup",
		D::None,
		E::Container,
		&[],
		&[X::Select],
		"Option group",
	),
	element(
		"option",
		D::None,
		E::Container,
		&[],
		&[X::Select, X::Datalist],
		"Select option",
	),
	element(
		"output",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Form output",
	),
	element(
		"p",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Paragraph",
	),
	element(
		"picture",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Flow],
		&[X::Phrasing],
		"Responsive image",
	),
	element(
		"pre",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Preformatted text",
	),
	element(
		"progress",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Progress indicator",
	),
	element(
		"q",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Inline quotation",
	),
	element(
		"rp",
		D::Inline,
		E::Container,
		&[],
		&[X::Ruby],
		"Ruby parenthesis",
	),
	element(
		"rt",
		D::Inline,
		E::Container,
		&[],
		&[X::Ruby],
		"Ruby text",
	),
	element(
		"ruby",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Ruby annotation",
	),
	element(
		"s",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Strikethrough",
	),
	element(
		"samp",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Sample output",
	),
	element(
		"script",
		D::None,
		E::RawText,
		&[C::Metadata, C::Phrasing, C::Flow, C::ScriptSupporting],
		&[X::Head, X::Phrasing],
		"Script",
	),
	element(
		"search",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Search",
	),
	element(
		"section",
		D::Block,
		E::Container,
		&[C::Flow, C::Sectioning],
		&[X::Flow],
		"Document section",
	),
	element(
		"select",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Select control",
	),
	element(
		"slot",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow, C::Transparent],
		&[X::Phrasing],
		"Shadow DOM slot",
	),
	element(
		"small",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Small text",
	),
	element(
		"source",
		D::None,
		E::Void,
		&[],
		&[X::Picture, X::Audio, X::Video],
		"Media source",
	),
	element(
		"span",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Generic inline",
	),
	element(
		"strong",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Strong importance",
	),
	element(
		"style",
		D::None,
		E::RawText,
		&[C::Metadata],
		&[X::Head],
		"Style information",
	),
	element(
		"sub",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Subscript",
	),
	element(
		"summary",
		D::Block,
		E::Container,
		&[],
		&[X::Details],
		"Details summary",
	),
	element(
		"sup",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Superscript",
	),
	element(
		"svg",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Flow],
		&[X::Phrasing],
		"SVG graphics",
	),
	element(
		"table",
		D::Table,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Table",
	),
	element(
		"tbody",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table body",
	),
	element(
		"td",
		D::Table,
		E::Container,
		&[],
		&[X::Tr],
		"Table cell",
	),
	element(
		"template",
		D::None,
		E::Container,
		&[C::Metadata, C::Phrasing, C::Flow, C::ScriptSupporting],
		&[X::Head, X::Phrasing],
		"Content template",
	),
	element(
		"textarea",
		D::InlineBlock,
		E::EscapableRawText,
		&[C::Phrasing, C::Interactive, C::FormAssociated, C::Flow],
		&[X::Phrasing],
		"Text area",
	),
	element(
		"tfoot",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table footer",
	),
	element(
		"th",
		D::Table,
		E::Container,
		&[],
		&[X::Tr],
		"Table header cell",
	),
	element(
		"thead",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table header",
	),
	element(
		"time",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Date/time",
	),
	element(
		"title",
		D::None,
		E::EscapableRawText,
		&[C::Metadata],
		&[X::Head],
		"Document title",
	),
	element(
		"tr",
		D::Table,
		E::Container,
		&[],
		&[X::Table],
		"Table row",
	),
	element(
		"track",
		D::None,
		E::Void,
		&[],
		&[X::Audio, X::Video],
		"Media track",
	),
	element(
		"u",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Underlined text",
	),
	element(
		"ul",
		D::Block,
		E::Container,
		&[C::Flow],
		&[X::Flow],
		"Unordered list",
	),
	element(
		"var",
		D::Inline,
		E::Container,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Variable",
	),
	element(
		"video",
		D::InlineBlock,
		E::Container,
		&[C::Phrasing, C::Embedded, C::Interactive, C::Flow],
		&[X::Phrasing],
		"Video content",
	),
	element(
		"wbr",
		D::Inline,
		E::Void,
		&[C::Phrasing, C::Flow],
		&[X::Phrasing],
		"Line break opportunity",
	),
];
