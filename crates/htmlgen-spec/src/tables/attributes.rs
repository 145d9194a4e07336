//! Attribute classification table.
//!
//! Entries are keyed by `(name, scope)`. A name may appear under several
//! scopes (`type`, `size`); the generator disambiguates those with scope
//! suffixes instead of merging them.

use crate::descriptor::{AttributeDescriptor, attribute, enum_attribute};
use crate::model::{AttributeCategory as Cat, AttributeScope as S, AttributeType as T};

/// Every attribute known to the built-in vocabulary.
pub static ATTRIBUTES: &[AttributeDescriptor] = &[
	// Global
	attribute(
		"accesskey",
		T::String,
		S::Universal,
		&[Cat::Global],
		"Keyboard shortcut for element",
	),
	attribute(
		"class",
		T::TokenList,
		S::Universal,
		&[Cat::Global],
		"CSS class names",
	),
	enum_attribute(
		"contenteditable",
		S::Universal,
		&[Cat::Global],
		"Whether content is editable",
		&["true", "false", "plaintext-only"],
	),
	enum_attribute(
		"dir",
		S::Universal,
		&[Cat::Global],
		"Text directionality",
		&["ltr", "rtl", "auto"],
	),
	attribute(
		"draggable",
		T::Boolean,
		S::Universal,
		&[Cat::Global],
		"Whether element is draggable",
	),
	attribute(
		"hidden",
		T::Boolean,
		S::Universal,
		&[Cat::Global],
		"Whether element is hidden",
	),
	attribute(
		"id",
		T::String,
		S::Universal,
		&[Cat::Global],
		"Unique identifier",
	),
	attribute(
		"lang",
		T::Language,
		S::Universal,
		&[Cat::Global],
		"Language of element content",
	),
	attribute(
		"spellcheck",
		T::Boolean,
		S::Universal,
		&[Cat::Global],
		"Whether to check spelling",
	),
	attribute(
		"style",
		T::String,
		S::Universal,
		&[Cat::Global],
		"Inline CSS styles",
	),
	attribute(
		"tabindex",
		T::Number,
		S::Universal,
		&[Cat::Global],
		"Tab order for keyboard navigation",
	),
	attribute(
		"title",
		T::String,
		S::Universal,
		&[Cat::Global],
		"Advisory information about element",
	),
	enum_attribute(
		"translate",
		S::Universal,
		&[Cat::Global],
		"Whether content should be translated",
		&["yes", "no"],
	),

	// Custom data
	attribute(
		"data-*",
		T::String,
		S::Universal,
		&[Cat::Global, Cat::Data],
		"Custom data attributes",
	),

	// Event handlers
	attribute(
		"onclick",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Click event handler",
	),
	attribute(
		"onload",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Load event handler",
	),
	attribute(
		"onchange",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Change event handler",
	),
	attribute(
		"onsubmit",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Submit event handler",
	),
	attribute(
		"onfocus",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Focus event handler",
	),
	attribute(
		"onblur",
		T::Script,
		S::Universal,
		&[Cat::Global, Cat::Event],
		"Blur event handler",
	),

	// ARIA
	attribute(
		"aria-label",
		T::String,
		S::Universal,
		&[Cat::Accessibility],
		"Accessible name for element",
	),
	attribute(
		"aria-labelledby",
		T::TokenList,
		S::Universal,
		&[Cat::Accessibility],
		"IDs of elements that label this element",
	),
	attribute(
		"aria-describedby",
		T::TokenList,
		S::Universal,
		&[Cat::Accessibility],
		"IDs of elements that describe this element",
	),
	attribute(
		"aria-hidden",
		T::Boolean,
		S::Universal,
		&[Cat::Accessibility],
		"Whether element is hidden from assistive technology",
	),
	enum_attribute(
		"aria-expanded",
		S::Universal,
		&[Cat::Accessibility],
		"Whether collapsible element is expanded",
		&["true", "false", "undefined"],
	),

	// Forms
	attribute(
		"accept",
		T::CommaList,
		S::FormElements,
		&[Cat::Form],
		"File types the server accepts",
	),
	attribute(
		"accept-charset",
		T::TokenList,
		S::FormElements,
		&[Cat::Form],
		"Character encodings for form submission",
	),
	attribute(
		"action",
		T::Url,
		S::FormElements,
		&[Cat::Form],
		"URL for form submission",
	),
	enum_attribute(
		"autocomplete",
		S::FormElements,
		&[Cat::Form],
		"Whether form control should have autocomplete",
		&[
			"on",
			"off",
			"name",
			"email",
			"username",
			"current-password",
			"new-password",
		],
	),
	attribute(
		"autofocus",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether element should be focused on page load",
	),
	attribute(
		"checked",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether input is checked",
	),
	attribute(
		"disabled",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether form control is disabled",
	),
	enum_attribute(
		"enctype",
		S::FormElements,
		&[Cat::Form],
		"Encoding type for form submission",
		&[
			"application/x-www-form-urlencoded",
			"multipart/form-data",
			"text/plain",
		],
	),
	attribute(
		"for",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"ID of form control this label is for",
	),
	attribute(
		"form",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"ID of form this element belongs to",
	),
	attribute(
		"formaction",
		T::Url,
		S::FormElements,
		&[Cat::Form],
		"URL for form submission (overrides form action)",
	),
	enum_attribute(
		"formenctype",
		S::FormElements,
		&[Cat::Form],
		"Encoding type (overrides form enctype)",
		&[
			"application/x-www-form-urlencoded",
			"multipart/form-data",
			"text/plain",
		],
	),
	enum_attribute(
		"formmethod",
		S::FormElements,
		&[Cat::Form],
		"HTTP method (overrides form method)",
		&["get", "post"],
	),
	attribute(
		"formnovalidate",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Skip form validation on submission",
	),
	attribute(
		"formtarget",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Target for form submission (overrides form target)",
	),
	attribute(
		"max",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Maximum value for input",
	),
	attribute(
		"maxlength",
		T::Number,
		S::FormElements,
		&[Cat::Form],
		"Maximum number of characters",
	),
	enum_attribute(
		"method",
		S::FormElements,
		&[Cat::Form],
		"HTTP method for form submission",
		&["get", "post"],
	),
	attribute(
		"min",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Minimum value for input",
	),
	attribute(
		"minlength",
		T::Number,
		S::FormElements,
		&[Cat::Form],
		"Minimum number of characters",
	),
	attribute(
		"multiple",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether multiple values are allowed",
	),
	attribute(
		"name",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Name of form control",
	),
	attribute(
		"novalidate",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Skip form validation",
	),
	attribute(
		"pattern",
		T::Regex,
		S::FormElements,
		&[Cat::Form],
		"Regular expression for input validation",
	),
	attribute(
		"placeholder",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Placeholder text for input",
	),
	attribute(
		"readonly",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether form control is read-only",
	),
	attribute(
		"required",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether form control is required",
	),
	attribute(
		"selected",
		T::Boolean,
		S::FormElements,
		&[Cat::Form],
		"Whether option is selected",
	),
	attribute(
		"size",
		T::Number,
		S::FormElements,
		&[Cat::Form],
		"Size of form control",
	),
	attribute(
		"step",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Step value for numeric inputs",
	),
	enum_attribute(
		"target",
		S::FormElements,
		&[Cat::Form],
		"Target for form submission",
		&["_blank", "_self", "_parent", "_top"],
	),
	enum_attribute(
		"type",
		S::FormElements,
		&[Cat::Form],
		"Type of input control",
		&[
			"text",
			"password",
			"email",
			"url",
			"tel",
			"search",
			"number",
			"range",
			"date",
			"time",
			"datetime-local",
			"month",
			"week",
			"color",
			"file",
			"hidden",
			"checkbox",
			"radio",
			"submit",
			"reset",
			"button",
			"image",
		],
	),
	attribute(
		"value",
		T::String,
		S::FormElements,
		&[Cat::Form],
		"Value of form control",
	),

	// Media
	attribute(
		"alt",
		T::String,
		S::MediaElements,
		&[Cat::Media],
		"Alternative text for image",
	),
	attribute(
		"autoplay",
		T::Boolean,
		S::MediaElements,
		&[Cat::Media],
		"Whether media should autoplay",
	),
	attribute(
		"controls",
		T::Boolean,
		S::MediaElements,
		&[Cat::Media],
		"Whether media controls should be shown",
	),
	enum_attribute(
		"crossorigin",
		S::MediaElements,
		&[Cat::Media],
		"CORS settings for media",
		&["anonymous", "use-credentials"],
	),
	attribute(
		"height",
		T::Dimension,
		S::MediaElements,
		&[Cat::Media],
		"Height of media element",
	),
	attribute(
		"loop",
		T::Boolean,
		S::MediaElements,
		&[Cat::Media],
		"Whether media should loop",
	),
	attribute(
		"muted",
		T::Boolean,
		S::MediaElements,
		&[Cat::Media],
		"Whether media should be muted",
	),
	enum_attribute(
		"preload",
		S::MediaElements,
		&[Cat::Media],
		"How media should be preloaded",
		&["none", "metadata", "auto"],
	),
	attribute(
		"poster",
		T::Url,
		S::MediaElements,
		&[Cat::Media],
		"Poster image for video",
	),
	attribute(
		"src",
		T::Url,
		S::MediaElements,
		&[Cat::Media],
		"Source URL for media",
	),
	attribute(
		"srcset",
		T::String,
		S::MediaElements,
		&[Cat::Media],
		"Set of source images with descriptors",
	),
	attribute(
		"width",
		T::Dimension,
		S::MediaElements,
		&[Cat::Media],
		"Width of media element",
	),

	// Links
	attribute(
		"download",
		T::String,
		S::LinkElements,
		&[Cat::Link],
		"Filename for download",
	),
	attribute(
		"href",
		T::Url,
		S::LinkElements,
		&[Cat::Link],
		"Hyperlink reference",
	),
	attribute(
		"hreflang",
		T::Language,
		S::LinkElements,
		&[Cat::Link],
		"Language of linked resource",
	),
	attribute(
		"ping",
		T::TokenList,
		S::LinkElements,
		&[Cat::Link],
		"URLs to ping when link is followed",
	),
	enum_attribute(
		"referrerpolicy",
		S::LinkElements,
		&[Cat::Link],
		"Referrer policy for link",
		&[
			"no-referrer",
			"no-referrer-when-downgrade",
			"origin",
			"origin-when-cross-origin",
			"same-origin",
			"strict-origin",
			"strict-origin-when-cross-origin",
			"unsafe-url",
		],
	),
	enum_attribute(
		"rel",
		S::LinkElements,
		&[Cat::Link],
		"Relationship to linked resource",
		&[
			"alternate",
			"author",
			"bookmark",
			"canonical",
			"dns-prefetch",
			"external",
			"help",
			"icon",
			"license",
			"manifest",
			"next",
			"nofollow",
			"noopener",
			"noreferrer",
			"opener",
			"prev",
			"preconnect",
			"prefetch",
			"preload",
			"prerender",
			"search",
			"stylesheet",
			"tag",
		],
	),
	attribute(
		"sizes",
		T::TokenList,
		S::LinkElements,
		&[Cat::Link],
		"Sizes of linked resource (for icons)",
	),
	enum_attribute(
		"type",
		S::LinkElements,
		&[Cat::Link],
		"MIME type of linked resource",
		&[
			"text/css",
			"text/javascript",
			"image/x-icon",
			"application/rss+xml",
		],
	),

	// Tables
	attribute(
		"colspan",
		T::Number,
		S::TableElements,
		&[Cat::Table],
		"Number of columns cell spans",
	),
	attribute(
		"rowspan",
		T::Number,
		S::TableElements,
		&[Cat::Table],
		"Number of rows cell spans",
	),
	attribute(
		"headers",
		T::TokenList,
		S::TableElements,
		&[Cat::Table],
		"IDs of header cells for this cell",
	),
	enum_attribute(
		"scope",
		S::TableElements,
		&[Cat::Table],
		"Scope of header cell",
		&["row", "col", "rowgroup", "colgroup"],
	),
	attribute(
		"span",
		T::Number,
		S::TableElements,
		&[Cat::Table],
		"Number of columns in column group",
	),

	// Interactive
	attribute(
		"open",
		T::Boolean,
		S::InteractiveElements,
		&[Cat::Interactive],
		"Whether details element is open",
	),

	// Document metadata
	attribute(
		"charset",
		T::Charset,
		S::MetadataElements,
		&[Cat::Metadata],
		"Character encoding",
	),
	attribute(
		"content",
		T::String,
		S::MetadataElements,
		&[Cat::Metadata],
		"Value of meta element",
	),
	attribute(
		"http-equiv",
		T::String,
		S::MetadataElements,
		&[Cat::Metadata],
		"HTTP header name",
	),
	attribute(
		"media",
		T::String,
		S::MetadataElements,
		&[Cat::Metadata],
		"Media query for linked resource",
	),

	// Microdata
	attribute(
		"itemid",
		T::Url,
		S::Universal,
		&[Cat::Microdata],
		"Global identifier for microdata item",
	),
	attribute(
		"itemprop",
		T::TokenList,
		S::Universal,
		&[Cat::Microdata],
		"Microdata property names",
	),
	attribute(
		"itemref",
		T::TokenList,
		S::Universal,
		&[Cat::Microdata],
		"IDs of additional microdata properties",
	),
	attribute(
		"itemscope",
		T::Boolean,
		S::Universal,
		&[Cat::Microdata],
		"Whether element is microdata item",
	),
	attribute(
		"itemtype",
		T::Url,
		S::Universal,
		&[Cat::Microdata],
		"Microdata vocabulary URL",
	),

	// Element-specific
	attribute(
		"coords",
		T::CommaList,
		S::SpecificElements,
		&[],
		"Coordinates for area element",
	),
	enum_attribute(
		"shape",
		S::SpecificElements,
		&[],
		"Shape of area element",
		&["rect", "circle", "poly", "default"],
	),
	attribute(
		"usemap",
		T::String,
		S::SpecificElements,
		&[],
		"Name of image map to use",
	),
	enum_attribute(
		"wrap",
		S::SpecificElements,
		&[],
		"How text should wrap in textarea",
		&["soft", "hard"],
	),
	attribute(
		"rows",
		T::Number,
		S::SpecificElements,
		&[],
		"Number of rows in textarea",
	),
	attribute(
		"cols",
		T::Number,
		S::SpecificElements,
		&[],
		"Number of columns in textarea",
	),
	attribute(
		"start",
		T::Number,
		S::SpecificElements,
		&[],
		"Starting number for ordered list",
	),
	attribute(
		"reversed",
		T::Boolean,
		S::SpecificElements,
		&[],
		"Whether ordered list is reversed",
	),
	enum_attribute(
		"kind",
		S::SpecificElements,
		&[],
		"Kind of text track",
		&["subtitles", "captions", "descriptions", "chapters", "metadata"],
	),
	attribute(
		"srclang",
		T::Language,
		S::SpecificElements,
		&[],
		"Language of text track",
	),
	attribute(
		"label",
		T::String,
		S::SpecificElements,
		&[],
		"User-readable title for text track",
	),
	attribute(
		"default",
		T::Boolean,
		S::SpecificElements,
		&[],
		"Whether track should be enabled by default",
	),

	// Deprecated presentational attributes
	attribute(
		"align",
		T::String,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Alignment (deprecated, use CSS)",
	),
	attribute(
		"bgcolor",
		T::Color,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Background color (deprecated, use CSS)",
	),
	attribute(
		"border",
		T::Number,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Border width (deprecated, use CSS)",
	),
	attribute(
		"cellpadding",
		T::Number,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Cell padding (deprecated, use CSS)",
	),
	attribute(
		"cellspacing",
		T::Number,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Cell spacing (deprecated, use CSS)",
	),
	attribute(
		"color",
		T::Color,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Text color (deprecated, use CSS)",
	),
	attribute(
		"face",
		T::String,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Font face (deprecated, use CSS)",
	),
	attribute(
		"size",
		T::Number,
		S::SpecificElements,
		&[Cat::Deprecated],
		"Font size (deprecated, use CSS)",
	),
];
