//! Attribute accessor generation.

use std::collections::BTreeSet;

use htmlgen_spec::{AttributeDescriptor, AttributeType, EnumValues};

use crate::conflict::{ConflictResolver, ResolvedName};
use crate::error::Result;
use crate::ir::{Accessor, Arg, Body, Constructor, Param, ParamKind, Source};

/// Tri-state value set whose default is `false`.
const TRI_STATE: &[&str] = &["true", "false", "undefined"];

/// Values taken as the default when present, in priority order.
pub const SAFE_DEFAULTS: &[&str] = &["false", "no", "off"];

/// Conventional defaults of well-known enumerated attributes.
pub const CONVENTIONAL_DEFAULTS: &[(&str, &str)] = &[
	("target", "_self"),
	("dir", "ltr"),
	("contenteditable", "false"),
	("crossorigin", "anonymous"),
	("preload", "metadata"),
	("method", "get"),
];

const VALUE: Param = Param::new("value", ParamKind::String);
const ENABLED: Param = Param::new("enabled", ParamKind::Boolean);

/// Picks the value used by the zero-argument convenience accessor.
///
/// Returns `None` only for an empty value set.
pub fn default_enum_value<'v>(name: &str, values: &'v EnumValues) -> Option<&'v str> {
	let present: BTreeSet<&str> = values.iter().collect();
	if present.len() == TRI_STATE.len() && TRI_STATE.iter().all(|v| present.contains(v)) {
		return values.iter().find(|v| *v == "false");
	}
	if let Some(safe) = SAFE_DEFAULTS.iter().find(|v| present.contains(*v)) {
		return values.iter().find(|v| v == safe);
	}
	let conventional = CONVENTIONAL_DEFAULTS
		.iter()
		.find(|(attribute, value)| *attribute == name && present.contains(value));
	if let Some((_, value)) = conventional {
		return values.iter().find(|v| v == value);
	}
	present.first().and_then(|min| values.iter().find(|v| v == min))
}

/// Builds the overload set of one attribute entry.
///
/// Open-ended entries must be filtered out by the caller; see
/// [`is_open_ended`](crate::naming::is_open_ended).
pub fn generate_attribute_accessors(
	descriptor: &AttributeDescriptor,
	resolver: &ConflictResolver<'_>,
) -> Result<Vec<Accessor>> {
	let mut names = resolver.resolve(descriptor)?.into_iter();
	let Some(general) = names.next() else {
		return Ok(Vec::new());
	};
	let values: Vec<_> = names.collect();

	let accessors = match descriptor.value_type {
		AttributeType::Boolean => boolean_accessors(descriptor, &general),
		AttributeType::Enum => enum_accessors(descriptor, &general, &values),
		AttributeType::String
		| AttributeType::Number
		| AttributeType::Url
		| AttributeType::TokenList
		| AttributeType::CommaList
		| AttributeType::Color
		| AttributeType::Dimension
		| AttributeType::Language
		| AttributeType::Charset
		| AttributeType::Regex
		| AttributeType::Script => vec![string_accessor(descriptor, &general)],
	};
	Ok(accessors)
}

fn source(descriptor: &AttributeDescriptor) -> Source {
	Source::Attribute {
		name: descriptor.name.to_string(),
		scope: descriptor.scope,
	}
}

fn literal(descriptor: &AttributeDescriptor) -> Arg {
	Arg::Literal(descriptor.name.to_string())
}

fn summary(descriptor: &AttributeDescriptor) -> String {
	if descriptor.description.is_empty() {
		format!("`{}` attribute", descriptor.name)
	} else {
		format!("{} (`{}`)", descriptor.description, descriptor.name)
	}
}

/// Appends the scope argument when the accessor is scoped.
fn with_scope(descriptor: &AttributeDescriptor, scoped: bool, mut args: Vec<Arg>) -> Vec<Arg> {
	if scoped {
		args.push(Arg::Scope(descriptor.scope));
	}
	args
}

fn string_accessor(descriptor: &AttributeDescriptor, general: &ResolvedName) -> Accessor {
	let constructor = if general.scoped {
		Constructor::ScopedStringAttribute
	} else {
		Constructor::StringAttribute
	};
	let args = with_scope(
		descriptor,
		general.scoped,
		vec![literal(descriptor), Arg::Param(VALUE.name)],
	);
	Accessor::new(
		general.accessor.clone(),
		vec![VALUE],
		Body::new(constructor, args),
		format!("{}.", summary(descriptor)),
		source(descriptor),
	)
}

fn boolean_accessors(descriptor: &AttributeDescriptor, general: &ResolvedName) -> Vec<Accessor> {
	let constructor = if general.scoped {
		Constructor::ScopedBooleanAttribute
	} else {
		Constructor::BooleanAttribute
	};
	let present = Accessor::new(
		general.accessor.clone(),
		vec![],
		Body::new(
			constructor,
			with_scope(descriptor, general.scoped, vec![literal(descriptor), Arg::Bool(true)]),
		),
		format!("{}, present.", summary(descriptor)),
		source(descriptor),
	);
	let conditional = Accessor::new(
		general.accessor.clone(),
		vec![ENABLED],
		Body::new(
			constructor,
			with_scope(
				descriptor,
				general.scoped,
				vec![literal(descriptor), Arg::Param(ENABLED.name)],
			),
		),
		format!("{}, present when `{}` is true.", summary(descriptor), ENABLED.name),
		source(descriptor),
	);
	vec![present, conditional]
}

fn enum_accessors(
	descriptor: &AttributeDescriptor,
	general: &ResolvedName,
	values: &[ResolvedName],
) -> Vec<Accessor> {
	let mut accessors = Vec::with_capacity(values.len() + 2);

	for factory in values {
		let Some(value) = factory.value.as_deref() else {
			continue;
		};
		let constructor = if factory.scoped {
			Constructor::ScopedEnumAttribute
		} else {
			Constructor::EnumAttribute
		};
		accessors.push(Accessor::new(
			factory.accessor.clone(),
			vec![],
			Body::new(
				constructor,
				with_scope(
					descriptor,
					factory.scoped,
					vec![literal(descriptor), Arg::Literal(value.to_string())],
				),
			),
			format!("{} set to `{}`.", summary(descriptor), value),
			source(descriptor),
		));
	}

	let constructor = if general.scoped {
		Constructor::ScopedEnumAttribute
	} else {
		Constructor::EnumAttribute
	};
	let allowed: Vec<_> = descriptor.enum_values.iter().collect();
	accessors.push(Accessor::new(
		general.accessor.clone(),
		vec![VALUE],
		Body::new(
			constructor,
			with_scope(
				descriptor,
				general.scoped,
				vec![literal(descriptor), Arg::Param(VALUE.name)],
			),
		),
		format!(
			"{} with an arbitrary value. Known values: {}.",
			summary(descriptor),
			allowed.join(", ")
		),
		source(descriptor),
	));

	if !general.scoped
		&& let Some(default) = default_enum_value(&descriptor.name, &descriptor.enum_values)
	{
		accessors.push(Accessor::new(
			general.accessor.clone(),
			vec![],
			Body::new(
				Constructor::EnumAttribute,
				vec![literal(descriptor), Arg::Literal(default.to_string())],
			),
			format!("{} with its default value `{}`.", summary(descriptor), default),
			source(descriptor),
		));
	}
	accessors
}

/// Fixed accessors covering wildcard and event handler attributes.
pub fn open_ended_accessors() -> Vec<Accessor> {
	const KEY: Param = Param::new("name", ParamKind::String);
	const EVENT: Param = Param::new("event", ParamKind::String);
	const HANDLER: Param = Param::new("handler", ParamKind::String);

	vec![
		Accessor::new(
			"data",
			vec![KEY, VALUE],
			Body::new(
				Constructor::StringAttribute,
				vec![
					Arg::Prefixed {
						prefix: "data-",
						param: KEY.name,
					},
					Arg::Param(VALUE.name),
				],
			),
			"Custom data attribute `data-{name}`.",
			Source::Fixed("data"),
		),
		Accessor::new(
			"event",
			vec![EVENT, HANDLER],
			Body::new(
				Constructor::StringAttribute,
				vec![
					Arg::Prefixed {
						prefix: "on",
						param: EVENT.name,
					},
					Arg::Param(HANDLER.name),
				],
			),
			"Inline event handler attribute `on{event}`.",
			Source::Fixed("event"),
		),
		Accessor::new(
			"xmlns",
			vec![VALUE],
			Body::new(
				Constructor::StringAttribute,
				vec![Arg::Literal("xmlns".to_string()), Arg::Param(VALUE.name)],
			),
			"XML namespace declaration (`xmlns`).",
			Source::Fixed("xmlns"),
		),
	]
}
