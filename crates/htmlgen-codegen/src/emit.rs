//! Rust source emitter.
//!
//! Renders a [`GenerationPlan`] as four Rust files: element accessors,
//! attribute accessors, metadata lookups and a `mod.rs` tying them together.
//! Rust has no overloading, so every overload set is spelled as a family of
//! snake_case functions distinguished by the parameter shape:
//!
//! | shape | function |
//! |---|---|
//! | children / attributes / string / pair | `name` |
//! | iterable children | `name_iter` |
//! | text children | `name_text` |
//! | element without content | `name_empty` |
//! | zero-argument attribute next to a string overload | `default_name` |
//! | boolean argument | `name_if` |
//!
//! Enum value factories already carry the value in their name
//! (`dir_ltr`), so the convenience accessor takes a prefix instead of a
//! suffix that a value could produce.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use convert_case::{Boundary, Case, Converter};
use htmlgen_spec::{AttributeScope, ContentCategory, Context};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use crate::ir::{Accessor, Arg, AttributeKind, ParamKind, ReturnKind};
use crate::metadata::{MetadataKind, MetadataMap, MetadataValue};
use crate::plan::GenerationPlan;

/// Generated output containing all files of one run.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
	/// Generated files
	pub files: Vec<GeneratedFile>,
}

impl GeneratedOutput {
	/// Create a new empty output.
	pub fn new() -> Self {
		Self { files: Vec::new() }
	}

	/// Add a file to the output.
	pub fn add_file(&mut self, file: GeneratedFile) {
		self.files.push(file);
	}

	/// Find a file by its file name, e.g. `"elements.rs"`.
	pub fn file(&self, file_name: &str) -> Option<&GeneratedFile> {
		self.files
			.iter()
			.find(|file| file.path.file_name().is_some_and(|name| name == file_name))
	}
}

impl Default for GeneratedOutput {
	fn default() -> Self {
		Self::new()
	}
}

/// A single generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
	/// Path where the file should be written
	pub path: PathBuf,
	/// File content
	pub content: String,
}

impl GeneratedFile {
	/// Create a new generated file.
	pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
		}
	}
}

/// Emits Rust source for a generation plan.
pub struct RustEmitter {
	config: GeneratorConfig,
}

impl RustEmitter {
	pub fn new(config: GeneratorConfig) -> Self {
		Self { config }
	}

	/// Render every file of `plan`.
	///
	/// # Errors
	///
	/// Fails if a configured path or module name is not valid Rust, if two
	/// accessors map to the same function name, or if the generated tokens do
	/// not form a valid file.
	pub fn emit(&self, plan: &GenerationPlan) -> Result<GeneratedOutput> {
		let emit = &self.config.emit;
		let runtime = parse_path("runtime_path", &emit.runtime_path)?;
		let spec = parse_path("spec_path", &emit.spec_path)?;
		let elements_module = parse_module("elements_module", &emit.elements_module)?;
		let attributes_module = parse_module("attributes_module", &emit.attributes_module)?;
		let metadata_module = parse_module("metadata_module", &emit.metadata_module)?;

		let mut output = GeneratedOutput::new();
		output.add_file(self.generate_accessor_file(
			&emit.elements_module,
			&plan.elements,
			&runtime,
			&spec,
		)?);
		output.add_file(self.generate_accessor_file(
			&emit.attributes_module,
			&plan.attributes,
			&runtime,
			&spec,
		)?);
		output.add_file(self.generate_metadata_file(&plan.metadata, &spec)?);
		output.add_file(self.generate_mod_file(&[
			elements_module,
			attributes_module,
			metadata_module,
		])?);
		Ok(output)
	}

	fn generate_accessor_file(
		&self,
		module: &str,
		accessors: &[Accessor],
		runtime: &syn::Path,
		spec: &syn::Path,
	) -> Result<GeneratedFile> {
		let names = rust_function_names(accessors)?;
		let functions = accessors
			.iter()
			.zip(&names)
			.map(|(accessor, name)| self.generate_function(accessor, name));

		let uses_scope = accessors
			.iter()
			.flat_map(|accessor| &accessor.body.args)
			.any(|arg| matches!(arg, Arg::Scope(_)));
		let scope_import = uses_scope.then(|| quote! { use #spec::AttributeScope; });

		let header = self.generate_header();
		let tokens = quote! {
			#header

			use #runtime as rt;
			#scope_import

			#(#functions)*
		};

		self.write_file(module, tokens)
	}

	fn generate_function(&self, accessor: &Accessor, name: &str) -> TokenStream {
		let ident = format_ident!("{}", name);
		let docs = self.doc_attribute(&accessor.doc);
		let params = accessor.params.iter().map(|param| {
			let param_ident = format_ident!("{}", param.name);
			let ty = param_type(param.kind);
			quote! { #param_ident: #ty }
		});
		let returns = return_type(accessor.returns);
		let constructor = format_ident!("{}", accessor.body.constructor.function_name());
		let mut args: Vec<TokenStream> = accessor
			.body
			.args
			.iter()
			.map(|arg| arg_tokens(arg, accessor))
			.collect();
		if accessor.body.constructor.is_element() && accessor.body.args.len() == 1 {
			let item = if matches!(
				accessor.returns,
				ReturnKind::BlockVoid | ReturnKind::InlineVoid
			) {
				quote!(rt::Attribute)
			} else {
				quote!(rt::Fragment)
			};
			args.push(quote!(::core::iter::empty::<#item>()));
		}

		quote! {
			#docs
			pub fn #ident(#(#params),*) -> #returns {
				rt::#constructor(#(#args),*)
			}
		}
	}

	fn generate_metadata_file(&self, maps: &[MetadataMap], spec: &syn::Path) -> Result<GeneratedFile> {
		let lookups = maps.iter().map(|map| self.generate_lookup(map));
		let header = self.generate_header();
		let tokens = quote! {
			#header

			#[allow(unused_imports)]
			use #spec::{ContentCategory, Context, DisplayType, ElementType};

			#(#lookups)*
		};
		self.write_file(&self.config.emit.metadata_module, tokens)
	}

	fn generate_lookup(&self, map: &MetadataMap) -> TokenStream {
		let getter = format_ident!("{}", map.kind.getter_name());
		let (doc, returns, fallback) = match map.kind {
			MetadataKind::ContentCategories => (
				"Content categories of the element `name`; empty if unknown.",
				quote!(&'static [ContentCategory]),
				quote!(&[]),
			),
			MetadataKind::DisplayType => (
				"Display type of the element `name`.",
				quote!(Option<DisplayType>),
				quote!(None),
			),
			MetadataKind::ElementType => (
				"Element type of the element `name`.",
				quote!(Option<ElementType>),
				quote!(None),
			),
			MetadataKind::ValidContexts => (
				"Parent contexts of the element `name`; empty if unknown.",
				quote!(&'static [Context]),
				quote!(&[]),
			),
		};
		let docs = self.doc_attribute(doc);
		let arms = map.entries.iter().map(|(name, value)| {
			let value = metadata_value_tokens(value);
			quote! { #name => #value, }
		});

		quote! {
			#docs
			pub fn #getter(name: &str) -> #returns {
				match name {
					#(#arms)*
					_ => #fallback,
				}
			}
		}
	}

	fn generate_mod_file(&self, modules: &[syn::Ident]) -> Result<GeneratedFile> {
		let header = self.generate_header();
		let tokens = quote! {
			#header

			#(pub mod #modules;)*
		};
		self.write_file("mod", tokens)
	}

	/// Generate the file header as inner doc attributes.
	fn generate_header(&self) -> TokenStream {
		let comment1 = " Generated by `htmlgen` - DO NOT EDIT";
		let comment2 = "";
		let comment3 = " To regenerate, run:";
		let comment4 = "   htmlgen generate";

		quote! {
			#![doc = #comment1]
			#![doc = #comment2]
			#![doc = #comment3]
			#![doc = #comment4]
		}
	}

	fn doc_attribute(&self, doc: &str) -> Option<TokenStream> {
		if !self.config.emit.include_docs || doc.is_empty() {
			return None;
		}
		let doc = format!(" {}", doc);
		Some(quote! { #[doc = #doc] })
	}

	fn write_file(&self, module: &str, tokens: TokenStream) -> Result<GeneratedFile> {
		let file_name = format!("{}.rs", module);
		let content = format_tokens(&file_name, tokens)?;
		debug!(file = %file_name, bytes = content.len(), "rendered file");
		let path = self.config.output.directory.join(file_name);
		Ok(GeneratedFile::new(path, content))
	}
}

/// Picks the Rust function name of every accessor, in order.
///
/// # Errors
///
/// Returns [`CodegenError::DuplicateAccessor`] if two accessors end up with
/// the same function name, or [`CodegenError::UnresolvableIdentifier`] if a
/// name is not a usable Rust identifier.
pub fn rust_function_names(accessors: &[Accessor]) -> Result<Vec<String>> {
	let with_string_overload: HashSet<&str> = accessors
		.iter()
		.filter(|accessor| accessor.shape() == [ParamKind::String])
		.map(|accessor| accessor.name.as_str())
		.collect();

	let converter = Converter::new()
		.set_boundaries(&[Boundary::LowerUpper, Boundary::DigitUpper])
		.to_case(Case::Snake);

	let mut taken: HashMap<String, &Accessor> = HashMap::with_capacity(accessors.len());
	let mut names = Vec::with_capacity(accessors.len());
	for accessor in accessors {
		let name = function_name(
			&converter.convert(&accessor.name),
			accessor,
			with_string_overload.contains(accessor.name.as_str()),
		);
		if syn::parse_str::<syn::Ident>(&name).is_err() {
			return Err(CodegenError::UnresolvableIdentifier {
				raw: accessor.name.clone(),
				reason: "function name is not a valid Rust identifier",
			});
		}
		if let Some(first) = taken.insert(name.clone(), accessor) {
			return Err(CodegenError::DuplicateAccessor {
				accessor: name,
				first: first.source.to_string(),
				second: accessor.source.to_string(),
			});
		}
		names.push(name);
	}
	Ok(names)
}

fn function_name(base: &str, accessor: &Accessor, has_string_overload: bool) -> String {
	match accessor.shape().as_slice() {
		[ParamKind::IterableFragments] => format!("{}_iter", base),
		[ParamKind::VariadicText] => format!("{}_text", base),
		[] if accessor.returns.is_element() => format!("{}_empty", base),
		[] if has_string_overload => format!("default_{}", base),
		[ParamKind::Boolean] => format!("{}_if", base),
		_ => base.to_string(),
	}
}

fn param_type(kind: ParamKind) -> TokenStream {
	match kind {
		ParamKind::VariadicFragments => quote!(Vec<rt::Fragment>),
		ParamKind::IterableFragments => quote!(impl IntoIterator<Item = rt::Fragment>),
		ParamKind::VariadicText => quote!(&[&str]),
		ParamKind::VariadicAttributes => quote!(Vec<rt::Attribute>),
		ParamKind::String => quote!(impl Into<String>),
		ParamKind::Boolean => quote!(bool),
	}
}

fn return_type(kind: ReturnKind) -> TokenStream {
	match kind {
		ReturnKind::BlockContainer => quote!(rt::BlockContainerElement),
		ReturnKind::InlineContainer => quote!(rt::InlineContainerElement),
		ReturnKind::BlockVoid => quote!(rt::BlockVoidElement),
		ReturnKind::InlineVoid => quote!(rt::InlineVoidElement),
		ReturnKind::Attribute(AttributeKind::String) => quote!(rt::HtmlAttribute),
		ReturnKind::Attribute(AttributeKind::Boolean) => quote!(rt::BooleanAttribute),
		ReturnKind::Attribute(AttributeKind::Enum) => quote!(rt::EnumAttribute),
		ReturnKind::Attribute(AttributeKind::ScopedString) => quote!(rt::ScopedHtmlAttribute),
		ReturnKind::Attribute(AttributeKind::ScopedBoolean) => quote!(rt::ScopedBooleanAttribute),
		ReturnKind::Attribute(AttributeKind::ScopedEnum) => quote!(rt::ScopedEnumAttribute),
	}
}

fn arg_tokens(arg: &Arg, accessor: &Accessor) -> TokenStream {
	match arg {
		Arg::Literal(text) => quote!(#text),
		Arg::Bool(value) => quote!(#value),
		Arg::Scope(scope) => scope_tokens(*scope),
		Arg::Param(name) => {
			let ident = format_ident!("{}", name);
			match accessor.param(name).map(|param| param.kind) {
				Some(ParamKind::VariadicText) => {
					quote!(#ident.iter().copied().map(rt::Fragment::from))
				}
				_ => quote!(#ident),
			}
		}
		Arg::Prefixed { prefix, param } => {
			let ident = format_ident!("{}", param);
			let template = format!("{}{{}}", prefix);
			quote!({
				let #ident: String = #ident.into();
				format!(#template, #ident)
			})
		}
	}
}

fn scope_tokens(scope: AttributeScope) -> TokenStream {
	let variant = format_ident!("{}", scope.variant_name());
	quote!(AttributeScope::#variant)
}

fn metadata_value_tokens(value: &MetadataValue) -> TokenStream {
	match value {
		MetadataValue::Categories(categories) => {
			let variants = categories.iter().map(|c: &ContentCategory| {
				let variant = format_ident!("{}", c.variant_name());
				quote!(ContentCategory::#variant)
			});
			quote!(&[#(#variants),*])
		}
		MetadataValue::Display(display) => {
			let variant = format_ident!("{}", display.variant_name());
			quote!(Some(DisplayType::#variant))
		}
		MetadataValue::Element(element) => {
			let variant = format_ident!("{}", element.variant_name());
			quote!(Some(ElementType::#variant))
		}
		MetadataValue::Contexts(contexts) => {
			let variants = contexts.iter().map(|c: &Context| {
				let variant = format_ident!("{}", c.variant_name());
				quote!(Context::#variant)
			});
			quote!(&[#(#variants),*])
		}
	}
}

fn parse_path(setting: &'static str, path: &str) -> Result<syn::Path> {
	syn::parse_str::<syn::Path>(path).map_err(|e| CodegenError::InvalidPath {
		setting,
		path: path.to_string(),
		message: e.to_string(),
	})
}

fn parse_module(setting: &'static str, name: &str) -> Result<syn::Ident> {
	syn::parse_str::<syn::Ident>(name).map_err(|e| CodegenError::InvalidPath {
		setting,
		path: name.to_string(),
		message: e.to_string(),
	})
}

/// Format generated tokens with prettyplease.
fn format_tokens(file_name: &str, tokens: TokenStream) -> Result<String> {
	let syntax_tree = syn::parse2::<syn::File>(tokens).map_err(|e| CodegenError::Format {
		file: file_name.to_string(),
		message: e.to_string(),
	})?;

	Ok(prettyplease::unparse(&syntax_tree))
}
