//! Derive `oikotie-xml` model declarations
//!
//! Deriving supports the following attributes on the struct:
//! - `#[model(element_name = "...")]`: tag of the element
//! - `#[model(case = "pascal" | "kebab" | "camel")]`: default naming convention of the fields
//! - `#[model(to_node = "path")]`: function `fn(&Self) -> Result<XmlNode>` building the whole
//!   element instead of the generic builder
//! - `#[model(crate = "...")]`: Name of `oikotie-xml` crate in local scope; defaults to
//!   `oikotie_xml`
//!
//! Element name and case are checked when an instance is built, not at compile time; a missing
//! one is reported as configuration error.
//!
//! And the following attributes on struct fields:
//! - `#[model(attribute)]`: Render field as attribute of the element
//! - `#[model(case = "...")]`: Naming convention for this field
//! - `#[model(rename = "...")]`: Literal attribute/element name for this field
//! - `#[model(name = "...")]`: Canonical snake_case name if it differs from the Rust identifier
//!   (e.g. `type`)
//! - `#[model(format)]`: Format the field with `Self::format_<field>(&self)`
//! - `#[model(format = "path")]`: Format the field with `path(&self)`
//!
//! Formatters return `Result<Formatted<'_>>`.
//!
//! Fields are serialized in declaration order. Every field type must implement
//! `oikotie_xml::model::ToField`; the derive implements it for the model itself, so derived
//! models can be nested.
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/oikotie-xml-derive/0.1.0")]

extern crate proc_macro;

mod element;
mod serialize;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{
	parse_macro_input,
	DeriveInput,
};

use crate::element::ModelInput;

/// Derive `oikotie_xml::Model` and `oikotie_xml::model::ToField`
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match ModelInput::from_derive_input(&input) {
		Ok(input) => serialize::derive_model(&input),
		Err(e) => e.write_errors(),
	})
}
