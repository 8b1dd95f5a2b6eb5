#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/oikotie-xml/0.1.0")]
//! This library turns declared data structures into XML element trees for the Oikotie real-estate
//! portal: a user declares how a type maps to an element (tag, naming convention, which fields are
//! attributes, per-field overrides and formatters), and a generic builder walks the fields in
//! declaration order to produce the tree.
//!
//! The output shape is fixed by external RelaxNG schemas, so the builder is strict about ordering:
//! attributes and children appear in field declaration order, absent (`None`) fields produce
//! nothing, and lists of nested models are wrapped in an element named after the field unless a
//! formatter splices them flat.
//!
//! For the following XML handling crates adaptors are included if enabled through the equally
//! named features:
//! - [`quick-xml`](https://crates.io/crates/quick-xml)
//!
//! If the `derive` feature is enabled `Model` can be derived:
//!
//! ```ignore
//! #[derive(oikotie_xml::Model)]
//! #[model(element_name = "address", case = "kebab")]
//! pub struct Address {
//! 	pub street: String,
//! 	pub postal_code: String,
//! 	pub city: String,
//! }
//! ```
//!
//! serializes to `<address><street>..</street><postal-code>..</postal-code><city>..</city></address>`.

pub mod errors;
pub mod format;
pub mod model;
pub mod naming;
pub mod serializer;

#[cfg(feature = "derive")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
pub mod oikotie;

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;

#[cfg(all(feature = "derive", feature = "quick-xml"))]
#[cfg_attr(doc_cfg, doc(cfg(all(feature = "derive", feature = "quick-xml"))))]
pub mod config;

#[cfg(all(feature = "derive", feature = "quick-xml"))]
#[cfg_attr(doc_cfg, doc(cfg(all(feature = "derive", feature = "quick-xml"))))]
pub mod publish;

#[cfg(test)]
mod test_struct;

pub use self::{
	errors::Error,
	model::{
		Meta,
		Model,
	},
	naming::Case,
	serializer::{
		build_element,
		XmlNode,
	},
};

/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
#[cfg(feature = "derive")]
pub use oikotie_xml_derive::Model;
