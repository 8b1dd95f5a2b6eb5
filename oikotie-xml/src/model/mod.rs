//! Traits and helper types to declare how a type maps to an XML element
//!
//! A serializable type implements [`Model`] (usually derived): it hands out its static [`Meta`]
//! declaration, its fields in declaration order and, optionally, custom formatters for single
//! fields or a custom node for the whole instance.
//!
//! Field values are converted with [`ToField`]; nested models implement it to return
//! themselves, so they are handled structurally instead of being stringified.

mod core;
mod formatted;
mod meta;
mod value;

pub use self::{
	core::{
		Field,
		Model,
	},
	formatted::Formatted,
	meta::Meta,
	value::{
		FieldValue,
		ToField,
	},
};
