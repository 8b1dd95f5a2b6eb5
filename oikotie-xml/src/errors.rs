#![allow(missing_docs)] // helper names should be good enough
//! Error type and helper functions to generate common errors

use std::io;

/// Errors raised while building or writing a document.
///
/// None of these are recoverable: they indicate a badly declared model, a badly constructed
/// instance or a failing output sink, and a build that fails produces no output at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The model declaration has no element name.
	#[error("{model}.Meta.element_name is not defined")]
	MissingElementName {
		/// Type name of the model
		model: String,
	},

	/// The model declaration has no default case.
	#[error("{model}.Meta.case is not defined")]
	MissingCase {
		/// Type name of the model
		model: String,
	},

	/// A formatter required a value that was not set.
	#[error("{model}.{field} is required but has no value")]
	MissingValue {
		/// Type name of the model
		model: String,
		/// Field name
		field: String,
	},

	/// A configuration setting needed for publishing is not set.
	#[error("setting {name} is not configured")]
	MissingSetting {
		/// Name of the environment variable
		name: &'static str,
	},

	/// Writing the document failed.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

pub fn missing_element_name(model: &str) -> Error {
	Error::MissingElementName { model: short_type_name(model).into() }
}

pub fn missing_case(model: &str) -> Error {
	Error::MissingCase { model: short_type_name(model).into() }
}

pub fn missing_value(model: &str, field: &str) -> Error {
	Error::MissingValue {
		model: short_type_name(model).into(),
		field: field.into(),
	}
}

pub fn missing_setting(name: &'static str) -> Error {
	Error::MissingSetting { name }
}

/// Strip the module path from `std::any::type_name` output.
fn short_type_name(name: &str) -> &str {
	name.rsplit("::").next().unwrap_or(name)
}
