use crate::{
	errors,
	model::{
		FieldValue,
		Formatted,
		Meta,
	},
	serializer::XmlNode,
	Result,
};

/// A declared field of a model instance: canonical snake_case name and current value.
pub struct Field<'a> {
	/// Canonical (snake_case) field name; input for naming and formatter lookup
	pub name: &'static str,
	/// `None` if the field is not set; such fields produce no output
	pub value: Option<FieldValue<'a>>,
}

impl<'a> Field<'a> {
	/// New field
	pub fn new(name: &'static str, value: Option<FieldValue<'a>>) -> Self {
		Self { name, value }
	}
}

/// Type that can be serialized to an XML element.
///
/// Can be derived (if `derive` feature is active).
pub trait Model {
	/// Static declaration: element name, default case, attribute fields and overrides
	fn meta(&self) -> &'static Meta;

	/// All declared fields in declaration order; the order is the output order.
	fn fields(&self) -> Vec<Field<'_>>;

	/// Custom formatter for a field; `None` means the default formatting is used.
	///
	/// Only called for fields that have a value.
	fn format_field(&self, _name: &str) -> Option<Result<Formatted<'_>>> {
		None
	}

	/// Custom node for the whole instance, replacing the generic builder.
	fn to_node(&self) -> Option<Result<XmlNode>> {
		None
	}

	/// Name used in error messages
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Unwrap an optional field inside a formatter, failing with a data error if it is unset.
	fn required<'a, T>(&self, value: &'a Option<T>, field: &str) -> Result<&'a T>
	where
		Self: Sized,
	{
		value
			.as_ref()
			.ok_or_else(|| errors::missing_value(self.type_name(), field))
	}
}
