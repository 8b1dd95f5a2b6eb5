use crate::{
	format,
	model::{
		Formatted,
		Model,
	},
};
use chrono::{
	NaiveDate,
	NaiveDateTime,
};
use rust_decimal::Decimal;
use std::borrow::Cow;

/// Raw value of a declared field.
pub enum FieldValue<'a> {
	/// Text, written verbatim
	Text(Cow<'a, str>),
	/// Written as vendor flag `K` / `E`
	Bool(bool),
	/// Integer
	Integer(i64),
	/// Float, shortest round-trip representation
	Float(f64),
	/// Decimal, canonical representation
	Decimal(Decimal),
	/// Date, `DD.MM.YYYY`
	Date(NaiveDate),
	/// Date and time, `YYYY-MM-DDTHH:MM:SS`
	DateTime(NaiveDateTime),
	/// Enum member, written as its vendor code
	Code(&'static str),
	/// Nested model, built recursively
	Nested(&'a dyn Model),
	/// Sequence of nested models, built recursively inside a wrapper element
	List(Vec<&'a dyn Model>),
}

impl<'a> FieldValue<'a> {
	/// Default formatting: nested models are kept, everything else becomes text.
	pub fn into_formatted(self) -> Formatted<'a> {
		match self {
			Self::Nested(model) => Formatted::Nested(model),
			Self::List(models) => Formatted::Models(models),
			Self::Text(text) => Formatted::Text(text.into_owned()),
			Self::Bool(value) => Formatted::Text(format::yes_no_bool(value).into()),
			Self::Integer(value) => Formatted::Text(value.to_string()),
			Self::Float(value) => Formatted::Text(format::format_float(value)),
			Self::Decimal(value) => Formatted::Text(value.to_string()),
			Self::Date(value) => Formatted::Text(format::format_date(&value)),
			Self::DateTime(value) => Formatted::Text(format::format_datetime(&value)),
			Self::Code(code) => Formatted::Text(code.into()),
		}
	}
}

/// Conversion of a stored field into a [`FieldValue`].
///
/// `None` means "absent". Deriving `Model` also implements this trait for the model type
/// (returning [`FieldValue::Nested`]), which makes models usable as fields of other models.
pub trait ToField {
	/// Current value, `None` if not set
	fn to_field(&self) -> Option<FieldValue<'_>>;
}

impl ToField for String {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Text(Cow::Borrowed(self)))
	}
}

impl ToField for Cow<'_, str> {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Text(Cow::Borrowed(self.as_ref())))
	}
}

impl ToField for bool {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Bool(*self))
	}
}

macro_rules! impl_to_field_int {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ToField for $ty {
				fn to_field(&self) -> Option<FieldValue<'_>> {
					Some(FieldValue::Integer(i64::from(*self)))
				}
			}
		)+
	};
}

impl_to_field_int!(i8, i16, i32, i64, u8, u16, u32);

impl ToField for f32 {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Float(f64::from(*self)))
	}
}

impl ToField for f64 {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Float(*self))
	}
}

impl ToField for Decimal {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Decimal(*self))
	}
}

impl ToField for NaiveDate {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::Date(*self))
	}
}

impl ToField for NaiveDateTime {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::DateTime(*self))
	}
}

/// Absent if `None`
impl<T: ToField> ToField for Option<T> {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		self.as_ref().and_then(ToField::to_field)
	}
}

/// Sequence of nested models; an empty list is present (but has no items)
impl<M: Model> ToField for Vec<M> {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		Some(FieldValue::List(
			self.iter().map(|model| model as &dyn Model).collect(),
		))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn text(value: Option<FieldValue<'_>>) -> String {
		match value.map(FieldValue::into_formatted) {
			Some(Formatted::Text(text)) => text,
			_ => panic!("expected text"),
		}
	}

	#[test]
	fn default_formatting() {
		assert_eq!(text("Kotikatu 1".to_string().to_field()), "Kotikatu 1");
		assert_eq!(text(true.to_field()), "K");
		assert_eq!(text(false.to_field()), "E");
		assert_eq!(text(42u32.to_field()), "42");
		assert_eq!(text(1.5f64.to_field()), "1.5");
		assert_eq!(text(Decimal::new(12345, 4).to_field()), "1.2345");
		let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
		assert_eq!(text(date.to_field()), "01.01.2020");
		assert_eq!(text(date.and_hms_opt(12, 0, 0).unwrap().to_field()), "2020-01-01T12:00:00");
	}

	#[test]
	fn none_is_absent() {
		assert!(None::<String>.to_field().is_none());
		assert!(Some(3i32).to_field().is_some());
	}
}
