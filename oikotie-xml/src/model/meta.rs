use crate::{
	errors,
	naming::Case,
	Result,
};

/// Declaration record of a model type.
///
/// Built once per type (usually as a `static`); related types share settings by copying a base
/// declaration with struct update syntax:
///
/// ```
/// use oikotie_xml::{Case, Meta};
///
/// const COST: Meta = Meta { case: Some(Case::Pascal), ..Meta::EMPTY };
/// static HEATING_COSTS: Meta = Meta { element_name: Some("HeatingCosts"), ..COST };
/// assert_eq!(HEATING_COSTS.case, Some(Case::Pascal));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Meta {
	/// Tag of the root element; required
	pub element_name: Option<&'static str>,
	/// Default naming convention for fields; required
	pub case: Option<Case>,
	/// Fields rendered as attributes of the root element
	pub attributes: &'static [&'static str],
	/// Per-field naming convention
	pub case_overrides: &'static [(&'static str, Case)],
	/// Per-field literal names, bypassing the naming convention
	pub element_name_overrides: &'static [(&'static str, &'static str)],
}

impl Meta {
	/// Declaration without any settings
	pub const EMPTY: Self = Self {
		element_name: None,
		case: None,
		attributes: &[],
		case_overrides: &[],
		element_name_overrides: &[],
	};

	/// Declaration with element name and case, no attributes or overrides
	pub const fn new(element_name: &'static str, case: Case) -> Self {
		Self {
			element_name: Some(element_name),
			case: Some(case),
			..Self::EMPTY
		}
	}

	/// Check that element name and case are declared.
	pub fn validate(&self, model: &str) -> Result<(&'static str, Case)> {
		let element_name = match self.element_name {
			Some(name) if !name.is_empty() => name,
			_ => return Err(errors::missing_element_name(model)),
		};
		let case = self.case.ok_or_else(|| errors::missing_case(model))?;
		Ok((element_name, case))
	}

	/// Whether the field is rendered as attribute
	pub fn is_attribute(&self, field: &str) -> bool {
		self.attributes.iter().any(|name| *name == field)
	}

	/// Naming convention override for the field
	pub fn case_override(&self, field: &str) -> Option<Case> {
		self.case_overrides
			.iter()
			.find(|(name, _)| *name == field)
			.map(|&(_, case)| case)
	}

	/// Literal name override for the field
	pub fn element_name_override(&self, field: &str) -> Option<&'static str> {
		self.element_name_overrides
			.iter()
			.find(|(name, _)| *name == field)
			.map(|&(_, element_name)| element_name)
	}
}

impl Default for Meta {
	fn default() -> Self {
		Self::EMPTY
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Error;

	#[test]
	fn validate_requires_element_name_and_case() {
		assert!(matches!(
			Meta::EMPTY.validate("Nameless"),
			Err(Error::MissingElementName { .. })
		));
		assert!(matches!(
			Meta { element_name: Some(""), ..Meta::new("x", Case::Kebab) }.validate("Empty"),
			Err(Error::MissingElementName { .. })
		));
		assert!(matches!(
			Meta { element_name: Some("thing"), ..Meta::EMPTY }.validate("Caseless"),
			Err(Error::MissingCase { .. })
		));
		assert_eq!(Meta::new("thing", Case::Camel).validate("Thing").unwrap(), ("thing", Case::Camel));
	}

	#[test]
	fn lookups() {
		let meta = Meta {
			attributes: &["type"],
			case_overrides: &[("type", Case::Camel)],
			element_name_overrides: &[("oikotie_id", "OikotieID")],
			..Meta::new("Apartment", Case::Pascal)
		};
		assert!(meta.is_attribute("type"));
		assert!(!meta.is_attribute("key"));
		assert_eq!(meta.case_override("type"), Some(Case::Camel));
		assert_eq!(meta.case_override("key"), None);
		assert_eq!(meta.element_name_override("oikotie_id"), Some("OikotieID"));
		assert_eq!(meta.element_name_override("type"), None);
	}
}
