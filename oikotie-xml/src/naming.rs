//! Naming conventions for turning snake_case field names into XML names

/// Casing convention applied to a snake_case field name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Case {
	/// `street_address` -> `StreetAddress`
	#[default]
	Pascal,
	/// `street_address` -> `street-address`
	Kebab,
	/// `street_address` -> `streetAddress`
	Camel,
}

/// Transform a snake_case name into the given case.
///
/// Pascal case uses "title" semantics: a letter is uppercased when it follows a non-letter
/// (start of name, `_` or a digit) and lowercased otherwise, then underscores are dropped.
/// Camel case keeps the first segment as is and only uppercases the first character of every
/// following segment.
pub fn transform_name(name: &str, case: Case) -> String {
	match case {
		Case::Kebab => name.replace('_', "-"),
		Case::Camel => {
			let mut parts = name.split('_');
			let mut result = String::with_capacity(name.len());
			result.push_str(parts.next().unwrap_or_default());
			for part in parts {
				let mut chars = part.chars();
				if let Some(first) = chars.next() {
					result.extend(first.to_uppercase());
					result.push_str(chars.as_str());
				}
			}
			result
		},
		Case::Pascal => {
			let mut result = String::with_capacity(name.len());
			let mut previous_cased = false;
			for c in name.chars() {
				if c.is_alphabetic() {
					if previous_cased {
						result.extend(c.to_lowercase());
					} else {
						result.extend(c.to_uppercase());
					}
					previous_cased = true;
				} else {
					previous_cased = false;
					if c != '_' {
						result.push(c);
					}
				}
			}
			result
		},
	}
}
