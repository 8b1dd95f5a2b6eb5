use darling::{
	ast,
	util::{
		Flag,
		Override,
	},
	FromDeriveInput,
	FromField,
	FromMeta,
};
use syn::{
	ext::IdentExt,
	parse_quote,
	Generics,
	Ident,
	Path,
};

/// Naming convention as written in the attribute
#[derive(Clone, Copy, Debug)]
pub enum CaseArg {
	Pascal,
	Kebab,
	Camel,
}

impl FromMeta for CaseArg {
	fn from_string(value: &str) -> darling::Result<Self> {
		match value {
			"pascal" | "PASCAL" => Ok(Self::Pascal),
			"kebab" | "KEBAB" => Ok(Self::Kebab),
			"camel" | "CAMEL" => Ok(Self::Camel),
			_ => Err(darling::Error::unknown_value(value)),
		}
	}
}

/// A field on the deriving struct.
#[derive(FromField)]
#[darling(attributes(model))]
pub struct ModelField {
	pub ident: Option<Ident>,
	/// Render as attribute instead of child element
	#[darling(default)]
	pub attribute: Flag,
	pub case: Option<CaseArg>,
	/// Literal XML name
	pub rename: Option<String>,
	/// Canonical snake_case name
	pub name: Option<String>,
	pub format: Option<Override<Path>>,
}

impl ModelField {
	pub fn ident(&self) -> &Ident {
		self.ident
			.as_ref()
			.expect("darling only accepts named fields")
	}

	/// Canonical name used for naming and formatter lookup
	pub fn name(&self) -> String {
		match &self.name {
			Some(name) => name.clone(),
			None => self.ident().unraw().to_string(),
		}
	}
}

fn default_crate_path() -> Path {
	parse_quote!(oikotie_xml)
}

#[derive(FromDeriveInput)]
#[darling(attributes(model), supports(struct_named))]
pub struct ModelInput {
	pub ident: Ident,
	pub generics: Generics,
	pub data: ast::Data<(), ModelField>,
	pub element_name: Option<String>,
	pub case: Option<CaseArg>,
	pub to_node: Option<Path>,
	#[darling(rename = "crate", default = "default_crate_path")]
	pub oikotie_xml_crate: Path,
}

impl ModelInput {
	/// The fields of the input struct, in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &ModelField> {
		self.data
			.as_ref()
			.take_struct()
			.expect("darling only accepts structs")
			.into_iter()
	}
}
