use proc_macro2::TokenStream;
use quote::{
	format_ident,
	quote,
	quote_spanned,
	ToTokens,
	TokenStreamExt,
};
use syn::{
	spanned::Spanned,
	Path,
};

use crate::element::{
	CaseArg,
	ModelField,
	ModelInput,
};

struct CaseTokens<'a> {
	case: CaseArg,
	oikotie_xml_crate: &'a Path,
}

impl ToTokens for CaseTokens<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let oikotie_xml_crate = self.oikotie_xml_crate;
		let variant = match self.case {
			CaseArg::Pascal => quote!(Pascal),
			CaseArg::Kebab => quote!(Kebab),
			CaseArg::Camel => quote!(Camel),
		};
		tokens.append_all(quote!(#oikotie_xml_crate::Case::#variant));
	}
}

/// Entry of the `fields()` list
struct ModelFieldValue<'a> {
	data: &'a ModelField,
	oikotie_xml_crate: &'a Path,
}

impl ToTokens for ModelFieldValue<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			oikotie_xml_crate,
		} = self;
		let ident = data.ident();
		let name = data.name();

		tokens.append_all(quote_spanned! {data.ident().span()=>
			#oikotie_xml_crate::model::Field::new(
				#name,
				#oikotie_xml_crate::model::ToField::to_field(&self.#ident),
			),
		});
	}
}

/// Match arm of `format_field()`
struct ModelFieldFormat<'a> {
	data: &'a ModelField,
	formatter: TokenStream,
}

impl<'a> ModelFieldFormat<'a> {
	fn new(data: &'a ModelField) -> Option<Self> {
		use darling::util::Override;

		let formatter = match data.format.as_ref()? {
			Override::Inherit => {
				let method = format_ident!("format_{}", data.name());
				quote!(Self::#method)
			},
			Override::Explicit(path) => quote!(#path),
		};
		Some(Self { data, formatter })
	}
}

impl ToTokens for ModelFieldFormat<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let name = self.data.name();
		let formatter = &self.formatter;
		tokens.append_all(quote_spanned! {self.data.ident().span()=>
			#name => ::std::option::Option::Some(#formatter(self)),
		});
	}
}

fn option_tokens<T: ToTokens>(value: Option<T>) -> TokenStream {
	match value {
		Some(value) => quote!(::std::option::Option::Some(#value)),
		None => quote!(::std::option::Option::None),
	}
}

fn derive_meta(input: &ModelInput) -> TokenStream {
	let oikotie_xml_crate = &input.oikotie_xml_crate;
	let case_tokens = |case| CaseTokens {
		case,
		oikotie_xml_crate,
	};

	let element_name = option_tokens(input.element_name.as_ref());
	let case = option_tokens(input.case.map(case_tokens));

	let attributes = input
		.fields()
		.filter(|field| field.attribute.is_present())
		.map(|field| field.name());
	let case_overrides = input.fields().filter_map(|field| {
		let case = case_tokens(field.case?);
		let name = field.name();
		Some(quote!((#name, #case)))
	});
	let element_name_overrides = input.fields().filter_map(|field| {
		let rename = field.rename.as_ref()?;
		let name = field.name();
		Some(quote!((#name, #rename)))
	});

	quote! {
		#oikotie_xml_crate::Meta {
			element_name: #element_name,
			case: #case,
			attributes: &[#(#attributes),*],
			case_overrides: &[#(#case_overrides),*],
			element_name_overrides: &[#(#element_name_overrides),*],
		}
	}
}

pub fn derive_model(input: &ModelInput) -> TokenStream {
	let ident = &input.ident;
	let oikotie_xml_crate = &input.oikotie_xml_crate;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let meta = derive_meta(input);
	let values = input.fields().map(|data| ModelFieldValue {
		data,
		oikotie_xml_crate,
	});
	let formats = input.fields().filter_map(ModelFieldFormat::new);
	let to_node = input.to_node.as_ref().map(|path| {
		quote_spanned! {path.span()=>
			fn to_node(&self) -> ::std::option::Option<#oikotie_xml_crate::Result<#oikotie_xml_crate::XmlNode>> {
				::std::option::Option::Some(#path(self))
			}
		}
	});

	quote! {
		impl #impl_generics #oikotie_xml_crate::Model for #ident #ty_generics #where_clause {
			fn meta(&self) -> &'static #oikotie_xml_crate::Meta {
				static META: #oikotie_xml_crate::Meta = #meta;
				&META
			}

			fn fields(&self) -> ::std::vec::Vec<#oikotie_xml_crate::model::Field<'_>> {
				::std::vec![#(#values)*]
			}

			fn format_field(
				&self,
				name: &str,
			) -> ::std::option::Option<#oikotie_xml_crate::Result<#oikotie_xml_crate::model::Formatted<'_>>> {
				match name {
					#(#formats)*
					_ => ::std::option::Option::None,
				}
			}

			#to_node
		}

		impl #impl_generics #oikotie_xml_crate::model::ToField for #ident #ty_generics #where_clause {
			fn to_field(&self) -> ::std::option::Option<#oikotie_xml_crate::model::FieldValue<'_>> {
				::std::option::Option::Some(#oikotie_xml_crate::model::FieldValue::Nested(self))
			}
		}
	}
}
