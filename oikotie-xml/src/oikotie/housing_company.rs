#![allow(missing_docs)] // field names are the vendor's element names
//! Housing company listings
//!
//! Text values are cut to the maximum lengths the portal accepts.

use crate::{
	format,
	model::{
		FieldValue,
		Formatted,
		ToField,
	},
	oikotie::enums::{
		ApartmentType,
		Availability,
	},
	serializer::root_element,
	Model,
	Result,
	XmlNode,
};
use chrono::NaiveDateTime;

fn picture_element(model: &dyn Model, image_url: &str, timestamp: Option<&NaiveDateTime>) -> Result<XmlNode> {
	let mut element = root_element(model)?;
	if let Some(timestamp) = timestamp {
		element.set_attribute("timestamp", format::format_timestamp(timestamp));
	}
	element.set_text(format::truncate_chars(image_url, 200));
	Ok(element)
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "picture", case = "kebab", to_node = "Self::element", crate = "crate")]
pub struct Picture {
	pub image_url: String,
	pub timestamp: Option<NaiveDateTime>,
}

impl Picture {
	fn element(&self) -> Result<XmlNode> {
		picture_element(self, &self.image_url, self.timestamp.as_ref())
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "city-plan-picture", case = "kebab", to_node = "Self::element", crate = "crate")]
pub struct CityPlanPicture {
	pub image_url: String,
	pub timestamp: Option<NaiveDateTime>,
}

impl CityPlanPicture {
	fn element(&self) -> Result<XmlNode> {
		picture_element(self, &self.image_url, self.timestamp.as_ref())
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "address", case = "kebab", crate = "crate")]
pub struct Address {
	#[model(format)]
	pub street: String,
	#[model(format)]
	pub postal_code: String,
	#[model(format)]
	pub city: String,
	#[model(format)]
	pub region: Option<String>,
}

impl Address {
	fn format_street(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.street, 100).into())
	}

	fn format_postal_code(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.postal_code, 6).into())
	}

	fn format_city(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.city, 50).into())
	}

	fn format_region(&self) -> Result<Formatted<'_>> {
		let region = self.required(&self.region, "region")?;
		Ok(format::truncate_chars(region, 100).into())
	}
}

/// Apartment types of a housing company, written as one comma separated list
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ApartmentTypes(pub Vec<ApartmentType>);

impl ToField for ApartmentTypes {
	fn to_field(&self) -> Option<FieldValue<'_>> {
		let codes: Vec<&str> = self.0.iter().map(|kind| kind.code()).collect();
		Some(FieldValue::Text(codes.join(", ").into()))
	}
}

impl From<Vec<ApartmentType>> for ApartmentTypes {
	fn from(types: Vec<ApartmentType>) -> Self {
		Self(types)
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "apartment", case = "kebab", crate = "crate")]
pub struct Apartment {
	pub types: ApartmentTypes,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "builder", case = "kebab", crate = "crate")]
pub struct Builder {
	pub logo_url: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "construction-details", case = "kebab", crate = "crate")]
pub struct ConstructionDetails {
	pub construction_complete: bool,
	#[model(format)]
	pub construction_company_name: Option<String>,
	pub estimated_completion_time: Option<String>,
	pub availability: Option<Availability>,
	pub funding_type: Option<String>,
}

impl ConstructionDetails {
	fn format_construction_company_name(&self) -> Result<Formatted<'_>> {
		let name = self.required(&self.construction_company_name, "construction_company_name")?;
		Ok(format::truncate_chars(name, 100).into())
	}
}

/// Coordinates, truncated to five decimals
#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[model(element_name = "coordinates", case = "kebab", crate = "crate")]
pub struct Coordinates {
	#[model(format)]
	pub latitude: f64,
	#[model(format)]
	pub longitude: f64,
}

impl Coordinates {
	fn format_latitude(&self) -> Result<Formatted<'_>> {
		Ok(format::format_fixed(self.latitude, 5).into())
	}

	fn format_longitude(&self) -> Result<Formatted<'_>> {
		Ok(format::format_fixed(self.longitude, 5).into())
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "more-info", case = "kebab", crate = "crate")]
pub struct MoreInfo {
	#[model(attribute, format)]
	pub url: String,
	#[model(format)]
	pub link_text: Option<String>,
	#[model(format)]
	pub link_image_url: Option<String>,
}

impl MoreInfo {
	fn format_url(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.url, 200).into())
	}

	fn format_link_text(&self) -> Result<Formatted<'_>> {
		let text = self.required(&self.link_text, "link_text")?;
		Ok(format::truncate_chars(text, 50).into())
	}

	fn format_link_image_url(&self) -> Result<Formatted<'_>> {
		let url = self.required(&self.link_image_url, "link_image_url")?;
		Ok(format::truncate_chars(url, 200).into())
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "virtual-presentation", case = "kebab", to_node = "Self::element", crate = "crate")]
pub struct VirtualPresentation {
	pub url: String,
	pub link_text: String,
}

impl VirtualPresentation {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("url", format::truncate_chars(&self.url, 200))
			.with_text(format::truncate_chars(&self.link_text, 50)))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "property-development", case = "kebab", crate = "crate")]
pub struct PropertyDevelopment {
	pub more_info: Option<MoreInfo>,
	pub virtual_presentations: Option<Vec<VirtualPresentation>>,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "real-estate-agent", case = "kebab", crate = "crate")]
pub struct RealEstateAgent {
	pub vendor_id: String,
	pub contact_email: String,
}

/// A housing company listing.
///
/// The first seven fields are required by the portal.
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "housing-company", case = "kebab", crate = "crate")]
pub struct HousingCompany {
	#[model(format)]
	pub key: String,
	#[model(format)]
	pub name: String,
	pub real_estate_agent: RealEstateAgent,
	pub apartment: Apartment,
	pub address: Address,
	#[model(format)]
	pub publication_start_date: NaiveDateTime,
	#[model(format)]
	pub publication_end_date: NaiveDateTime,
	#[model(format)]
	pub real_estate_code: Option<String>,
	pub builder: Option<Builder>,
	#[model(format)]
	pub presentation_text: Option<String>,
	pub coordinates: Option<Coordinates>,
	pub construction_details: Option<ConstructionDetails>,
	pub pictures: Option<Vec<Picture>>,
	pub city_plan_pictures: Option<Vec<CityPlanPicture>>,
	pub property_development: Option<PropertyDevelopment>,
}

/// `year`, `month`, `day` and `hour` (`HH:MM`) children
fn publication_date(name: &str, value: &NaiveDateTime) -> XmlNode {
	XmlNode::new(name)
		.with_child(XmlNode::new("year").with_text(value.format("%Y").to_string()))
		.with_child(XmlNode::new("month").with_text(value.format("%m").to_string()))
		.with_child(XmlNode::new("day").with_text(value.format("%d").to_string()))
		.with_child(XmlNode::new("hour").with_text(value.format("%H:%M").to_string()))
}

impl HousingCompany {
	fn format_key(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.key, 100).into())
	}

	fn format_name(&self) -> Result<Formatted<'_>> {
		Ok(format::truncate_chars(&self.name, 100).into())
	}

	fn format_publication_start_date(&self) -> Result<Formatted<'_>> {
		Ok(publication_date("publication-start-date", &self.publication_start_date).into())
	}

	fn format_publication_end_date(&self) -> Result<Formatted<'_>> {
		Ok(publication_date("publication-end-date", &self.publication_end_date).into())
	}

	fn format_real_estate_code(&self) -> Result<Formatted<'_>> {
		let code = self.required(&self.real_estate_code, "real_estate_code")?;
		Ok(format::truncate_chars(code, 200).into())
	}

	fn format_presentation_text(&self) -> Result<Formatted<'_>> {
		let text = self.required(&self.presentation_text, "presentation_text")?;
		Ok(format::truncate_chars(text, 10000).into())
	}
}
