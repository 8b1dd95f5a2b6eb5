use crate::{
	format,
	model::Formatted,
	serializer::root_element,
	Model,
	Result,
	XmlNode,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "HeatingCosts", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct HeatingCosts {
	pub value: Decimal,
	#[model(attribute)]
	pub unit: String,
}

impl HeatingCosts {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("unit", &self.unit)
			.with_text(format::format_truncated(self.value, 2)))
	}
}

/// Same fields as [`HeatingCosts`] without a custom node
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "WaterFee", case = "pascal", crate = "crate")]
pub struct WaterFee {
	pub value: Decimal,
	#[model(attribute, rename = "unit")]
	pub unit: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Picture", case = "pascal", crate = "crate")]
pub struct Picture {
	pub index: u32,
	pub url: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Tag", case = "kebab", crate = "crate")]
pub struct Tag {
	#[model(attribute)]
	pub lang: String,
	pub label: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Listing", case = "pascal", crate = "crate")]
pub struct Listing {
	#[model(attribute, name = "type")]
	pub kind: Option<String>,
	#[model(attribute, case = "camel")]
	pub new_houses: Option<bool>,
	pub key: String,
	pub street_address: Option<String>,
	#[model(case = "kebab", rename = "RealEstateID")]
	pub real_estate_id: Option<String>,
	#[model(case = "kebab")]
	pub rc_energy_class: Option<String>,
	pub heating_costs: Option<HeatingCosts>,
	#[model(format)]
	pub pictures: Option<Vec<Picture>>,
	pub tags: Option<Vec<Tag>>,
	#[model(format)]
	pub showing_start_time: Option<String>,
	pub showing_date: Option<NaiveDate>,
}

impl Listing {
	fn format_pictures(&self) -> Result<Formatted<'_>> {
		let pictures = self.required(&self.pictures, "pictures")?;
		Ok(pictures
			.iter()
			.map(|picture| XmlNode::new(format!("Picture{}", picture.index)).with_text(&picture.url))
			.collect::<Vec<_>>()
			.into())
	}

	fn format_showing_start_time(&self) -> Result<Formatted<'_>> {
		let date = self.required(&self.showing_date, "showing_date")?;
		let time = self.required(&self.showing_start_time, "showing_start_time")?;
		Ok(format!("{} {}", format::format_date(date), time).into())
	}

	pub fn minimal() -> Self {
		Self {
			key: "A1".to_string(),
			..Self::default()
		}
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Summary", case = "pascal", to_node = "Summary::build", crate = "crate")]
pub struct Summary {
	pub count: u32,
}

impl Summary {
	fn build(&self) -> Result<XmlNode> {
		Ok(XmlNode::new("summary").with_attribute("count", self.count.to_string()))
	}
}

/// Declares no element name
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(case = "pascal", crate = "crate")]
pub struct Unnamed {
	pub value: Option<String>,
}

/// Declares no case
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Uncased", crate = "crate")]
pub struct Uncased {
	pub value: Option<String>,
}

/// Wraps a model with broken declaration
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Outer", case = "pascal", crate = "crate")]
pub struct Outer {
	pub name: Option<String>,
	pub inner: Option<Unnamed>,
}
