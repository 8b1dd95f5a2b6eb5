#![allow(missing_docs)] // field names are the vendor's element names
//! Apartment listings
//!
//! [`Apartment`] is the listing itself; the other types are its composite values. Most of them
//! are a single element with attributes and text, which the generic builder can't express, so
//! they build their node themselves.

use crate::{
	format,
	model::{
		Field,
		FieldValue,
		Formatted,
		ToField,
	},
	oikotie::enums::{
		ApartmentAction,
		ApartmentType,
		BuildingRightAmountType,
		EstateType,
		GeneralConditionLevel,
		LivingAreaType,
		ModeOfHabitationRentType,
		ModeOfHabitationType,
		NewDevelopmentStatusChoices,
		ParkingSpaceHeatingType,
		ParkingSpaceType,
		ShoreType,
		SiteType,
	},
	serializer::{
		build_element,
		root_element,
	},
	Case,
	Meta,
	Model,
	Result,
	XmlNode,
};
use chrono::{
	NaiveDate,
	NaiveDateTime,
};
use rust_decimal::Decimal;

// Fees, costs and prices
// ================================

/// Declaration shared by all cost models: an amount with a `unit` attribute
const COST_META: Meta = Meta {
	case: Some(Case::Pascal),
	attributes: &["unit"],
	..Meta::EMPTY
};

/// Declaration shared by all price models: an amount with a `currency` attribute
const PRICE_META: Meta = Meta {
	attributes: &["currency"],
	..COST_META
};

fn amount_element(model: &dyn Model, attribute: &str, unit: &str, value: Decimal) -> Result<XmlNode> {
	Ok(root_element(model)?
		.with_attribute(attribute, unit)
		.with_text(format::format_truncated(value, 2)))
}

macro_rules! amount_model {
	($base:ident, $attr:ident: $($(#[$meta:meta])* $name:ident,)+) => {$(
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, Debug, Default)]
		pub struct $name {
			/// Written truncated to two decimals
			pub value: Decimal,
			pub $attr: String,
		}

		impl Model for $name {
			fn meta(&self) -> &'static Meta {
				static META: Meta = Meta {
					element_name: Some(stringify!($name)),
					..$base
				};
				&META
			}

			fn fields(&self) -> Vec<Field<'_>> {
				vec![
					Field::new("value", self.value.to_field()),
					Field::new(stringify!($attr), self.$attr.to_field()),
				]
			}

			fn to_node(&self) -> Option<Result<XmlNode>> {
				Some(amount_element(self, stringify!($attr), &self.$attr, self.value))
			}
		}

		impl ToField for $name {
			fn to_field(&self) -> Option<FieldValue<'_>> {
				Some(FieldValue::Nested(self))
			}
		}
	)+};
}

amount_model! {
	COST_META, unit:
	CableTvCharge,
	CarParkingCharge,
	ChargeFee,
	ElectricityConsumptionCharge,
	FinancingFee,
	HeatingCosts,
	HousingCompanyFee,
	MaintenanceFee,
	RentPerDay,
	RentPerMonth,
	RentPerWeek,
	RentPerWeekEnd,
	RentPerYear,
	SaunaCharge,
	WaterFee,
}

amount_model! {
	PRICE_META, currency:
	RedemptionPrice,
	RentComission,
	SalesPrice,
	UnencumberedSalesPrice,
	/// Security deposit of a rental apartment
	RentSecurityDeposit2,
}

// Boolean flags with a single `value` attribute
// ================================

const BOOL_VALUE_META: Meta = Meta {
	case: Some(Case::Camel),
	attributes: &["value"],
	..Meta::EMPTY
};

macro_rules! bool_value_model {
	($($(#[$meta:meta])* $name:ident,)+) => {$(
		$(#[$meta])*
		#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
		pub struct $name {
			pub value: bool,
		}

		impl Model for $name {
			fn meta(&self) -> &'static Meta {
				static META: Meta = Meta {
					element_name: Some(stringify!($name)),
					..BOOL_VALUE_META
				};
				&META
			}

			fn fields(&self) -> Vec<Field<'_>> {
				vec![Field::new("value", self.value.to_field())]
			}
		}

		impl ToField for $name {
			fn to_field(&self) -> Option<FieldValue<'_>> {
				Some(FieldValue::Nested(self))
			}
		}
	)+};
}

bool_value_model! {
	PromotionalOffer,
	Rented,
	RentFixedTerm,
	RentFurnished,
}

// Miscellaneous
// ================================

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Attachments", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct Attachments {
	pub url: String,
	pub link_text: String,
}

impl Attachments {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("url", &self.url)
			.with_text(&self.link_text))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Balcony", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct Balcony {
	pub value: bool,
	pub description: String,
}

impl Balcony {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("value", format::yes_no_bool(self.value))
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "BuildingRightsAmount", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct BuildingRightsAmount {
	#[model(name = "type")]
	pub kind: BuildingRightAmountType,
	pub amount: f64,
}

impl BuildingRightsAmount {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("type", self.kind.code())
			.with_text(format::format_truncated(self.amount, 2)))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "CampaignLink", case = "pascal", crate = "crate")]
pub struct CampaignLink {
	#[model(attribute, case = "camel")]
	pub target_url: String,
	#[model(attribute, case = "camel")]
	pub picture_url: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "City", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct City {
	pub id: u32,
	pub value: String,
}

impl City {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("id", self.id.to_string())
			.with_text(&self.value))
	}
}

/// Element named by the declared template with its `X` replaced by the index, e.g. `Picture2`
fn indexed_element(model: &dyn Model, index: u32) -> Result<XmlNode> {
	let template = root_element(model)?;
	Ok(XmlNode::new(template.tag().replacen('X', &index.to_string(), 1)))
}

/// Spliced into the apartment as `CityPlanPicture1`, `CityPlanPicture2`, ...
#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "CityPlanPictureX", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct CityPlanPicture {
	pub index: u32,
	pub url: String,
}

impl CityPlanPicture {
	fn element(&self) -> Result<XmlNode> {
		Ok(indexed_element(self, self.index)?.with_text(&self.url))
	}
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "DebtPayable", case = "pascal", crate = "crate")]
pub struct DebtPayable {
	#[model(attribute, case = "camel")]
	pub value: bool,
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Estate", case = "pascal", crate = "crate")]
pub struct Estate {
	#[model(attribute, case = "camel", name = "type")]
	pub kind: EstateType,
}

/// Rating from 1 to 5
#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "EstateAgentRating", case = "pascal", crate = "crate")]
pub struct EstateAgentRating {
	#[model(attribute, case = "camel")]
	pub value: u8,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "EstateAgentSocialMedia", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct EstateAgentSocialMedia {
	pub url: String,
	pub description: String,
}

impl EstateAgentSocialMedia {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("url", &self.url)
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "FinancingOffer1", case = "pascal", crate = "crate")]
pub struct FinancingOffer1 {
	#[model(attribute, case = "camel")]
	pub percentage: u32,
	#[model(attribute, case = "camel")]
	pub price: u32,
	#[model(attribute, case = "camel")]
	pub fee: String,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "FinancingOffer2", case = "pascal", crate = "crate")]
pub struct FinancingOffer2 {
	#[model(attribute, case = "camel")]
	pub percentage: u32,
	#[model(attribute, case = "camel")]
	pub price: u32,
	#[model(attribute, case = "camel")]
	pub fee: String,
}

fn area_element(model: &dyn Model, unit: &str, area: String) -> Result<XmlNode> {
	Ok(root_element(model)?.with_attribute("unit", unit).with_text(area))
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "FloorArea", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct FloorArea {
	pub unit: String,
	pub area: f64,
}

impl FloorArea {
	fn element(&self) -> Result<XmlNode> {
		area_element(self, &self.unit, format::format_truncated(self.area, 2))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "FloorLocation", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct FloorLocation {
	pub high: bool,
	pub low: bool,
	pub number: i32,
	pub count: u32,
	pub description: String,
}

impl FloorLocation {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("high", format::yes_no_bool(self.high))
			.with_attribute("low", format::yes_no_bool(self.low))
			.with_attribute("number", self.number.to_string())
			.with_attribute("count", self.count.to_string())
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "GeneralCondition", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct GeneralCondition {
	pub level: GeneralConditionLevel,
	pub description: String,
}

impl GeneralCondition {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("level", self.level.code())
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Lift", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct Lift {
	pub value: bool,
	pub description: String,
}

impl Lift {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("value", format::yes_no_bool(self.value))
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "LivingArea", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct LivingArea {
	pub unit: String,
	pub area: f64,
}

impl LivingArea {
	fn element(&self) -> Result<XmlNode> {
		area_element(self, &self.unit, format::format_truncated(self.area, 2))
	}
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "ModeOfHabitation", case = "pascal", crate = "crate")]
pub struct ModeOfHabitation {
	#[model(attribute, case = "camel", name = "type")]
	pub kind: ModeOfHabitationType,
	#[model(attribute, case = "camel")]
	pub rent_type: ModeOfHabitationRentType,
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "NewDevelopmentStatus", case = "pascal", crate = "crate")]
pub struct NewDevelopmentStatus {
	#[model(attribute, case = "camel")]
	pub value: NewDevelopmentStatusChoices,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "OnlineOfferLabel", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct OnlineOfferLabel {
	pub background_color: String,
	pub text_color: String,
	pub text_value: String,
}

impl OnlineOfferLabel {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("backgroundColor", &self.background_color)
			.with_attribute("textColor", &self.text_color)
			.with_text(&self.text_value))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "ParkingSpace", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct ParkingSpace {
	#[model(name = "type")]
	pub kind: ParkingSpaceType,
	pub heated: ParkingSpaceHeatingType,
	pub electricity_outlet: bool,
	pub text_value: String,
}

impl ParkingSpace {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("type", self.kind.code())
			.with_attribute("heated", self.heated.code())
			.with_attribute("electricityOutlet", format::yes_no_bool(self.electricity_outlet))
			.with_text(&self.text_value))
	}
}

/// Spliced into the apartment as `Picture1`, `Picture2`, ...
#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "PictureX", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct Picture {
	pub index: u32,
	pub is_floor_plan: bool,
	pub url: String,
}

impl Picture {
	fn element(&self) -> Result<XmlNode> {
		Ok(indexed_element(self, self.index)?
			.with_attribute("isFloorPlan", format::yes_no_bool(self.is_floor_plan))
			.with_text(&self.url))
	}
}

/// Spliced into the apartment as `Picture1Description`, `Picture2Description`, ...
#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "PictureXDescription", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct PictureDescription {
	pub index: u32,
	pub description: String,
}

impl PictureDescription {
	fn element(&self) -> Result<XmlNode> {
		Ok(indexed_element(self, self.index)?.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Sauna", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct Sauna {
	pub own: bool,
	pub common: bool,
	pub description: String,
}

impl Sauna {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("own", format::yes_no_bool(self.own))
			.with_attribute("common", format::yes_no_bool(self.common))
			.with_text(&self.description))
	}
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Shore", case = "camel", crate = "crate")]
pub struct Shore {
	#[model(attribute, name = "type")]
	pub kind: ShoreType,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "ShowingDate1", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct ShowingDate1 {
	pub value: NaiveDate,
	pub first_showing: bool,
}

impl ShowingDate1 {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("firstShowing", format::yes_no_bool(self.first_showing))
			.with_text(format::format_date(&self.value)))
	}
}

#[derive(Model)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[model(element_name = "Site", case = "pascal", crate = "crate")]
pub struct Site {
	#[model(attribute, case = "camel", name = "type")]
	pub kind: SiteType,
}

#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "SiteArea", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct SiteArea {
	pub area: f64,
	pub unit: String,
}

impl SiteArea {
	fn element(&self) -> Result<XmlNode> {
		area_element(self, &self.unit, format::format_fixed(self.area, 2))
	}
}

/// Total area; `min` and `max` are only written when set
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "TotalArea", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct TotalArea {
	pub unit: String,
	pub area: f64,
	pub min: Option<u32>,
	pub max: Option<u32>,
}

impl TotalArea {
	fn element(&self) -> Result<XmlNode> {
		let mut element = root_element(self)?.with_attribute("unit", &self.unit);
		if let Some(min) = self.min {
			element.set_attribute("min", min.to_string());
		}
		if let Some(max) = self.max {
			element.set_attribute("max", max.to_string());
		}
		element.set_text(format::format_fixed(self.area, 2));
		Ok(element)
	}
}

#[derive(Model)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[model(element_name = "YearOfBuilding", case = "pascal", to_node = "Self::element", crate = "crate")]
pub struct YearOfBuilding {
	pub original: i32,
	pub description: String,
}

impl YearOfBuilding {
	fn element(&self) -> Result<XmlNode> {
		Ok(root_element(self)?
			.with_attribute("original", self.original.to_string())
			.with_text(&self.description))
	}
}

// Apartment
// ================================

/// Build every model and splice the nodes flat into the parent
fn splice<M: Model>(models: &[M]) -> Result<Formatted<'static>> {
	let nodes = models
		.iter()
		.map(|model| build_element(model))
		.collect::<Result<Vec<_>>>()?;
	Ok(nodes.into())
}

/// Formatters writing an optional number truncated to a number of decimals
macro_rules! truncating_formatters {
	($($method:ident($field:ident, $format:ident, $n:literal);)+) => {$(
		fn $method(&self) -> Result<Formatted<'_>> {
			let value = self.required(&self.$field, stringify!($field))?;
			Ok(format::$format(*value, $n).into())
		}
	)+};
}

/// An apartment listing.
///
/// The first seven fields are required by the portal. `action` is only set in update documents
/// (see [`update_apartments`](crate::publish::update_apartments)).
#[derive(Model)]
#[derive(Clone, PartialEq, Debug, Default)]
#[model(element_name = "Apartment", case = "pascal", crate = "crate")]
pub struct Apartment {
	#[model(attribute, case = "camel", name = "type")]
	pub kind: ApartmentType,
	#[model(attribute, case = "camel")]
	pub new_houses: bool,
	pub key: String,
	pub vendor_identifier: String,
	pub mode_of_habitation: ModeOfHabitation,
	pub street_address: String,
	pub city: City,

	#[model(attribute, case = "camel")]
	pub action: Option<ApartmentAction>,
	#[model(attribute, case = "camel")]
	pub new_apartment_reserved: Option<bool>,

	pub estate: Option<Estate>,
	pub mode_of_financing: Option<String>,
	pub apartment_city_plan_id: Option<String>,
	pub hide_building_data: Option<bool>,

	pub postal_code: Option<String>,
	pub other_post_code: Option<String>,
	pub post_office: Option<String>,
	pub region: Option<String>,
	pub country: Option<String>,
	#[model(format)]
	pub latitude: Option<f64>,
	#[model(format)]
	pub longitude: Option<f64>,

	#[model(rename = "OikotieID")]
	pub oikotie_id: Option<String>,
	pub title: Option<String>,
	pub description: Option<String>,
	pub supplementary_information: Option<String>,
	pub direction: Option<String>,
	#[model(format)]
	pub pictures: Option<Vec<Picture>>,
	pub picture_gallery_promotion: Option<String>,
	pub picture_gallery_promotion_url: Option<String>,
	#[model(format)]
	pub picture_descriptions: Option<Vec<PictureDescription>>,
	#[model(format)]
	pub city_plan_pictures: Option<Vec<CityPlanPicture>>,
	pub virtual_presentation: Option<String>,
	pub video_presentation_url: Option<String>,
	pub listing_background_image: Option<String>,
	pub listing_background_color: Option<String>,

	pub floor_location: Option<FloorLocation>,
	pub number_of_rooms: Option<u32>,
	pub room_types: Option<String>,
	pub other_space_description: Option<String>,
	pub balcony: Option<Balcony>,
	pub terrace: Option<String>,
	pub direction_of_windows: Option<String>,
	pub view: Option<String>,
	pub cellar: Option<bool>,

	pub living_area: Option<LivingArea>,
	pub living_area_type: Option<LivingAreaType>,
	pub total_area: Option<TotalArea>,
	pub floor_area: Option<FloorArea>,
	#[model(format)]
	pub residental_apartment_area: Option<f64>,
	#[model(format)]
	pub office_area: Option<f64>,
	pub estate_area: Option<String>,
	pub forest_amount: Option<String>,
	pub land_area: Option<String>,

	#[model(rename = "RealEstateID")]
	pub real_estate_id: Option<String>,
	pub real_estate_code: Option<String>,
	pub housing_company_name: Option<String>,
	pub housing_company_key: Option<String>,
	pub business_id: Option<String>,
	pub disponent: Option<String>,
	pub real_estate_management: Option<String>,
	pub number_of_apartments: Option<String>,
	pub lift: Option<Lift>,

	pub year_of_building: Option<YearOfBuilding>,
	pub year_start_of_use: Option<i32>,
	pub basic_renovations: Option<String>,
	pub renovation_year_facade: Option<String>,
	pub renovation_year_roof: Option<String>,
	pub renovation_year_plumbing: Option<String>,
	pub renovation_year_bathrooms: Option<String>,
	pub future_renovations: Option<String>,
	pub future_renovation_year_facade: Option<String>,
	pub future_renovation_year_roof: Option<String>,
	pub future_renovation_year_plumbing: Option<String>,
	pub future_renovation_year_bathrooms: Option<String>,

	pub heating: Option<String>,
	pub roof_type: Option<String>,
	pub building_rights: Option<String>,
	pub building_rights_amount: Option<BuildingRightsAmount>,
	pub number_of_offices: Option<u32>,

	pub sanitation: Option<String>,
	pub water_and_sewage: Option<String>,
	pub sewer_system: Option<String>,
	pub use_of_water: Option<String>,
	pub ventilation_system: Option<String>,
	pub other_buildings: Option<String>,
	pub more_estate_information: Option<String>,

	pub general_condition: Option<GeneralCondition>,
	pub condition_inspection: Option<String>,

	pub estate_name_and_number: Option<String>,
	pub site: Option<Site>,
	pub site_rent: Option<String>,
	pub site_rent_contract_end_date: Option<NaiveDate>,
	pub site_area: Option<SiteArea>,
	pub area_description: Option<String>,
	pub shore: Option<Shore>,
	pub shores_description: Option<String>,
	pub shore_direction: Option<String>,
	pub shore_length: Option<String>,
	pub waters_description: Option<String>,
	pub building_plan_information: Option<String>,
	pub building_plan_situation: Option<String>,
	pub grounds: Option<String>,
	pub yard_description: Option<String>,
	pub yard_direction: Option<String>,

	pub heating_costs: Option<HeatingCosts>,
	pub sauna_charge: Option<SaunaCharge>,
	pub estate_tax: Option<String>,
	pub housing_company_fee: Option<HousingCompanyFee>,
	pub financing_fee: Option<FinancingFee>,
	pub maintenance_fee: Option<MaintenanceFee>,
	pub water_fee: Option<WaterFee>,
	pub water_fee_explanation: Option<String>,
	pub electricity_consumption: Option<String>,
	pub electricity_consumption_charge: Option<ElectricityConsumptionCharge>,
	pub cable_tv_charge: Option<CableTvCharge>,
	pub road_costs: Option<String>,
	pub other_fees: Option<String>,
	#[model(format)]
	pub share_of_debt_85: Option<Decimal>,
	#[model(format)]
	pub share_of_debt_70: Option<Decimal>,
	pub charge_fee: Option<ChargeFee>,
	pub car_parking_charge: Option<CarParkingCharge>,

	pub building_material: Option<String>,
	pub foundation: Option<String>,
	pub wall_construction: Option<String>,
	pub roof_material: Option<String>,
	pub floor: Option<String>,
	pub bedroom_floor: Option<String>,
	pub kitchen_floor: Option<String>,
	pub living_room_floor: Option<String>,
	pub bathroom_floor: Option<String>,
	pub bedroom_wall: Option<String>,
	pub kitchen_wall: Option<String>,
	pub living_room_wall: Option<String>,
	pub bathroom_wall: Option<String>,
	pub other_rooms_materials: Option<String>,
	pub kitchen_appliances: Option<String>,
	pub bathroom_appliances: Option<String>,
	pub bedroom_appliances: Option<String>,
	pub living_room_appliances: Option<String>,
	pub non_included_appliances: Option<String>,
	pub other_included_appliances: Option<String>,
	pub sauna: Option<Sauna>,
	pub storage_space: Option<String>,
	pub parking_space: Option<ParkingSpace>,
	pub car_storage: Option<String>,
	pub common_areas: Option<String>,
	pub antenna_system: Option<String>,
	pub tv_appliances: Option<String>,
	pub internet_appliances: Option<String>,

	pub date_when_available: Option<NaiveDate>,
	pub becomes_available: Option<String>,
	pub rent_fixed_term_start: Option<NaiveDate>,
	pub rent_fixed_term_end: Option<NaiveDate>,
	pub rent_min_length: Option<String>,
	pub extra_visibility_start_date_time: Option<NaiveDateTime>,

	pub rented: Option<Rented>,
	pub rent_furnished: Option<RentFurnished>,
	pub municipal_development: Option<String>,
	pub honoring_clause: Option<String>,
	pub lease_holder: Option<String>,
	pub term_of_lease: Option<String>,
	pub encumbrances: Option<String>,
	pub mortgages: Option<String>,
	pub rent_increase: Option<String>,
	pub renting_terms: Option<String>,
	pub rent_fixed_term: Option<RentFixedTerm>,

	pub services: Option<String>,
	pub connections: Option<String>,
	pub driving_instructions: Option<String>,

	pub rent_per_month: Option<RentPerMonth>,
	pub rent_per_day: Option<RentPerDay>,
	pub rent_per_week: Option<RentPerWeek>,
	pub rent_per_year: Option<RentPerYear>,
	pub rent_per_week_end: Option<RentPerWeekEnd>,
	pub unencumbered_sales_price: Option<UnencumberedSalesPrice>,
	pub sales_price: Option<SalesPrice>,
	pub debt_payable: Option<DebtPayable>,
	pub redemption_price: Option<RedemptionPrice>,
	pub buyer_costs: Option<String>,
	#[model(format)]
	pub apartment_rent_income: Option<Decimal>,
	pub rent_comission: Option<RentComission>,
	pub rent_security_deposit: Option<String>,
	pub rent_security_deposit2: Option<RentSecurityDeposit2>,
	pub financing_offer1: Option<FinancingOffer1>,
	pub financing_offer2: Option<FinancingOffer2>,
	#[model(format)]
	pub site_repurchase_price: Option<Decimal>,
	#[model(format)]
	pub site_condominium_fee: Option<Decimal>,

	pub magazine_identifier: Option<String>,
	pub print_media_text: Option<String>,

	pub estate_agent_contact_person: Option<String>,
	pub estate_agent_email: Option<String>,
	pub estate_agent_telephone: Option<String>,
	pub estate_agent_title: Option<String>,
	pub estate_agent_degrees: Option<String>,
	pub estate_agent_rating: Option<EstateAgentRating>,
	pub estate_agent_social_media: Option<EstateAgentSocialMedia>,
	pub estate_agent_contact_person_picture_url: Option<String>,

	pub inquiries: Option<String>,
	pub showing_date1: Option<ShowingDate1>,
	pub showing_start_time1: Option<String>,
	pub showing_end_time1: Option<String>,
	pub showing_date_explanation1: Option<String>,
	pub showing_date2: Option<NaiveDate>,
	pub showing_start_time2: Option<String>,
	pub showing_end_time2: Option<String>,
	pub showing_date_explanation2: Option<String>,
	pub contact_request_email: Option<String>,
	pub electronic_brochure_request_email: Option<String>,
	pub electronic_brochure_request_url: Option<String>,
	pub application_url: Option<String>,
	pub show_lead_form: Option<bool>,

	pub more_info_url: Option<String>,
	pub attachments: Option<Attachments>,
	pub campaign_link: Option<CampaignLink>,
	pub banner_html: Option<String>,
	pub promotional_offer: Option<PromotionalOffer>,
	pub promotional_offer_title: Option<String>,
	pub promotional_offer_description: Option<String>,
	pub promotional_offer_url: Option<String>,
	pub promotional_offer_url_text: Option<String>,
	pub promotional_offer_logo: Option<String>,
	pub promotional_offer_color: Option<String>,
	pub online_offer: Option<bool>,
	pub online_offer_logo: Option<String>,
	pub online_offer_url: Option<String>,
	#[model(format)]
	pub online_offer_highest_bid: Option<Decimal>,
	pub online_offer_label: Option<OnlineOfferLabel>,
	pub online_offer_search_logo: Option<String>,
	#[model(case = "kebab")]
	pub rc_energy_flag: Option<String>,
	#[model(case = "kebab")]
	pub rc_energyclass: Option<String>,
	#[model(case = "kebab")]
	pub rc_wastewater_flag: Option<String>,

	pub estate_division: Option<String>,

	pub new_development_status: Option<NewDevelopmentStatus>,
	pub time_of_completion: Option<NaiveDate>,
}

impl Apartment {
	fn format_pictures(&self) -> Result<Formatted<'_>> {
		splice(self.required(&self.pictures, "pictures")?)
	}

	fn format_picture_descriptions(&self) -> Result<Formatted<'_>> {
		splice(self.required(&self.picture_descriptions, "picture_descriptions")?)
	}

	fn format_city_plan_pictures(&self) -> Result<Formatted<'_>> {
		splice(self.required(&self.city_plan_pictures, "city_plan_pictures")?)
	}

	truncating_formatters! {
		format_latitude(latitude, format_fixed, 5);
		format_longitude(longitude, format_fixed, 5);
		format_residental_apartment_area(residental_apartment_area, format_truncated, 2);
		format_office_area(office_area, format_truncated, 2);
		format_share_of_debt_85(share_of_debt_85, format_truncated, 2);
		format_share_of_debt_70(share_of_debt_70, format_truncated, 2);
		format_apartment_rent_income(apartment_rent_income, format_truncated, 2);
		format_site_repurchase_price(site_repurchase_price, format_truncated, 2);
		format_site_condominium_fee(site_condominium_fee, format_truncated, 2);
		format_online_offer_highest_bid(online_offer_highest_bid, format_truncated, 2);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::quick_xml::to_string;
	use rust_decimal_macros::dec;

	fn xml(model: &dyn Model) -> String {
		to_string(&build_element(model).unwrap()).unwrap()
	}

	#[test]
	fn cost_models() {
		let costs = HeatingCosts {
			value: dec!(1.2345),
			unit: "EUR/kk".to_string(),
		};
		assert_eq!(xml(&costs), r#"<HeatingCosts unit="EUR/kk">1.23</HeatingCosts>"#);
		let fee = WaterFee {
			value: dec!(1.2345),
			unit: "EUR/kk".to_string(),
		};
		assert_eq!(xml(&fee), r#"<WaterFee unit="EUR/kk">1.23</WaterFee>"#);
		assert_eq!(fee.meta().case, Some(Case::Pascal));
	}

	#[test]
	fn price_models() {
		let price = SalesPrice {
			value: dec!(1.2345),
			currency: "EUR".to_string(),
		};
		assert_eq!(xml(&price), r#"<SalesPrice currency="EUR">1.23</SalesPrice>"#);
		let deposit = RentSecurityDeposit2 {
			value: dec!(123.4567),
			currency: "EUR".to_string(),
		};
		assert_eq!(
			xml(&deposit),
			r#"<RentSecurityDeposit2 currency="EUR">123.45</RentSecurityDeposit2>"#,
		);
	}

	#[test]
	fn bool_value_models() {
		assert_eq!(xml(&Rented { value: true }), r#"<Rented value="K"/>"#);
		assert_eq!(xml(&RentFurnished { value: false }), r#"<RentFurnished value="E"/>"#);
		assert_eq!(xml(&PromotionalOffer { value: false }), r#"<PromotionalOffer value="E"/>"#);
		assert_eq!(xml(&RentFixedTerm { value: true }), r#"<RentFixedTerm value="K"/>"#);
	}

	#[test]
	fn attribute_only_models() {
		let link = CampaignLink {
			target_url: "https://example.com/t".to_string(),
			picture_url: "https://example.com/p.jpg".to_string(),
		};
		assert_eq!(
			xml(&link),
			r#"<CampaignLink targetUrl="https://example.com/t" pictureUrl="https://example.com/p.jpg"/>"#,
		);
		assert_eq!(xml(&DebtPayable { value: false }), r#"<DebtPayable value="E"/>"#);
		assert_eq!(xml(&Estate { kind: EstateType::Rent }), r#"<Estate type="vuokra"/>"#);
		assert_eq!(xml(&EstateAgentRating { value: 4 }), r#"<EstateAgentRating value="4"/>"#);
		assert_eq!(xml(&Shore { kind: ShoreType::ShoreRight }), r#"<Shore type="rantaoikeus"/>"#);
		assert_eq!(xml(&Site { kind: SiteType::Own }), r#"<Site type="oma"/>"#);
		let moh = ModeOfHabitation {
			kind: ModeOfHabitationType::Rent,
			rent_type: ModeOfHabitationRentType::FreeMarket,
		};
		assert_eq!(
			xml(&moh),
			r#"<ModeOfHabitation type="vuokra" rentType="vapaarahoitteinen"/>"#,
		);
		let offer = FinancingOffer2 {
			percentage: 70,
			price: 100000,
			fee: "1 %".to_string(),
		};
		assert_eq!(
			xml(&offer),
			r#"<FinancingOffer2 percentage="70" price="100000" fee="1 %"/>"#,
		);
	}

	#[test]
	fn text_models() {
		let location = FloorLocation {
			high: true,
			low: false,
			number: 3,
			count: 5,
			description: "3/5".to_string(),
		};
		assert_eq!(
			xml(&location),
			r#"<FloorLocation high="K" low="E" number="3" count="5">3/5</FloorLocation>"#,
		);
		let space = ParkingSpace {
			kind: ParkingSpaceType::Carport,
			heated: ParkingSpaceHeatingType::HeatingPost,
			electricity_outlet: true,
			text_value: "Katospaikka".to_string(),
		};
		assert_eq!(
			xml(&space),
			r#"<ParkingSpace type="autokatos" heated="lämmitystolppa" electricityOutlet="K">Katospaikka</ParkingSpace>"#,
		);
		let showing = ShowingDate1 {
			value: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
			first_showing: true,
		};
		assert_eq!(xml(&showing), r#"<ShowingDate1 firstShowing="K">01.01.2020</ShowingDate1>"#);
	}

	#[test]
	fn areas_truncate() {
		let area = LivingArea {
			unit: "m2".to_string(),
			area: 123.4567,
		};
		assert_eq!(xml(&area), r#"<LivingArea unit="m2">123.45</LivingArea>"#);
		let area = FloorArea {
			unit: "m2".to_string(),
			area: 123.45678,
		};
		assert_eq!(xml(&area), r#"<FloorArea unit="m2">123.45</FloorArea>"#);
		let area = SiteArea {
			area: 1200.0,
			unit: "m2".to_string(),
		};
		assert_eq!(xml(&area), r#"<SiteArea unit="m2">1200.00</SiteArea>"#);
		let amount = BuildingRightsAmount {
			kind: BuildingRightAmountType::FloorSquareMeters,
			amount: 1.2345,
		};
		assert_eq!(
			xml(&amount),
			r#"<BuildingRightsAmount type="k-m2">1.23</BuildingRightsAmount>"#,
		);
	}

	#[test]
	fn total_area_bounds() {
		let area = TotalArea {
			unit: "m2".to_string(),
			area: 123.4567,
			min: Some(100),
			max: Some(150),
		};
		assert_eq!(xml(&area), r#"<TotalArea unit="m2" min="100" max="150">123.45</TotalArea>"#);
		let area = TotalArea {
			min: None,
			max: None,
			..area
		};
		assert_eq!(xml(&area), r#"<TotalArea unit="m2">123.45</TotalArea>"#);
	}

	#[test]
	fn indexed_pictures() {
		let picture = Picture {
			index: 2,
			is_floor_plan: true,
			url: "https://example.com/2.jpg".to_string(),
		};
		assert_eq!(
			xml(&picture),
			r#"<Picture2 isFloorPlan="K">https://example.com/2.jpg</Picture2>"#,
		);
		let description = PictureDescription {
			index: 1,
			description: "Olohuone".to_string(),
		};
		assert_eq!(xml(&description), "<Picture1Description>Olohuone</Picture1Description>");
		let plan = CityPlanPicture {
			index: 1,
			url: "https://example.com/plan.jpg".to_string(),
		};
		assert_eq!(xml(&plan), "<CityPlanPicture1>https://example.com/plan.jpg</CityPlanPicture1>");
	}

	#[test]
	fn truncating_formatter_requires_value() {
		let apartment = Apartment::default();
		assert!(apartment.format_latitude().is_err());
		let apartment = Apartment {
			latitude: Some(60.1733244),
			..Apartment::default()
		};
		match apartment.format_latitude().unwrap() {
			Formatted::Text(text) => assert_eq!(text, "60.17332"),
			_ => panic!("expected text"),
		}
	}
}
