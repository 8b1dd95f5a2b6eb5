//! Vendor code lists
//!
//! Every enum serializes to its vendor code (see `code()`).

use crate::model::{
	FieldValue,
	ToField,
};
use std::fmt;

macro_rules! vendor_code {
	($(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $code:literal,
			)+
		}
	)+) => {$(
		$(#[$meta])*
		#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
		#[allow(missing_docs)]
		pub enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $name {
			/// All members in declaration order
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// Code written to the XML document
			pub fn code(self) -> &'static str {
				match self {
					$(Self::$variant => $code,)+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.code())
			}
		}

		impl ToField for $name {
			fn to_field(&self) -> Option<FieldValue<'_>> {
				Some(FieldValue::Code(self.code()))
			}
		}
	)+};
}

vendor_code! {
	/// Whether a listing in an update document is updated or removed
	pub enum ApartmentAction {
		#[default]
		Update => "update",
		Remove => "remove",
	}

	/// Type of the property
	pub enum ApartmentType {
		#[default]
		BlockOfFlats => "KT",
		House => "OT",
		RowHouse => "RT",
		SemiDetachedHouse => "PT",
		DetachedHouse => "ET",
		Cottage => "MO",
		HolidayApartment => "LH",
		HolidayHomeAbroad => "UL",
		TimeShare => "LO",
		HousePlot => "OKTT",
		RecreationalPlot => "VT",
		RowHousePlot => "RTT",
		Plot => "TO",
		ParkingSpace => "AP",
		Garage => "AT",
		Farm => "MAT",
		ForestEstate => "MET",
		OfficeSpace => "TOT",
		BusinessPremises => "LT",
		StorageSpace => "VART",
		RestaurantSpace => "RAV",
		ExhibitionSpace => "NAY",
		HobbySpace => "HAR",
		Hub => "HUB",
		OtherOfficeSpace => "TMUU",
		ProductionSpace => "TUT",
		WoodenHouseShare => "PUUT",
		GalleryAccessBlock => "LUHT",
	}

	/// Sales situation of a housing company under construction
	pub enum Availability {
		#[default]
		Available => "vapaana",
		PartlySold => "osittain myyty",
		SoldOut => "loppuunmyyty",
	}

	/// Unit of [`BuildingRightsAmount`](super::apartment::BuildingRightsAmount)
	pub enum BuildingRightAmountType {
		#[default]
		FloorSquareMeters => "k-m2",
		EfficiencyRatio => "e",
	}

	/// Ownership of the estate
	pub enum EstateType {
		#[default]
		Own => "oma",
		Rent => "vuokra",
	}

	/// Overall condition of the apartment
	pub enum GeneralConditionLevel {
		#[default]
		Good => "hyvä",
		Satisfactory => "tyydyttävä",
		Passable => "välttävä",
		Poor => "heikko",
	}

	/// How the living area was determined
	pub enum LivingAreaType {
		#[default]
		Measured => "mitattu",
		Estimated => "arvio",
		ByArticlesOfAssociation => "yhtiöjärjestyksen mukainen",
	}

	/// Tenure of the apartment
	pub enum ModeOfHabitationType {
		#[default]
		Ownership => "omistus",
		Rent => "vuokra",
		PartOwnership => "osaomistus",
		RightOfOccupancy => "asumisoikeus",
	}

	/// Financing of a rental apartment
	pub enum ModeOfHabitationRentType {
		#[default]
		FreeMarket => "vapaarahoitteinen",
		StateSubsidized => "valtion tukema",
	}

	/// Stage of a new development
	pub enum NewDevelopmentStatusChoices {
		#[default]
		Presale => "ennakkomarkkinointi",
		UnderConstruction => "rakenteilla",
		ReadyToMoveIn => "muuttovalmis",
	}

	/// Heating of a parking space
	pub enum ParkingSpaceHeatingType {
		#[default]
		Heated => "lämmitetty",
		Unheated => "lämmittämätön",
		HeatingPost => "lämmitystolppa",
	}

	/// Kind of parking space
	pub enum ParkingSpaceType {
		#[default]
		Yard => "pihapaikka",
		Carport => "autokatos",
		Garage => "autotalli",
		ParkingHall => "parkkihalli",
	}

	/// Shore access of the property
	pub enum ShoreType {
		#[default]
		OwnShore => "oma ranta",
		ShoreRight => "rantaoikeus",
		NoShore => "ei rantaa",
	}

	/// Ownership of the site
	pub enum SiteType {
		#[default]
		Own => "oma",
		Rent => "vuokra",
		OptionalRent => "vuokra, lunastettavissa",
	}
}
