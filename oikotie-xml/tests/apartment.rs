use oikotie_xml::{
	build_element,
	oikotie::{
		apartment::*,
		enums::*,
	},
	quick_xml::{
		to_string,
		write_document,
		WriteOptions,
	},
	Model,
};
use rust_decimal_macros::dec;

fn pretty(model: &dyn Model) -> String {
	let mut buf = Vec::new();
	write_document(
		&mut buf,
		&build_element(model).unwrap(),
		WriteOptions {
			xml_declaration: false,
			pretty_print: true,
		},
	)
	.unwrap();
	String::from_utf8(buf).unwrap()
}

fn minimal() -> Apartment {
	Apartment {
		key: "APT-1".to_string(),
		vendor_identifier: "V-1".to_string(),
		street_address: "Mannerheimintie 1".to_string(),
		city: City {
			id: 91,
			value: "Helsinki".to_string(),
		},
		..Apartment::default()
	}
}

#[test]
fn minimal_apartment() {
	assert_eq!(
		pretty(&minimal()),
		concat!(
			"<Apartment type=\"KT\" newHouses=\"E\">\n",
			"  <Key>APT-1</Key>\n",
			"  <VendorIdentifier>V-1</VendorIdentifier>\n",
			"  <ModeOfHabitation type=\"omistus\" rentType=\"vapaarahoitteinen\"/>\n",
			"  <StreetAddress>Mannerheimintie 1</StreetAddress>\n",
			"  <City id=\"91\">Helsinki</City>\n",
			"</Apartment>\n",
		),
	);
}

#[test]
fn apartment_in_declaration_order() {
	let apartment = Apartment {
		kind: ApartmentType::RowHouse,
		new_apartment_reserved: Some(true),
		mode_of_habitation: ModeOfHabitation {
			kind: ModeOfHabitationType::Rent,
			rent_type: ModeOfHabitationRentType::default(),
		},
		hide_building_data: Some(false),
		latitude: Some(60.1733244),
		longitude: Some(24.9410248),
		pictures: Some(vec![
			Picture {
				index: 1,
				is_floor_plan: true,
				url: "https://example.com/1.jpg".to_string(),
			},
			Picture {
				index: 2,
				is_floor_plan: false,
				url: "https://example.com/2.jpg".to_string(),
			},
		]),
		picture_descriptions: Some(vec![PictureDescription {
			index: 1,
			description: "Floor plan".to_string(),
		}]),
		lift: Some(Lift {
			value: true,
			description: "Renovated 2015".to_string(),
		}),
		heating_costs: Some(HeatingCosts {
			value: dec!(123.4567),
			unit: "EUR/kk".to_string(),
		}),
		share_of_debt_85: Some(dec!(123.4567)),
		..minimal()
	};
	assert_eq!(
		pretty(&apartment),
		concat!(
			"<Apartment type=\"RT\" newHouses=\"E\" newApartmentReserved=\"K\">\n",
			"  <Key>APT-1</Key>\n",
			"  <VendorIdentifier>V-1</VendorIdentifier>\n",
			"  <ModeOfHabitation type=\"vuokra\" rentType=\"vapaarahoitteinen\"/>\n",
			"  <StreetAddress>Mannerheimintie 1</StreetAddress>\n",
			"  <City id=\"91\">Helsinki</City>\n",
			"  <HideBuildingData>E</HideBuildingData>\n",
			"  <Latitude>60.17332</Latitude>\n",
			"  <Longitude>24.94102</Longitude>\n",
			"  <Picture1 isFloorPlan=\"K\">https://example.com/1.jpg</Picture1>\n",
			"  <Picture2 isFloorPlan=\"E\">https://example.com/2.jpg</Picture2>\n",
			"  <Picture1Description>Floor plan</Picture1Description>\n",
			"  <Lift value=\"K\">Renovated 2015</Lift>\n",
			"  <HeatingCosts unit=\"EUR/kk\">123.45</HeatingCosts>\n",
			"  <ShareOfDebt85>123.45</ShareOfDebt85>\n",
			"</Apartment>\n",
		),
	);
}

#[test]
fn cost_element() {
	let costs = HeatingCosts {
		value: dec!(1.2345),
		unit: "EUR/kk".to_string(),
	};
	assert_eq!(
		to_string(&build_element(&costs).unwrap()).unwrap(),
		r#"<HeatingCosts unit="EUR/kk">1.23</HeatingCosts>"#,
	);
}

#[test]
fn text_is_escaped() {
	let apartment = Apartment {
		title: Some("Sea view & sauna <3".to_string()),
		..minimal()
	};
	let node = build_element(&apartment).unwrap();
	assert_eq!(node.child("Title").and_then(|title| title.text()), Some("Sea view & sauna <3"));
	assert!(to_string(&node)
		.unwrap()
		.contains("<Title>Sea view &amp; sauna &lt;3</Title>"));
}
