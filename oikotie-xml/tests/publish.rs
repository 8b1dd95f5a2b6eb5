use oikotie_xml::{
	config::OikotieConfig,
	oikotie::{
		apartment::{
			Apartment,
			City,
		},
		enums::ApartmentAction,
		housing_company::HousingCompany,
	},
	publish::*,
	Error,
};
use std::fs;

fn config() -> OikotieConfig {
	OikotieConfig {
		company_name: Some("ATT".to_string()),
		entrypoint: Some("test".to_string()),
		..OikotieConfig::default()
	}
}

fn apartment(key: &str) -> Apartment {
	Apartment {
		key: key.to_string(),
		vendor_identifier: key.to_string(),
		street_address: "Mannerheimintie 1".to_string(),
		city: City {
			id: 91,
			value: "Helsinki".to_string(),
		},
		..Apartment::default()
	}
}

#[test]
fn apartments_file() {
	let dir = tempfile::tempdir().unwrap();
	let filename = create_apartments(&[apartment("A-1"), apartment("A-2")], dir.path(), &config()).unwrap();
	assert!(filename.starts_with("APTATT.test.neoff001."));
	assert!(filename.ends_with(".xml"));

	let content = fs::read_to_string(dir.path().join(&filename)).unwrap();
	assert!(content.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
	assert!(content.contains("<Apartments><Apartment "));
	assert!(content.contains("<Key>A-1</Key>"));
	assert!(content.contains("<Key>A-2</Key>"));
	assert!(content.ends_with("</Apartments>"));
}

#[test]
fn housing_companies_file() {
	let dir = tempfile::tempdir().unwrap();
	let housing_company = HousingCompany {
		key: "HC-1".to_string(),
		..HousingCompany::default()
	};
	let filename = create_housing_companies(&[housing_company], dir.path(), &config()).unwrap();
	assert!(filename.starts_with("HOUSINGCOMPANYATT.test.neoff001."));

	let content = fs::read_to_string(dir.path().join(&filename)).unwrap();
	for expected in ["<housing-companies>", "<housing-company>", "<key>HC-1</key>", "<real-estate-agent>", "<vendor-id>"] {
		assert!(content.contains(expected), "missing {}", expected);
	}
}

#[test]
fn removal_file() {
	let dir = tempfile::tempdir().unwrap();
	let mut apartments = vec![apartment("A-1")];
	let filename = update_apartments_file(&mut apartments, ApartmentAction::Remove, dir.path(), &config()).unwrap();
	assert!(filename.starts_with("UPDATEAPT"));
	assert_eq!(apartments[0].action, Some(ApartmentAction::Remove));

	let content = fs::read_to_string(dir.path().join(&filename)).unwrap();
	assert!(content.contains(r#"action="remove""#));
}

#[test]
fn missing_configuration_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();
	match create_apartments(&[apartment("A-1")], dir.path(), &OikotieConfig::default()) {
		Err(Error::MissingSetting { .. }) => (),
		other => panic!("unexpected {:?}", other),
	}
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn send_renames_after_upload() {
	let local = tempfile::tempdir().unwrap();
	let remote = tempfile::tempdir().unwrap();
	let filename = create_apartments(&[apartment("A-1")], local.path(), &config()).unwrap();

	let mut transport = LocalTransport::new(remote.path());
	send_items(&mut transport, local.path(), &filename).unwrap();

	let uploaded = remote.path().join("data").join(&filename);
	assert_eq!(
		fs::read(uploaded).unwrap(),
		fs::read(local.path().join(&filename)).unwrap(),
	);
	assert!(!remote.path().join("temp").join(format!("{}.temp", filename)).exists());
}
