//! Batch documents and their upload
//!
//! Listings are published in batches: one document with an `Apartments` or `housing-companies`
//! root per upload. Files are written locally first and then transferred with a
//! write-then-rename convention, so the portal never picks up a partially written file.

use crate::{
	build_element,
	config::OikotieConfig,
	format,
	oikotie::{
		apartment::Apartment,
		enums::ApartmentAction,
		housing_company::HousingCompany,
	},
	quick_xml::{
		write_document,
		WriteOptions,
	},
	Result,
	XmlNode,
};
use chrono::{
	Local,
	NaiveDateTime,
};
use std::{
	fs,
	io::{
		self,
		Write,
	},
	path::{
		Path,
		PathBuf,
	},
};
use tracing::{
	debug,
	info,
};

/// Filename prefix of new apartment listings
pub const APARTMENTS_PREFIX: &str = "APT";
/// Filename prefix of apartment updates and removals
pub const UPDATE_APARTMENTS_PREFIX: &str = "UPDATEAPT";
/// Filename prefix of housing company listings
pub const HOUSING_COMPANIES_PREFIX: &str = "HOUSINGCOMPANY";

/// `{prefix}{company}.{entrypoint}.neoff001.{YYYYMMDDHHMMSS}.xml`
pub fn get_filename(prefix: &str, config: &OikotieConfig, now: &NaiveDateTime) -> Result<String> {
	Ok(format!(
		"{}{}.{}.neoff001.{}.xml",
		prefix,
		config.company_name()?,
		config.entrypoint()?,
		format::format_timestamp(now),
	))
}

fn document<'a, M: crate::Model + 'a>(root: &str, items: impl IntoIterator<Item = &'a M>) -> Result<XmlNode> {
	let mut document = XmlNode::new(root);
	for item in items {
		document.push(build_element(item)?);
	}
	Ok(document)
}

/// `Apartments` document
pub fn apartments_document(apartments: &[Apartment]) -> Result<XmlNode> {
	document("Apartments", apartments)
}

/// `housing-companies` document
pub fn housing_companies_document(housing_companies: &[HousingCompany]) -> Result<XmlNode> {
	document("housing-companies", housing_companies)
}

/// `Apartments` document with `action` set on every listing
pub fn update_apartments(apartments: &mut [Apartment], action: ApartmentAction) -> Result<XmlNode> {
	for apartment in apartments.iter_mut() {
		apartment.action = Some(action);
	}
	apartments_document(apartments)
}

/// `Apartments` document removing the listings
pub fn remove_apartments(apartments: &mut [Apartment]) -> Result<XmlNode> {
	update_apartments(apartments, ApartmentAction::Remove)
}

fn now() -> NaiveDateTime {
	Local::now().naive_local()
}

fn write_file(dir: &Path, filename: &str, document: &XmlNode) -> Result<()> {
	let path = dir.join(filename);
	let mut writer = io::BufWriter::new(fs::File::create(&path)?);
	write_document(
		&mut writer,
		document,
		WriteOptions {
			xml_declaration: true,
			pretty_print: false,
		},
	)?;
	writer.flush()?;
	info!(path = %path.display(), items = document.children().len(), "document written");
	Ok(())
}

/// Write new apartment listings into `dir`; returns the generated filename.
///
/// The document is built completely before the file is created.
pub fn create_apartments(apartments: &[Apartment], dir: &Path, config: &OikotieConfig) -> Result<String> {
	let filename = get_filename(APARTMENTS_PREFIX, config, &now())?;
	write_file(dir, &filename, &apartments_document(apartments)?)?;
	Ok(filename)
}

/// Write housing company listings into `dir`; returns the generated filename.
pub fn create_housing_companies(
	housing_companies: &[HousingCompany],
	dir: &Path,
	config: &OikotieConfig,
) -> Result<String> {
	let filename = get_filename(HOUSING_COMPANIES_PREFIX, config, &now())?;
	write_file(dir, &filename, &housing_companies_document(housing_companies)?)?;
	Ok(filename)
}

/// Write an update document into `dir`; returns the generated filename.
pub fn update_apartments_file(
	apartments: &mut [Apartment],
	action: ApartmentAction,
	dir: &Path,
	config: &OikotieConfig,
) -> Result<String> {
	let filename = get_filename(UPDATE_APARTMENTS_PREFIX, config, &now())?;
	write_file(dir, &filename, &update_apartments(apartments, action)?)?;
	Ok(filename)
}

/// Write a removal document into `dir`; returns the generated filename.
pub fn remove_apartments_file(apartments: &mut [Apartment], dir: &Path, config: &OikotieConfig) -> Result<String> {
	update_apartments_file(apartments, ApartmentAction::Remove, dir, config)
}

/// Remote side of an upload.
///
/// Paths are relative to the remote root and use `/` as separator.
pub trait Transport {
	/// Store `data` under `path`
	fn store(&mut self, path: &str, data: &[u8]) -> io::Result<()>;

	/// Rename `from` to `to`; expected to be atomic on the remote side
	fn rename(&mut self, from: &str, to: &str) -> io::Result<()>;
}

/// Upload `dir/filename` as `temp/{filename}.temp`, then move it to `data/{filename}`.
pub fn send_items<T: Transport + ?Sized>(transport: &mut T, dir: &Path, filename: &str) -> Result<()> {
	let data = fs::read(dir.join(filename))?;
	let temp = format!("temp/{}.temp", filename);
	let target = format!("data/{}", filename);

	transport.store(&temp, &data)?;
	debug!(path = %temp, bytes = data.len(), "stored");
	transport.rename(&temp, &target)?;
	info!(path = %target, "published");
	Ok(())
}

/// Transport into a local directory, for dry runs and tests
#[derive(Clone, Debug)]
pub struct LocalTransport {
	root: PathBuf,
}

impl LocalTransport {
	/// Transport storing below `root`
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Root directory
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn prepare(&self, path: &str) -> io::Result<PathBuf> {
		let path = self.root.join(path);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		Ok(path)
	}
}

impl Transport for LocalTransport {
	fn store(&mut self, path: &str, data: &[u8]) -> io::Result<()> {
		fs::write(self.prepare(path)?, data)
	}

	fn rename(&mut self, from: &str, to: &str) -> io::Result<()> {
		fs::rename(self.root.join(from), self.prepare(to)?)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use chrono::NaiveDate;

	fn config() -> OikotieConfig {
		OikotieConfig {
			company_name: Some("ATT".to_string()),
			entrypoint: Some("test".to_string()),
			..OikotieConfig::default()
		}
	}

	#[test]
	fn filename() {
		let now = NaiveDate::from_ymd_opt(2020, 1, 2)
			.and_then(|date| date.and_hms_opt(3, 4, 5))
			.unwrap();
		assert_eq!(
			get_filename(APARTMENTS_PREFIX, &config(), &now).unwrap(),
			"APTATT.test.neoff001.20200102030405.xml",
		);
		assert!(get_filename(APARTMENTS_PREFIX, &OikotieConfig::default(), &now).is_err());
	}

	#[test]
	fn update_sets_action() {
		let mut apartments = vec![Apartment::default(), Apartment::default()];
		let document = remove_apartments(&mut apartments).unwrap();
		assert!(apartments.iter().all(|apartment| apartment.action == Some(ApartmentAction::Remove)));
		assert_eq!(document.children().len(), 2);
		assert_eq!(document.children()[0].attribute("action"), Some("remove"));
	}

	#[test]
	fn empty_batch() {
		assert_eq!(apartments_document(&[]).unwrap(), XmlNode::new("Apartments"));
		assert_eq!(housing_companies_document(&[]).unwrap(), XmlNode::new("housing-companies"));
	}
}
