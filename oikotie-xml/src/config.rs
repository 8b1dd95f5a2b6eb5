//! Publishing configuration

use crate::{
	errors,
	Result,
};
use std::{
	env,
	fmt,
};

/// Settings for publishing documents to the portal.
///
/// The FTP credentials are handed to the embedding application's transport; company name and
/// entrypoint end up in the generated filenames.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct OikotieConfig {
	/// `OIKOTIE_FTP_HOST`
	pub ftp_host: Option<String>,
	/// `OIKOTIE_USER`
	pub user: Option<String>,
	/// `OIKOTIE_PASSWORD`
	pub password: Option<String>,
	/// `OIKOTIE_COMPANY_NAME`
	pub company_name: Option<String>,
	/// `OIKOTIE_ENTRYPOINT`
	pub entrypoint: Option<String>,
}

impl OikotieConfig {
	/// Create configuration from environment variables; empty variables count as unset.
	#[must_use]
	pub fn from_env() -> Self {
		Self {
			ftp_host: env_var("OIKOTIE_FTP_HOST"),
			user: env_var("OIKOTIE_USER"),
			password: env_var("OIKOTIE_PASSWORD"),
			company_name: env_var("OIKOTIE_COMPANY_NAME"),
			entrypoint: env_var("OIKOTIE_ENTRYPOINT"),
		}
	}

	/// Company name, required for filenames
	pub fn company_name(&self) -> Result<&str> {
		self.company_name
			.as_deref()
			.ok_or_else(|| errors::missing_setting("OIKOTIE_COMPANY_NAME"))
	}

	/// Entrypoint, required for filenames
	pub fn entrypoint(&self) -> Result<&str> {
		self.entrypoint
			.as_deref()
			.ok_or_else(|| errors::missing_setting("OIKOTIE_ENTRYPOINT"))
	}
}

impl fmt::Debug for OikotieConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OikotieConfig")
			.field("ftp_host", &self.ftp_host)
			.field("user", &self.user)
			.field("password", &self.password.as_ref().map(|_| "***"))
			.field("company_name", &self.company_name)
			.field("entrypoint", &self.entrypoint)
			.finish()
	}
}

fn env_var(key: &str) -> Option<String> {
	env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Error;

	#[test]
	fn required_settings() {
		let config = OikotieConfig {
			company_name: Some("ATT".to_string()),
			..OikotieConfig::default()
		};
		assert_eq!(config.company_name().unwrap(), "ATT");
		match config.entrypoint() {
			Err(Error::MissingSetting { name }) => assert_eq!(name, "OIKOTIE_ENTRYPOINT"),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn password_is_not_printed() {
		let config = OikotieConfig {
			password: Some("secret".to_string()),
			..OikotieConfig::default()
		};
		let debug = format!("{:?}", config);
		assert!(!debug.contains("secret"));
		assert!(debug.contains("***"));
	}
}
