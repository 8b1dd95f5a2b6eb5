//! Serializer adaptor using `quick-xml`

mod serializer;

/// Re-export `quick-xml` crate
pub use quick_xml;

pub use self::serializer::{
	serialize_document,
	to_string,
	write_document,
	Serializer,
	WriteOptions,
};
