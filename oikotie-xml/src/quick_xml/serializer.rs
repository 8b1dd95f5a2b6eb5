use crate::{
	serializer::{
		self,
		Element,
	},
	Result,
};
use quick_xml::{
	escape::partial_escape,
	events::{
		BytesDecl,
		BytesEnd,
		BytesStart,
		BytesText,
		Event,
	},
};
use std::io;

// single quoted like the portal's reference documents
const DECLARATION: &str = "xml version='1.0' encoding='utf-8'";

/// Output settings for [`write_document`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriteOptions {
	/// Write `<?xml version='1.0' encoding='utf-8'?>` first
	pub xml_declaration: bool,
	/// Indent nested elements by two spaces per level
	pub pretty_print: bool,
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self {
			xml_declaration: true,
			pretty_print: true,
		}
	}
}

fn into_string(buf: Vec<u8>) -> Result<String> {
	// only str data gets written, but don't trust it blindly
	String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Serialize single element without declaration or indentation
pub fn to_string<E: Element>(element: &E) -> Result<String> {
	let mut buf = Vec::new();
	write_document(
		&mut buf,
		element,
		WriteOptions {
			xml_declaration: false,
			pretty_print: false,
		},
	)?;
	into_string(buf)
}

/// Serialize element into full document in memory: declaration, indented elements and a final
/// newline
pub fn serialize_document<E: Element>(element: &E) -> Result<String> {
	let mut buf = Vec::new();
	write_document(&mut buf, element, WriteOptions::default())?;
	into_string(buf)
}

/// Serialize element as document into `output`
pub fn write_document<W: io::Write, E: Element>(
	output: W,
	element: &E,
	options: WriteOptions,
) -> Result<()> {
	let mut writer = if options.pretty_print {
		quick_xml::Writer::new_with_indent(output, b' ', 2)
	} else {
		quick_xml::Writer::new(output)
	};
	let mut serializer = Serializer::new(&mut writer);
	if options.xml_declaration {
		serializer.serialize_declaration()?;
	}
	serializer.serialize_element(element)?;
	if options.pretty_print {
		io::Write::write_all(writer.get_mut(), b"\n")?;
	}
	Ok(())
}

/// Serializer adaptor for `quick_xml::Writer`
pub struct Serializer<'w, W: io::Write> {
	writer: &'w mut quick_xml::Writer<W>,
}

impl<'w, W: io::Write> Serializer<'w, W> {
	/// New adaptor using the writer
	pub fn new(writer: &'w mut quick_xml::Writer<W>) -> Self {
		Self { writer }
	}

	/// Write the XML declaration
	pub fn serialize_declaration(&mut self) -> Result<()> {
		self.writer
			.write_event(Event::Decl(BytesDecl::from_start(BytesStart::from_content(DECLARATION, 3))))?;
		Ok(())
	}

	/// Serialize full document from root element
	pub fn serialize_document<E: Element>(&mut self, element: &E) -> Result<()> {
		self.serialize_declaration()?;
		self.serialize_element(element)
	}

	/// Serialize single element
	pub fn serialize_element<E: Element>(&mut self, element: &E) -> Result<()> {
		let tag = element.tag().to_owned();
		let mut ser = SRef {
			serializer: self,
			end: Some(BytesEnd::new(tag.clone())),
			start: Some(BytesStart::new(tag)),
		};
		element.serialize(&mut ser)?;
		ser.close()?;
		Ok(())
	}
}

struct SRef<'a, 'w, W: io::Write> {
	serializer: &'a mut Serializer<'w, W>,
	start: Option<BytesStart<'static>>,
	end: Option<BytesEnd<'static>>,
}

impl<'a, 'w, W: io::Write> SRef<'a, 'w, W> {
	fn start(&mut self) -> Result<()> {
		if let Some(s) = self.start.take() {
			self.serializer.writer.write_event(Event::Start(s))?;
		} else {
			assert!(self.end.is_some(), "element already closed");
		}
		Ok(())
	}

	fn close(&mut self) -> Result<()> {
		if let Some(s) = self.start.take() {
			self.serializer.writer.write_event(Event::Empty(s))?;
			self.end = None;
		} else if let Some(e) = self.end.take() {
			self.serializer.writer.write_event(Event::End(e))?;
		}
		Ok(())
	}
}

impl<'a, 'w, W: io::Write> serializer::Serializer for &'_ mut SRef<'a, 'w, W> {
	fn serialize_attribute(&mut self, key: &str, value: &str) -> Result<()> {
		let start = self.start.as_mut().expect("element already started");
		start.push_attribute((key, value));
		Ok(())
	}

	fn serialize_text(&mut self, text: &str) -> Result<()> {
		self.start()?;
		self.serializer
			.writer
			.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
		Ok(())
	}

	fn serialize_element<E: Element>(&mut self, element: &E) -> Result<()> {
		self.start()?;
		self.serializer.serialize_element(element)
	}
}
