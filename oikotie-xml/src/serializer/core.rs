use crate::Result;

/// Tree that can be written out by a [`Serializer`].
///
/// [`XmlNode`](crate::XmlNode) is the implementation produced by the builder.
pub trait Element {
	/// Element tag
	fn tag(&self) -> &str;

	/// Write attributes, then text, then children into the serializer.
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<()>;
}

/// Sink for a single element; adaptors for XML writers implement it.
///
/// Calls arrive in document order: all attributes first, then text and child elements. Values are
/// passed unescaped.
pub trait Serializer {
	/// Attribute of the open element
	fn serialize_attribute(&mut self, key: &str, value: &str) -> Result<()>;

	/// Text content
	fn serialize_text(&mut self, text: &str) -> Result<()>;

	/// Child element; the serializer opens it with [`Element::tag`] and hands it a serializer for
	/// its own content.
	fn serialize_element<E: Element>(&mut self, element: &E) -> Result<()>;
}
