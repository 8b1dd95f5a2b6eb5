use crate::{
	model::Model,
	serializer::XmlNode,
};

/// Result of formatting a field, dispatched on by the builder.
pub enum Formatted<'a> {
	/// Text of a child element or value of an attribute
	Text(String),
	/// Prebuilt node, appended as is
	Node(XmlNode),
	/// Prebuilt nodes, spliced into the parent without a wrapper element
	NodeList(Vec<XmlNode>),
	/// Nested model, built recursively
	Nested(&'a dyn Model),
	/// Nested models, built recursively inside a wrapper element named after the field
	Models(Vec<&'a dyn Model>),
}

impl From<String> for Formatted<'_> {
	fn from(text: String) -> Self {
		Formatted::Text(text)
	}
}

impl From<&str> for Formatted<'_> {
	fn from(text: &str) -> Self {
		Formatted::Text(text.into())
	}
}

impl From<XmlNode> for Formatted<'_> {
	fn from(node: XmlNode) -> Self {
		Formatted::Node(node)
	}
}

impl From<Vec<XmlNode>> for Formatted<'_> {
	fn from(nodes: Vec<XmlNode>) -> Self {
		Formatted::NodeList(nodes)
	}
}
