use crate::{
	serializer::{
		Element,
		Serializer,
	},
	Result,
};

/// Generic XML element: tag, ordered attributes, optional text and ordered children.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct XmlNode {
	tag: String,
	attributes: Vec<(String, String)>,
	text: Option<String>,
	children: Vec<XmlNode>,
}

impl XmlNode {
	/// Empty element
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: Vec::new(),
			text: None,
			children: Vec::new(),
		}
	}

	/// Builder variant of [`set_attribute`](Self::set_attribute)
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(key, value);
		self
	}

	/// Builder variant of [`set_text`](Self::set_text)
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.set_text(text);
		self
	}

	/// Builder variant of [`push`](Self::push)
	pub fn with_child(mut self, child: XmlNode) -> Self {
		self.push(child);
		self
	}

	/// Tag
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Attributes in insertion order
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// Value of an attribute
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Set an attribute; an existing attribute with the same key keeps its position.
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.attributes.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.attributes.push((key, value)),
		}
	}

	/// Text content
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Set text content
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = Some(text.into());
	}

	/// Children in order
	pub fn children(&self) -> &[XmlNode] {
		&self.children
	}

	/// First child with the given tag
	pub fn child(&self, tag: &str) -> Option<&XmlNode> {
		self.children.iter().find(|child| child.tag == tag)
	}

	/// Append a child
	pub fn push(&mut self, child: XmlNode) {
		self.children.push(child);
	}

	/// Append children as siblings, in order
	pub fn extend(&mut self, children: impl IntoIterator<Item = XmlNode>) {
		self.children.extend(children);
	}
}

impl Element for XmlNode {
	fn tag(&self) -> &str {
		&self.tag
	}

	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<()> {
		for (key, value) in &self.attributes {
			serializer.serialize_attribute(key, value)?;
		}
		if let Some(text) = &self.text {
			serializer.serialize_text(text)?;
		}
		for child in &self.children {
			serializer.serialize_element(child)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn attributes_keep_position() {
		let mut node = XmlNode::new("Apartment")
			.with_attribute("type", "KT")
			.with_attribute("action", "update");
		node.set_attribute("type", "OT");
		assert_eq!(
			node.attributes(),
			&[
				("type".to_string(), "OT".to_string()),
				("action".to_string(), "update".to_string()),
			]
		);
		assert_eq!(node.attribute("action"), Some("update"));
		assert_eq!(node.attribute("missing"), None);
	}

	#[test]
	fn children_in_order() {
		let node = XmlNode::new("address")
			.with_child(XmlNode::new("street").with_text("Kotikatu 1"))
			.with_child(XmlNode::new("city").with_text("Helsinki"));
		let tags: Vec<_> = node.children().iter().map(XmlNode::tag).collect();
		assert_eq!(tags, ["street", "city"]);
		assert_eq!(node.child("city").and_then(XmlNode::text), Some("Helsinki"));
	}

	#[derive(Default)]
	struct Events(Vec<String>);

	impl Serializer for &mut Events {
		fn serialize_attribute(&mut self, key: &str, value: &str) -> Result<()> {
			self.0.push(format!("{}={}", key, value));
			Ok(())
		}

		fn serialize_text(&mut self, text: &str) -> Result<()> {
			self.0.push(format!("'{}'", text));
			Ok(())
		}

		fn serialize_element<E: Element>(&mut self, element: &E) -> Result<()> {
			self.0.push(format!("<{}>", element.tag()));
			element.serialize(&mut **self)?;
			self.0.push(format!("</{}>", element.tag()));
			Ok(())
		}
	}

	#[test]
	fn writes_attributes_text_then_children() {
		let node = XmlNode::new("Lift")
			.with_child(XmlNode::new("Note").with_text("new"))
			.with_text("Renovated")
			.with_attribute("value", "K");
		let mut events = Events::default();
		node.serialize(&mut events).unwrap();
		assert_eq!(events.0, ["value=K", "'Renovated'", "<Note>", "'new'", "</Note>"]);
	}
}
