use crate::{
	model::{
		FieldValue,
		Formatted,
		Meta,
		Model,
	},
	naming::{
		transform_name,
		Case,
	},
	serializer::XmlNode,
	Result,
};
use tracing::{
	debug,
	trace,
};

/// Build the element tree for a model instance.
///
/// The declaration is validated first; a missing element name or case fails before any field is
/// looked at. A custom node of the instance replaces the generic walk. Otherwise fields are
/// visited in declaration order, absent fields are skipped and every present field is formatted
/// and placed:
///
/// - prebuilt nodes are appended, node lists spliced in as siblings
/// - nested models are built recursively and appended
/// - lists of models are built into a wrapper element named after the field
/// - attribute fields become attributes of the root
/// - everything else becomes a child element with text content
///
/// Any error aborts the whole build.
pub fn build_element(model: &dyn Model) -> Result<XmlNode> {
	let meta = model.meta();
	let (element_name, case) = meta.validate(model.type_name())?;

	if let Some(node) = model.to_node() {
		debug!(element = element_name, "custom node");
		return node;
	}

	let fields = model.fields();
	trace!(element = element_name, fields = fields.len(), "building element");

	let mut root = XmlNode::new(element_name);
	for field in fields {
		let value = match field.value {
			Some(value) => value,
			None => continue,
		};

		match get_formatted_value(model, field.name, value)? {
			Formatted::Node(node) => root.push(node),
			Formatted::NodeList(nodes) => root.extend(nodes),
			Formatted::Nested(nested) => root.push(build_element(nested)?),
			Formatted::Models(items) => {
				let mut wrapper = XmlNode::new(get_element_name(meta, case, field.name));
				for item in items {
					wrapper.push(build_element(item)?);
				}
				root.push(wrapper);
			},
			Formatted::Text(text) => {
				let name = get_element_name(meta, case, field.name);
				if meta.is_attribute(field.name) {
					root.set_attribute(name, text);
				} else {
					root.push(XmlNode::new(name).with_text(text));
				}
			},
		}
	}
	Ok(root)
}

/// Empty element named after the declaration of the model.
///
/// Starting point for custom nodes.
pub fn root_element(model: &dyn Model) -> Result<XmlNode> {
	let (element_name, _) = model.meta().validate(model.type_name())?;
	Ok(XmlNode::new(element_name))
}

/// Format a present field value: a custom formatter wins, otherwise the default conversion.
pub fn get_formatted_value<'a>(
	model: &'a dyn Model,
	name: &str,
	value: FieldValue<'a>,
) -> Result<Formatted<'a>> {
	if let Some(formatted) = model.format_field(name) {
		debug!(field = name, "custom formatter");
		return formatted;
	}
	Ok(value.into_formatted())
}

/// Name of the attribute or child element for a field.
///
/// A literal name override wins over a case override, which wins over the default case.
pub fn get_element_name(meta: &Meta, default_case: Case, field: &str) -> String {
	if let Some(name) = meta.element_name_override(field) {
		return name.to_string();
	}
	let case = meta.case_override(field).unwrap_or(default_case);
	transform_name(field, case)
}
