//! Building element trees from models and the interface to write them out
//!
//! [`build_element`] turns a [`Model`](crate::Model) into an [`XmlNode`] tree. Writing a tree (or
//! any other [`Element`]) is done through a [`Serializer`]; adaptors for XML libraries implement
//! that trait.

mod builder;
mod core;
mod node;

pub use self::{
	builder::{
		build_element,
		get_element_name,
		get_formatted_value,
		root_element,
	},
	core::{
		Element,
		Serializer,
	},
	node::XmlNode,
};
