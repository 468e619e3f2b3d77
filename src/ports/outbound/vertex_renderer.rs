use crate::graph_building::domain::Vertex;
use std::fmt;

/// Attribute name used for the vertex label in every output format
pub const RESERVED_LABEL_ATTRIBUTE: &str = "label";

/// Typed value of an extra vertex attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Integer(u64),
    Boolean(bool),
}

impl AttributeValue {
    /// GraphML `attr.type` for this value
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "string",
            AttributeValue::Integer(_) => "long",
            AttributeValue::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Integer(value) => write!(f, "{}", value),
            AttributeValue::Boolean(value) => write!(f, "{}", value),
        }
    }
}

/// VertexRenderer port: how one vertex is presented in an output format.
pub trait VertexRenderer {
    /// Display label of the vertex
    fn label(&self, vertex: &Vertex) -> String;

    /// Extra named attributes, in output order
    ///
    /// Every vertex must yield the same attribute names in the same order.
    /// An attribute named `label` is dropped by the serializers, since the
    /// label already has its own slot.
    fn attributes(&self, vertex: &Vertex) -> Vec<(&'static str, AttributeValue)>;
}
