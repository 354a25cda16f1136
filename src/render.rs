//! Closed-vocabulary type description handed to the documentation renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderType {
    #[serde(flatten)]
    pub kind: RenderKind,
    /// Property/parameter name when nested inside a parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderKind {
    #[serde(rename_all = "camelCase")]
    Primitive {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        primitive_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        literal_value: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Array {
        element_type: Box<RenderType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
    },
    /// Inline literal shape.
    Object(Shape),
    /// Named interface-like shape.
    Type(Shape),
    #[serde(rename_all = "camelCase")]
    Reference {
        reference_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference_link: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference_templates: Option<Vec<RenderType>>,
    },
    #[serde(rename_all = "camelCase")]
    Function {
        parameters: Vec<RenderType>,
        /// Absent when the function returns nothing worth documenting.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_type: Option<Box<RenderType>>,
    },
    #[serde(rename_all = "camelCase")]
    Union {
        options: Vec<RenderType>,
        is_enum: bool,
    },
    #[default]
    #[serde(rename = "?")]
    Unknown,
}

/// Ordered members of an `object`/`type` node. Order is the declaration order
/// and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    pub properties: Vec<RenderType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<String>,
}

fn is_false(b: &bool) -> bool { !*b }

impl From<RenderKind> for RenderType {
    fn from(kind: RenderKind) -> Self {
        RenderType { kind, ..RenderType::default() }
    }
}

impl RenderType {
    pub fn unknown() -> Self {
        RenderKind::Unknown.into()
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        RenderKind::Primitive { primitive_type: Some(name.into()), literal_value: None }.into()
    }

    pub fn literal(json: impl Into<String>) -> Self {
        RenderKind::Primitive { primitive_type: None, literal_value: Some(json.into()) }.into()
    }

    /// Array of `element`; `length` fixes both bounds.
    pub fn array(element: RenderType, length: Option<u32>) -> Self {
        RenderKind::Array {
            element_type: Box::new(element),
            min_length: length,
            max_length: length,
        }.into()
    }

    pub fn union(options: Vec<RenderType>) -> Self {
        let is_enum = options.iter().all(RenderType::is_primitive);
        RenderKind::Union { options, is_enum }.into()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, RenderKind::Primitive { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.kind, RenderKind::Unknown)
    }

    /// The same node without its own `name`.
    pub fn unnamed(&self) -> RenderType {
        RenderType { name: None, ..self.clone() }
    }

    /// Deep equality that ignores the `name` of the two roots (nested names
    /// still count).
    pub fn same_shape(&self, other: &RenderType) -> bool {
        self.kind == other.kind
            && self.comment == other.comment
            && self.optional == other.optional
    }

    /// Object-like members, for `object` and `type` nodes.
    pub fn shape(&self) -> Option<&Shape> {
        match &self.kind {
            RenderKind::Object(shape) | RenderKind::Type(shape) => Some(shape),
            _ => None,
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
