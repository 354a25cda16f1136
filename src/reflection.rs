//! Declaration graph as emitted by the documentation front-end (`typedoc --json`).
//!
//! Only the parts the normalizer reads are modelled; every other field in the
//! document is ignored on deserialization. Symbols are already resolved by the
//! front-end, so references point at reflection ids rather than source text.
pub mod comment;
pub mod kind;

use serde::Deserialize;

pub use comment::{Comment, CommentExtractor, CommentPart, CommentTag, SummaryText};
pub use kind::ReflectionKind;

// ------------------------------ Declarations ------------------------------ //

/// A named entity: project root, namespace, interface, alias, function, member…
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub kind: ReflectionKind,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, rename = "type")]
    pub type_: Option<SomeType>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
    #[serde(default)]
    pub children: Vec<Declaration>,
    #[serde(default, alias = "typeParameter")]
    pub type_parameters: Vec<TypeParameter>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    #[serde(default)]
    pub is_optional: bool,
}

/// One overload of a callable declaration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: ReflectionKind,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type.
    #[serde(default, rename = "type")]
    pub type_: Option<SomeType>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, rename = "type")]
    pub type_: Option<SomeType>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TypeParameter {
    pub name: String,
}

impl Signature {
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

// --------------------------------- Types ---------------------------------- //

/// A type node. The tag set is open upstream; categories the normalizer has no
/// rendering for are still named so diagnostics can say what was skipped.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SomeType {
    #[serde(rename_all = "camelCase")]
    Array { element_type: Box<SomeType> },
    Reflection { declaration: Box<Declaration> },
    Tuple {
        #[serde(default)]
        elements: Vec<SomeType>,
    },
    Intersection { types: Vec<SomeType> },
    Reference(ReferenceType),
    Union { types: Vec<SomeType> },
    Intrinsic { name: String },
    #[serde(alias = "stringLiteral")]
    Literal { value: LiteralValue },
    TypeParameter { name: String },

    Query,
    IndexedAccess,
    Conditional,
    Mapped,
    Predicate,
    TypeOperator,
    Optional,
    Rest,
    TemplateLiteral,
    NamedTupleMember,
    Inferred,
    Unknown,
    #[serde(other)]
    Other,
}

impl SomeType {
    /// Stable category name, as it appears in the `type` tag.
    pub fn category(&self) -> &'static str {
        match self {
            SomeType::Array { .. } => "array",
            SomeType::Reflection { .. } => "reflection",
            SomeType::Tuple { .. } => "tuple",
            SomeType::Intersection { .. } => "intersection",
            SomeType::Reference(_) => "reference",
            SomeType::Union { .. } => "union",
            SomeType::Intrinsic { .. } => "intrinsic",
            SomeType::Literal { .. } => "literal",
            SomeType::TypeParameter { .. } => "typeParameter",
            SomeType::Query => "query",
            SomeType::IndexedAccess => "indexedAccess",
            SomeType::Conditional => "conditional",
            SomeType::Mapped => "mapped",
            SomeType::Predicate => "predicate",
            SomeType::TypeOperator => "typeOperator",
            SomeType::Optional => "optional",
            SomeType::Rest => "rest",
            SomeType::TemplateLiteral => "templateLiteral",
            SomeType::NamedTupleMember => "namedTupleMember",
            SomeType::Inferred => "inferred",
            SomeType::Unknown => "unknown",
            SomeType::Other => "other",
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, SomeType::Union { .. })
    }

    pub fn is_intrinsic(&self, name: &str) -> bool {
        matches!(self, SomeType::Intrinsic { name: n } if n == name)
    }
}

/// Named, possibly generic, type usage.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceType {
    pub name: String,
    #[serde(default, alias = "id")]
    pub target: Option<ReferenceTarget>,
    #[serde(default)]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub type_arguments: Option<Vec<SomeType>>,
    #[serde(default)]
    pub refers_to_type_parameter: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ReferenceTarget {
    Id(u32),
    #[serde(rename_all = "camelCase")]
    Symbol {
        #[serde(default)]
        source_file_name: Option<String>,
        qualified_name: String,
    },
}

impl ReferenceType {
    pub fn target_id(&self) -> Option<u32> {
        match self.target {
            Some(ReferenceTarget::Id(id)) => Some(id),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    /// Bigint literal; digits are kept as text since they may exceed 64 bits.
    BigInt {
        value: String,
        #[serde(default)]
        negative: bool,
    },
    Null,
}

impl LiteralValue {
    /// JSON encoding of the literal, e.g. `"\"foo\""` for the string `foo`.
    pub fn to_json(&self) -> String {
        match self {
            LiteralValue::String(s) => serde_json::Value::String(s.clone()).to_string(),
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::BigInt { value, negative: true } => format!("-{value}"),
            LiteralValue::BigInt { value, .. } => value.clone(),
            LiteralValue::Null => "null".to_string(),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_interface_with_members() {
        let decl: Declaration = serde_json::from_value(json!({
            "id": 7,
            "name": "Tab",
            "kind": 256,
            "children": [
                { "id": 8, "name": "url", "kind": 1024, "flags": { "isOptional": true },
                  "type": { "type": "intrinsic", "name": "string" } }
            ],
            "typeParameters": [{ "id": 9, "name": "T" }],
            "sources": [{ "fileName": "tabs.d.ts", "line": 3 }]
        })).unwrap();
        assert!(decl.kind.contains(ReflectionKind::INTERFACE));
        assert_eq!(decl.children.len(), 1);
        assert!(decl.children[0].flags.is_optional);
        assert!(decl.children[0].type_.as_ref().unwrap().is_intrinsic("string"));
        assert_eq!(decl.type_parameters[0].name, "T");
    }

    #[test]
    fn unmodelled_categories_keep_their_name() {
        let ty: SomeType = serde_json::from_value(json!({
            "type": "conditional",
            "checkType": { "type": "intrinsic", "name": "string" }
        })).unwrap();
        assert_eq!(ty.category(), "conditional");

        let ty: SomeType = serde_json::from_value(json!({ "type": "somethingNew" })).unwrap();
        assert_eq!(ty.category(), "other");
    }

    #[test]
    fn legacy_string_literal_and_reference_id() {
        let ty: SomeType = serde_json::from_value(json!({
            "type": "stringLiteral", "value": "foo"
        })).unwrap();
        match ty {
            SomeType::Literal { value } => assert_eq!(value.to_json(), "\"foo\""),
            other => panic!("unexpected {other:?}"),
        }

        let ty: SomeType = serde_json::from_value(json!({
            "type": "reference", "name": "Tab", "id": 12
        })).unwrap();
        match ty {
            SomeType::Reference(r) => assert_eq!(r.target_id(), Some(12)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn external_reference_target() {
        let r: ReferenceType = serde_json::from_value(json!({
            "name": "Promise",
            "target": { "sourceFileName": "lib.es5.d.ts", "qualifiedName": "Promise" },
            "typeArguments": [{ "type": "intrinsic", "name": "void" }]
        })).unwrap();
        assert_eq!(r.target_id(), None);
        assert!(matches!(r.target, Some(ReferenceTarget::Symbol { ref qualified_name, .. }) if qualified_name == "Promise"));
        assert_eq!(r.type_arguments.unwrap().len(), 1);
    }

    #[test]
    fn literal_json_encoding() {
        assert_eq!(LiteralValue::Number(serde_json::Number::from(3u64)).to_json(), "3");
        assert_eq!(LiteralValue::Bool(true).to_json(), "true");
        assert_eq!(LiteralValue::Null.to_json(), "null");
        assert_eq!(LiteralValue::String("a\"b".into()).to_json(), r#""a\"b""#);
    }

    #[test]
    fn bigint_literal() {
        let ty: SomeType = crate::path_de::from_value_with_path(json!({
            "type": "literal", "value": { "value": "10", "negative": true }
        })).unwrap();
        match ty {
            SomeType::Literal { value } => {
                assert_eq!(value, LiteralValue::BigInt { value: "10".into(), negative: true });
                assert_eq!(value.to_json(), "-10");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
