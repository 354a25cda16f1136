//! Overload merging.
//!
//! Upstream expresses optional trailing parameters as separate overloads. The
//! renderer can only mark trailing parameters optional, so the overloads are
//! folded into one function: the longest parameter list, with every name the
//! shortest overload lacks marked optional. All overloads are assumed to share
//! one return type; the longest one's is used.
use std::collections::HashSet;

use crate::error::RenderError;
use crate::reflection::{Comment, CommentExtractor, Declaration, Parameter, Signature};
use crate::render::{RenderKind, RenderType};
use crate::resolve::ReferenceResolver;

use super::Normalizer;

impl<R, C> Normalizer<'_, R, C>
where
    R: ReferenceResolver,
    C: CommentExtractor,
{
    pub(crate) fn merge_signatures(
        &self,
        decl: &Declaration,
        owner: &Declaration,
    ) -> Result<RenderType, RenderError> {
        let missing_type = |param: &Parameter| RenderError::MissingParameterType {
            function: decl.name.clone(),
            parameter: param.name.clone(),
        };
        for signature in &decl.signatures {
            if let Some(param) = signature.parameters.iter().find(|p| p.type_.is_none()) {
                return Err(missing_type(param));
            }
        }
        let Some((fullest, leanest)) = extremes(&decl.signatures) else {
            return Ok(RenderKind::Function { parameters: Vec::new(), return_type: None }.into());
        };
        if decl.signatures.len() > 1 {
            log::debug!(
                "merging {} overloads of `{}` ({}..{} parameters)",
                decl.signatures.len(),
                decl.name,
                leanest.parameter_count(),
                fullest.parameter_count()
            );
        }

        let required: HashSet<&str> = leanest.parameters.iter().map(|p| p.name.as_str()).collect();

        let mut parameters = Vec::with_capacity(fullest.parameter_count());
        for param in &fullest.parameters {
            let ty = param.type_.as_ref().ok_or_else(|| missing_type(param))?;
            let rt = self.convert_type(ty, None, owner)?;
            let optional = param.flags.is_optional || !required.contains(param.name.as_str());
            let rt = self.enrich(rt, param.comment.as_ref(), optional, owner);
            parameters.push(rt.named(param.name.clone()));
        }

        let return_type = match &fullest.type_ {
            Some(ty) if !ty.is_intrinsic("void") => {
                let rt = self.convert_type(ty, None, owner)?;
                let returns = fullest.comment.as_ref().and_then(Comment::returns);
                let rt = self.enrich(rt, returns.as_ref(), false, owner);
                Some(Box::new(rt.named("returns")))
            }
            _ => None,
        };

        let function = RenderKind::Function { parameters, return_type }.into();
        Ok(self.enrich(function, fullest.comment.as_ref(), false, owner))
    }
}

/// Longest and shortest overloads by parameter count; ties go to the first.
fn extremes(signatures: &[Signature]) -> Option<(&Signature, &Signature)> {
    let (first, rest) = signatures.split_first()?;
    let mut fullest = first;
    let mut leanest = first;
    for signature in rest {
        if signature.parameter_count() > fullest.parameter_count() {
            fullest = signature;
        }
        if signature.parameter_count() < leanest.parameter_count() {
            leanest = signature;
        }
    }
    Some((fullest, leanest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::tests::{render, render_json};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn param(name: &str) -> serde_json::Value {
        json!({ "name": name, "kind": 32768, "type": { "type": "intrinsic", "name": "string" } })
    }

    fn overloads(signatures: Vec<Vec<&str>>) -> serde_json::Value {
        let signatures: Vec<_> = signatures
            .into_iter()
            .map(|names| json!({
                "name": "f", "kind": 4096,
                "parameters": names.into_iter().map(param).collect::<Vec<_>>(),
                "type": { "type": "intrinsic", "name": "void" }
            }))
            .collect();
        json!({ "id": 1, "name": "f", "kind": 64, "signatures": signatures })
    }

    fn optionality(rt: &RenderType) -> Vec<(String, bool)> {
        match &rt.kind {
            RenderKind::Function { parameters, .. } => parameters
                .iter()
                .map(|p| (p.name.clone().unwrap_or_default(), p.optional))
                .collect(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn two_overloads_make_trailing_optional() {
        let rt = render(overloads(vec![vec!["a"], vec!["a", "b"]])).unwrap();
        assert_eq!(optionality(&rt), vec![("a".into(), false), ("b".into(), true)]);
    }

    #[test]
    fn three_overloads_use_the_longest_list() {
        let rt = render(overloads(vec![vec!["a", "b"], vec!["a"], vec!["a", "b", "c"]])).unwrap();
        assert_eq!(
            optionality(&rt),
            vec![("a".into(), false), ("b".into(), true), ("c".into(), true)]
        );
    }

    #[test]
    fn source_optional_flag_is_kept() {
        let rt = render(json!({
            "id": 1, "name": "get", "kind": 64,
            "signatures": [{ "name": "get", "kind": 4096, "parameters": [
                { "name": "keys", "flags": { "isOptional": true },
                  "type": { "type": "intrinsic", "name": "string" } }
            ] }]
        })).unwrap();
        assert_eq!(optionality(&rt), vec![("keys".into(), true)]);
    }

    #[test]
    fn void_return_is_left_off() {
        assert_eq!(
            render_json(overloads(vec![vec!["a"]])),
            json!({
                "type": "function",
                "parameters": [{ "type": "primitive", "primitiveType": "string", "name": "a" }]
            })
        );
    }

    #[test]
    fn return_type_and_comments() {
        assert_eq!(
            render_json(json!({
                "id": 1, "name": "count", "kind": 64,
                "signatures": [{
                    "name": "count", "kind": 4096,
                    "comment": {
                        "summary": [{ "kind": "text", "text": "Counts things." }],
                        "blockTags": [{ "tag": "@returns", "content": [{ "kind": "text", "text": "How many." }] }]
                    },
                    "parameters": [{
                        "name": "filter",
                        "comment": { "summary": [{ "kind": "text", "text": "What to count." }] },
                        "type": { "type": "intrinsic", "name": "string" }
                    }],
                    "type": { "type": "intrinsic", "name": "number" }
                }]
            })),
            json!({
                "type": "function",
                "parameters": [{
                    "type": "primitive", "primitiveType": "string",
                    "name": "filter", "comment": "What to count."
                }],
                "returnType": {
                    "type": "primitive", "primitiveType": "number",
                    "name": "returns", "comment": "How many."
                },
                "comment": "Counts things."
            })
        );
    }

    #[test]
    fn missing_parameter_type_is_fatal() {
        let err = render(json!({
            "id": 1, "name": "broken", "kind": 64,
            "signatures": [
                { "name": "broken", "kind": 4096, "parameters": [param("a")] },
                { "name": "broken", "kind": 4096, "parameters": [param("a"), { "name": "b" }] }
            ]
        })).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingParameterType { function: "broken".into(), parameter: "b".into() }
        );
    }

    #[test]
    fn untyped_parameter_in_the_longest_overload_is_fatal() {
        let err = render(json!({
            "id": 1, "name": "single", "kind": 64,
            "signatures": [{ "name": "single", "kind": 4096, "parameters": [{ "name": "x" }] }]
        })).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingParameterType { function: "single".into(), parameter: "x".into() }
        );
    }

    #[test]
    fn ties_keep_the_first_overload() {
        let signatures: Vec<Signature> = serde_json::from_value(json!([
            { "name": "first", "parameters": [param("a")] },
            { "name": "second", "parameters": [param("b")] }
        ])).unwrap();
        let (fullest, leanest) = extremes(&signatures).unwrap();
        assert_eq!(fullest.name, "first");
        assert_eq!(leanest.name, "first");
        assert!(extremes(&[]).is_none());
    }
}
