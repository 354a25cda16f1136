//! Declaration graph → `RenderType`.
//!
//! Two mutually recursive passes over an immutable input tree:
//! - the type pass dispatches on a type node's category;
//! - the declaration pass handles aliases, callables and object-like shapes,
//!   and comes back into the type pass for every nested type.
//!
//! Shapes with no rendering become the unknown type and normalization carries
//! on. Only broken upstream contracts (see [`RenderError`]) abort.
pub mod array;
mod declaration;
mod signature;

use crate::error::RenderError;
use crate::reflection::{Comment, CommentExtractor, Declaration, ReferenceType, SomeType};
use crate::render::{RenderKind, RenderType};
use crate::resolve::{Link, ReferenceResolver};

/// Event-callback convention: its single type argument is the listener.
pub const EVENT_TYPE: &str = "chrome.events.Event";

pub struct Normalizer<'a, R, C> {
    resolver: &'a R,
    comments: &'a C,
}

/// Normalize one top-level declaration.
pub fn render_declaration<R, C>(
    decl: &Declaration,
    resolver: &R,
    comments: &C,
) -> Result<RenderType, RenderError>
where
    R: ReferenceResolver,
    C: CommentExtractor,
{
    Normalizer::new(resolver, comments).render(decl)
}

impl<'a, R, C> Normalizer<'a, R, C>
where
    R: ReferenceResolver,
    C: CommentExtractor,
{
    pub fn new(resolver: &'a R, comments: &'a C) -> Self {
        Self { resolver, comments }
    }

    pub fn render(&self, decl: &Declaration) -> Result<RenderType, RenderError> {
        let rt = match self.convert_declaration(decl, decl)? {
            Some(rt) => rt,
            None => self.unsupported_declaration(decl),
        };
        Ok(self.enrich(rt, decl.comment.as_ref(), decl.flags.is_optional, decl))
    }

    // ------------------------------ Types --------------------------------- //

    pub(crate) fn convert_type(
        &self,
        ty: &SomeType,
        parent: Option<&SomeType>,
        owner: &Declaration,
    ) -> Result<RenderType, RenderError> {
        let rt = match ty {
            SomeType::Array { element_type } => {
                RenderType::array(self.convert_type(element_type, Some(ty), owner)?, None)
            }
            SomeType::Reflection { declaration } => {
                match self.convert_declaration(declaration, owner)? {
                    Some(rt) => rt,
                    None => self.unsupported_declaration(declaration),
                }
            }
            SomeType::Tuple { elements } => {
                let elements = self.convert_all(elements, ty, owner)?;
                match array::tuple_as_array(elements) {
                    Some(rt) => rt,
                    None => self.unsupported(ty, owner),
                }
            }
            SomeType::Intersection { types } => self.convert_intersection(ty, types, owner)?,
            SomeType::Reference(reference) if reference.refers_to_type_parameter => {
                type_parameter(&reference.name)
            }
            SomeType::Reference(reference) => self.convert_reference(reference, ty, owner)?,
            SomeType::Union { types } => RenderType::union(self.convert_all(types, ty, owner)?),
            SomeType::Intrinsic { name } => RenderType::primitive(name.clone()),
            SomeType::Literal { value } => {
                if parent.is_some_and(SomeType::is_union) {
                    RenderType::literal(value.to_json())
                } else {
                    // A lone literal is shown the way a union of literals is.
                    let wrapper = SomeType::Union { types: vec![ty.clone()] };
                    return self.convert_type(&wrapper, parent, owner);
                }
            }
            SomeType::TypeParameter { name } => type_parameter(name),
            _ => self.unsupported(ty, owner),
        };
        Ok(rt)
    }

    fn convert_all(
        &self,
        types: &[SomeType],
        parent: &SomeType,
        owner: &Declaration,
    ) -> Result<Vec<RenderType>, RenderError> {
        types
            .iter()
            .map(|t| self.convert_type(t, Some(parent), owner))
            .collect()
    }

    fn convert_intersection(
        &self,
        ty: &SomeType,
        types: &[SomeType],
        owner: &Declaration,
    ) -> Result<RenderType, RenderError> {
        let [left, right] = types else {
            return Ok(self.unsupported(ty, owner));
        };
        let left = self.convert_type(left, Some(ty), owner)?;
        let right = self.convert_type(right, Some(ty), owner)?;
        match array::merge_intersection(&left, &right) {
            Some(merged) => {
                log::debug!("merged array intersection in `{}`", owner.name);
                Ok(merged)
            }
            None => Ok(self.unsupported(ty, owner)),
        }
    }

    fn convert_reference(
        &self,
        reference: &ReferenceType,
        ty: &SomeType,
        owner: &Declaration,
    ) -> Result<RenderType, RenderError> {
        let full_name = self.resolver.fully_qualified_name(reference);
        let arguments = reference.type_arguments.as_deref().unwrap_or_default();

        if full_name == EVENT_TYPE && arguments.len() != 1 {
            return Err(RenderError::EventTypeArguments {
                reference: full_name,
                found: arguments.len(),
            });
        }

        let mut templates = if arguments.is_empty() {
            None
        } else {
            Some(self.convert_all(arguments, ty, owner)?)
        };

        if full_name == EVENT_TYPE {
            if let Some(listener) = templates.as_mut().and_then(|t| t.first_mut()) {
                listener.name = Some("listener".into());
                if let RenderKind::Function { return_type, .. } = &mut listener.kind {
                    *return_type = None;
                }
            }
        }

        let (reference_type, reference_link) = match self.resolver.link(owner, reference) {
            Some(Link { name, link }) => (name, Some(link)),
            None => (full_name, None),
        };
        Ok(RenderKind::Reference {
            reference_type,
            reference_link,
            reference_templates: templates,
        }.into())
    }

    // ----------------------------- Helpers -------------------------------- //

    /// Attach the extracted comment (when there is one) and the optional flag.
    fn enrich(
        &self,
        mut rt: RenderType,
        comment: Option<&Comment>,
        optional: bool,
        owner: &Declaration,
    ) -> RenderType {
        if let Some(text) = self.comments.extract(comment, owner) {
            rt.comment = Some(text);
        }
        if optional {
            rt.optional = true;
        }
        rt
    }

    fn unsupported(&self, ty: &SomeType, owner: &Declaration) -> RenderType {
        log::warn!("no rendering for `{}` type in `{}`", ty.category(), owner.name);
        RenderType::unknown()
    }

    fn unsupported_declaration(&self, decl: &Declaration) -> RenderType {
        log::warn!("no rendering for {} `{}`", decl.kind.label(), decl.name);
        RenderType::unknown()
    }
}

/// Generic parameters are shown by name and never linked.
fn type_parameter(name: &str) -> RenderType {
    RenderKind::Reference {
        reference_type: name.to_string(),
        reference_link: None,
        reference_templates: None,
    }.into()
}

// ------------------------------- Tests ------------------------------------ //
