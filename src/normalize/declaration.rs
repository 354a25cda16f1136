use crate::error::RenderError;
use crate::reflection::{CommentExtractor, Declaration, ReflectionKind};
use crate::render::{RenderKind, RenderType, Shape};
use crate::resolve::ReferenceResolver;

use super::{array, Normalizer};

impl<R, C> Normalizer<'_, R, C>
where
    R: ReferenceResolver,
    C: CommentExtractor,
{
    /// `None` when the declaration kind has no rendering.
    pub(crate) fn convert_declaration(
        &self,
        decl: &Declaration,
        owner: &Declaration,
    ) -> Result<Option<RenderType>, RenderError> {
        // Alias-like: the declaration is just a name for a type.
        if let Some(ty) = &decl.type_ {
            return self.convert_type(ty, None, owner).map(Some);
        }
        if !decl.signatures.is_empty() {
            return self.merge_signatures(decl, owner).map(Some);
        }

        let inline = decl.kind.intersects(ReflectionKind::TYPE_LITERAL);
        if !inline && !decl.kind.intersects(ReflectionKind::INTERFACE) {
            return Ok(None);
        }

        let properties = decl
            .children
            .iter()
            .map(|child| self.convert_member(child, owner))
            .collect::<Result<Vec<_>, _>>()?;
        // Bounds on type parameters are not modelled.
        let templates = decl.type_parameters.iter().map(|t| t.name.clone()).collect();
        let shape = Shape { properties, templates };

        if let Some(array) = array::detect_array_shape(&shape) {
            log::debug!("`{}` has array-like members, rendering as array", decl.name);
            return Ok(Some(array));
        }

        let kind = if inline { RenderKind::Object(shape) } else { RenderKind::Type(shape) };
        Ok(Some(kind.into()))
    }

    /// A property or method of an object-like declaration, carrying its name.
    fn convert_member(
        &self,
        member: &Declaration,
        owner: &Declaration,
    ) -> Result<RenderType, RenderError> {
        let rt = match self.convert_declaration(member, owner)? {
            Some(rt) => rt,
            None => self.unsupported_declaration(member),
        };
        let rt = self.enrich(rt, member.comment.as_ref(), member.flags.is_optional, owner);
        Ok(rt.named(member.name.clone()))
    }
}
