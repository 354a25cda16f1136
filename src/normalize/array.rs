//! Array-shape heuristics: tuples, array intersections, and objects that are
//! really fixed-length arrays in disguise.
use crate::render::{RenderKind, RenderType, Shape};

/// A tuple whose elements all match the first one is a fixed-length array.
/// Empty and mixed tuples have no array rendering.
pub fn tuple_as_array(elements: Vec<RenderType>) -> Option<RenderType> {
    let first = elements.first()?;
    if !elements.iter().all(|e| e == first) {
        return None;
    }
    let length = elements.len() as u32;
    let element = elements.into_iter().next()?;
    Some(RenderType::array(element, Some(length)))
}

/// Merge two array operands of an intersection over the same element type.
///
/// The lower bound is the larger of the two minimums (absent counts as 0) and
/// the upper bound the smaller of the two maximums (absent counts as
/// unbounded). A bound that works out to 0 is left off.
pub fn merge_intersection(left: &RenderType, right: &RenderType) -> Option<RenderType> {
    let (
        RenderKind::Array { element_type: a, min_length: a_min, max_length: a_max },
        RenderKind::Array { element_type: b, min_length: b_min, max_length: b_max },
    ) = (&left.kind, &right.kind) else {
        return None;
    };
    if a != b {
        return None;
    }

    let min = a_min.unwrap_or(0).max(b_min.unwrap_or(0));
    let max = match (a_max, b_max) {
        (Some(x), Some(y)) => *x.min(y),
        (Some(x), None) | (None, Some(x)) => *x,
        (None, None) => 0,
    };
    Some(RenderKind::Array {
        element_type: a.clone(),
        min_length: (min > 0).then_some(min),
        max_length: (max > 0).then_some(max),
    }.into())
}

/// Recognise an object whose members are named exactly `"0"`..`"N-1"` (in any
/// order) and all share one shape, and return it as an `N`-element array.
///
/// Names are checked first as a set; only then are the member shapes compared
/// against the first member, each with its own name left out.
pub fn detect_array_shape(shape: &Shape) -> Option<RenderType> {
    let len = shape.properties.len();
    if len == 0 {
        return None;
    }

    let mut seen = vec![false; len];
    for prop in &shape.properties {
        let index = prop.name.as_deref().and_then(parse_index)?;
        let slot = seen.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
    }

    let element = shape.properties[0].unnamed();
    if !shape.properties.iter().all(|p| p.same_shape(&element)) {
        return None;
    }
    Some(RenderType::array(element, Some(len as u32)))
}

/// Canonical decimal index only: `"1"` but not `"01"` or `"+1"`.
fn parse_index(name: &str) -> Option<usize> {
    let index: usize = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

// ------------------------------- Tests ------------------------------------ //
