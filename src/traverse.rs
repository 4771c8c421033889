//! Depth-aware traversal and shape queries.

use crate::error::{EngineError, Result};
use crate::normalize::flat;
use crate::value::{Kind, Value};

/// How far [`deep_collect`] descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Descend at most this many levels.
    Limited(usize),
    /// Descend until scalars are reached.
    Unbounded,
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Unbounded
    }
}

impl Depth {
    fn exhausted(self) -> bool {
        self == Depth::Limited(0)
    }

    fn descend(self) -> Depth {
        match self {
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

/// Rebuild `value` down to `depth` levels, replacing each leaf with
/// `f(leaf, index, rank)`.
///
/// A leaf is a scalar, or any node reached once the depth budget is spent
/// (which may itself be a sequence). `index` is the position within the
/// parent sequence and `rank` counts the levels descended so far. Every
/// level that still has budget bumps the rank before looking at its node,
/// so with an unbounded budget the scalars directly inside the root get
/// rank 2. Rebuilt sequences keep their container kind.
pub fn deep_collect<F>(value: &Value, depth: Depth, mut f: F) -> Value
where
    F: FnMut(&Value, usize, usize) -> Value,
{
    collect(value, depth, &mut f, 0, 0)
}

fn collect<F>(value: &Value, depth: Depth, f: &mut F, index: usize, rank: usize) -> Value
where
    F: FnMut(&Value, usize, usize) -> Value,
{
    if depth.exhausted() {
        return f(value, index, rank);
    }
    let rank = rank + 1;
    match value {
        Value::Seq(kind, items) => {
            let next = depth.descend();
            let mapped = items
                .iter()
                .enumerate()
                .map(|(i, item)| collect(item, next, f, i, rank))
                .collect();
            Value::Seq(*kind, mapped)
        }
        scalar => f(scalar, index, rank),
    }
}

/// Pour the scalars of `source` into the nesting of `template`.
///
/// Leaves of `template` are replaced in order by the flattened source,
/// cycling when the template has more leaves than the source.
pub fn reshape_like(source: &Value, template: &Value) -> Result<Value> {
    let items = flat(source);
    if items.is_empty() {
        return Err(EngineError::EmptySource);
    }
    let mut next = 0;
    Ok(deep_collect(template, Depth::Unbounded, |_, _, _| {
        let item = items[next % items.len()].clone();
        next += 1;
        item
    }))
}

/// Plain sub-sequences are the only ones shape queries descend into; a
/// fixed sequence below the root is a record and counts as one leaf.
fn nested(item: &Value) -> Option<&[Value]> {
    match item {
        Value::Seq(Kind::Plain, sub) => Some(sub),
        _ => None,
    }
}

/// Deepest nesting rank. Scalars and flat sequences both report 1.
pub fn max_depth(value: &Value) -> usize {
    fn find_max(items: &[Value], rank: usize) -> usize {
        items
            .iter()
            .filter_map(nested)
            .map(|sub| find_max(sub, rank + 1))
            .fold(rank, usize::max)
    }
    match value {
        Value::Seq(_, items) => find_max(items, 1),
        Value::Scalar(_) => 1,
    }
}

/// Largest sequence length found at nesting level `rank` (0 is the top
/// level itself). A scalar or tuple met on the way counts as size 1.
pub fn max_size_at_depth(value: &Value, rank: usize) -> usize {
    match value {
        Value::Scalar(_) => 1,
        Value::Seq(_, items) if rank == 0 => items.len(),
        Value::Seq(_, items) => items
            .iter()
            .map(|item| match nested(item) {
                Some(_) => max_size_at_depth(item, rank - 1),
                None => 1,
            })
            .max()
            .unwrap_or(0),
    }
}

/// Descend `rank` levels and pick element `index` (cyclically) from every
/// sequence found there.
///
/// Scalars and tuples met above the target level are kept as they are.
/// An empty sequence at the target level yields an empty sequence.
pub fn wrap_at_depth(value: &Value, rank: usize, index: usize) -> Value {
    match value {
        Value::Scalar(_) => value.clone(),
        Value::Seq(_, items) if rank == 0 => {
            if items.is_empty() {
                Value::empty()
            } else {
                items[index % items.len()].clone()
            }
        }
        Value::Seq(kind, items) => Value::Seq(
            *kind,
            items
                .iter()
                .map(|item| match nested(item) {
                    Some(_) => wrap_at_depth(item, rank - 1, index),
                    None => item.clone(),
                })
                .collect(),
        ),
    }
}
