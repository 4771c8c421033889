//! Scalar/sequence normalization: bubbling, flattening and shape queries.

use crate::value::{Kind, Scalar, Value};

/// Wrap a value as a plain sequence.
///
/// Plain sequences keep their elements, `nil` becomes the empty sequence and
/// any other scalar becomes a one-element sequence. Fixed sequences are
/// record-like and are wrapped whole, the same as a scalar.
pub fn bubble(value: &Value) -> Value {
    Value::list(bubble_items(value))
}

pub(crate) fn bubble_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Seq(Kind::Plain, items) => items.clone(),
        Value::Scalar(Scalar::Nil) => Vec::new(),
        other => vec![other.clone()],
    }
}

/// Collapse a one-element sequence to its element. Only one level.
pub fn unbubble(value: &Value) -> Value {
    match value {
        Value::Seq(_, items) if items.len() == 1 => items[0].clone(),
        other => other.clone(),
    }
}

/// All scalars of `value` in order, at any depth.
pub fn flat(value: &Value) -> Vec<Value> {
    fn walk(value: &Value, out: &mut Vec<Value>) {
        match value {
            Value::Seq(_, items) => items.iter().for_each(|item| walk(item, out)),
            scalar => out.push(scalar.clone()),
        }
    }
    let mut out = Vec::new();
    walk(value, &mut out);
    out
}

/// Splice nested sequences into the result down to `levels` levels.
///
/// Elements at or below the limit are kept verbatim, sub-sequences
/// included. `flatten(v, 1)` removes exactly one level of nesting.
pub fn flatten(value: &Value, levels: usize) -> Vec<Value> {
    fn walk(items: &[Value], out: &mut Vec<Value>, level: usize, levels: usize) {
        for item in items {
            match item {
                Value::Seq(_, sub) if level < levels => walk(sub, out, level + 1, levels),
                other => out.push(other.clone()),
            }
        }
    }
    match value {
        Value::Seq(_, items) => {
            let mut out = Vec::new();
            walk(items, &mut out, 0, levels);
            out
        }
        scalar => vec![scalar.clone()],
    }
}

/// Dimensions of `value`, read along the first element at each level.
///
/// Scalars have the empty shape. Ragged structures are not detected.
pub fn shape(value: &Value) -> Vec<usize> {
    match value {
        Value::Scalar(_) => Vec::new(),
        Value::Seq(_, items) => {
            let mut dims = vec![items.len()];
            if let Some(first) = items.first() {
                dims.extend(shape(first));
            }
            dims
        }
    }
}
