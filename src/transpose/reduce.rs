//! Broadcasting reductions.

use crate::broadcast::map2;
use crate::error::{EngineError, Result};
use crate::ops;
use crate::value::{Scalar, Value};

/// Deepest nesting `list_min`/`list_max` accept: a sequence whose elements
/// are scalars or flat sequences of scalars.
pub const MAX_REDUCE_DEPTH: usize = 2;

/// Sum with broadcasting addition, starting from integer zero.
///
/// Nested elements are added element-wise rather than rejected:
/// `[1, [2, 3]]` sums to `[3, 4]`.
pub fn list_sum(items: &[Value]) -> Result<Value> {
    items
        .iter()
        .try_fold(Value::from(0), |acc, item| map2(&acc, item, ops::add))
}

/// Smallest element. Sequence elements are first reduced to their own
/// minimum.
pub fn list_min(items: &[Value]) -> Result<Value> {
    extremum(items, ops::lt)
}

/// Largest element. Sequence elements are first reduced to their own
/// maximum.
pub fn list_max(items: &[Value]) -> Result<Value> {
    extremum(items, ops::gt)
}

fn extremum(items: &[Value], beats: fn(&Scalar, &Scalar) -> Result<Value>) -> Result<Value> {
    let depth = 1 + items.iter().map(Value::depth).max().unwrap_or(0);
    if depth > MAX_REDUCE_DEPTH {
        return Err(EngineError::NestingTooDeep {
            depth,
            limit: MAX_REDUCE_DEPTH,
        });
    }
    let (first, rest) = items.split_first().ok_or(EngineError::EmptyReduction)?;
    let mut best = reduce_item(first, beats)?;
    for item in rest {
        let item = reduce_item(item, beats)?;
        if map2(&item, &best, beats)?.truthy() {
            best = item;
        }
    }
    Ok(best)
}

fn reduce_item(item: &Value, beats: fn(&Scalar, &Scalar) -> Result<Value>) -> Result<Value> {
    match item {
        Value::Seq(_, sub) => extremum(sub, beats),
        scalar => Ok(scalar.clone()),
    }
}
