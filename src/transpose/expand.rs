//! Multichannel expansion of argument lists and tuple specs.

use crate::normalize::unbubble;
use crate::transpose::flop::{flop, flop_deep};
use crate::traverse::max_size_at_depth;
use crate::value::{Kind, Value};

/// Expand a tuple spec into one tuple per channel.
///
/// When nothing at level `rank` varies (every size there is at most 1),
/// `spec` comes back unchanged. Otherwise the spec is flopped at `rank`,
/// every row becomes a tuple, and a single row is unbubbled to a bare
/// tuple. Filter banks with coefficient lists per band use rank 2.
pub fn multichannel_expand_tuple(spec: &Value, rank: usize) -> Value {
    let Value::Seq(_, items) = spec else {
        return spec.clone();
    };
    let fields = Value::list(items.clone());
    let channels = max_size_at_depth(&fields, rank);
    if channels <= 1 {
        return spec.clone();
    }
    log::debug!("expanding tuple spec at rank {rank} into {channels} channels");
    let rows = flop_deep(&fields, Some(rank))
        .into_iter()
        .map(|row| match row {
            Value::Seq(_, cells) => Value::tuple(cells),
            other => other,
        })
        .collect();
    unbubble(&Value::list(rows))
}

/// Expand constructor arguments into per-channel argument lists.
///
/// With no plain sequence among `args` there is a single channel holding
/// the arguments as given. Otherwise the arguments are flopped: channel
/// `i` takes element `i` of every list argument (wrapping shorter ones)
/// and the scalar or tuple arguments unchanged.
pub fn expand_args(args: &[Value]) -> Vec<Vec<Value>> {
    let expands = args
        .iter()
        .any(|arg| matches!(arg, Value::Seq(Kind::Plain, _)));
    if !expands {
        return vec![args.to_vec()];
    }
    flop(args).into_iter().map(Value::into_items).collect()
}
