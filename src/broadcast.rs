//! Element-wise application of operators over nested values.
//!
//! Sequences of different lengths are reconciled by wrap extension: the
//! shorter side repeats its own elements cyclically until it matches the
//! longer one. Nesting is handled depth-first, so a scalar on one side is
//! applied against every element of a sequence on the other.
//!
//! Operators are fallible with their own error type `E`. Errors are
//! returned unchanged at the first failing leaf.

use crate::value::{Scalar, Value};

// ── Length reconciliation ───────────────────────────────────

/// Pad with `fill` or truncate to exactly `n` elements.
///
/// Returns an empty vector when `items` is empty or `n` is zero.
pub fn extend<T: Clone>(items: &[T], n: usize, fill: T) -> Vec<T> {
    if items.is_empty() || n == 0 {
        return Vec::new();
    }
    let mut out: Vec<T> = items.iter().take(n).cloned().collect();
    out.resize(n, fill);
    out
}

/// Grow or truncate to `n` elements by repeating `items` cyclically.
///
/// Returns an empty vector when `items` is empty or `n` is zero.
pub fn wrap_extend<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    if items.is_empty() || n == 0 {
        return Vec::new();
    }
    items.iter().cycle().take(n).cloned().collect()
}

// ── Unary ───────────────────────────────────────────────────

/// Apply `op` to every scalar leaf, keeping structure and container kinds.
pub fn map1<E, F>(value: &Value, mut op: F) -> Result<Value, E>
where
    F: FnMut(&Scalar) -> Result<Value, E>,
{
    unop(value, &mut op)
}

fn unop<E, F>(value: &Value, op: &mut F) -> Result<Value, E>
where
    F: FnMut(&Scalar) -> Result<Value, E>,
{
    match value {
        Value::Scalar(s) => op(s),
        Value::Seq(kind, items) => {
            let mapped = items
                .iter()
                .map(|item| unop(item, op))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Value::Seq(*kind, mapped))
        }
    }
}

// ── Binary ──────────────────────────────────────────────────

/// Broadcast `op` over two values.
///
/// * scalar with scalar: `op(a, b)`
/// * sequence with scalar: the scalar is applied to every element; the
///   sequence keeps its kind
/// * sequence with sequence: the shorter side is wrap-extended to the
///   longer one (`b` when `len(a) >= len(b)`), elements are paired by
///   position and combined recursively
///
/// A result level is `Fixed` when either input at that level is `Fixed`.
/// One tuple-flavored branch therefore turns its whole result subtree
/// into tuples. Call sites depend on this, keep it.
pub fn map2<E, F>(a: &Value, b: &Value, mut op: F) -> Result<Value, E>
where
    F: FnMut(&Scalar, &Scalar) -> Result<Value, E>,
{
    binop(a, b, &mut op)
}

fn binop<E, F>(a: &Value, b: &Value, op: &mut F) -> Result<Value, E>
where
    F: FnMut(&Scalar, &Scalar) -> Result<Value, E>,
{
    match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => op(x, y),
        (Value::Seq(kind, items), Value::Scalar(_)) => {
            let mapped = items
                .iter()
                .map(|item| binop(item, b, op))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Value::Seq(*kind, mapped))
        }
        (Value::Scalar(_), Value::Seq(kind, items)) => {
            let mapped = items
                .iter()
                .map(|item| binop(a, item, op))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Value::Seq(*kind, mapped))
        }
        (Value::Seq(ka, xs), Value::Seq(kb, ys)) => {
            let kind = ka.join(*kb);
            let xs: Vec<&Value> = xs.iter().collect();
            let ys: Vec<&Value> = ys.iter().collect();
            let (xs, ys) = if xs.len() >= ys.len() {
                let n = xs.len();
                if ys.len() != n {
                    log::trace!("broadcast: wrap-extending right operand {} -> {n}", ys.len());
                }
                (xs, wrap_extend(&ys, n))
            } else {
                let n = ys.len();
                log::trace!("broadcast: wrap-extending left operand {} -> {n}", xs.len());
                (wrap_extend(&xs, n), ys)
            };
            // An empty side extends to nothing, so the pairing is empty too.
            let mapped = xs
                .iter()
                .zip(ys.iter())
                .map(|(x, y)| binop(x, y, op))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Value::Seq(kind, mapped))
        }
    }
}

// ── N-ary ───────────────────────────────────────────────────

/// Like [`map1`], passing the same extra `args` to every call of `op`.
///
/// The extra arguments are not broadcast.
pub fn map_n<E, F>(value: &Value, args: &[Value], mut op: F) -> Result<Value, E>
where
    F: FnMut(&Scalar, &[Value]) -> Result<Value, E>,
{
    narop(value, args, &mut op)
}

fn narop<E, F>(value: &Value, args: &[Value], op: &mut F) -> Result<Value, E>
where
    F: FnMut(&Scalar, &[Value]) -> Result<Value, E>,
{
    match value {
        Value::Scalar(s) => op(s, args),
        Value::Seq(kind, items) => {
            let mapped = items
                .iter()
                .map(|item| narop(item, args, op))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Value::Seq(*kind, mapped))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::ops;
    use crate::value::Kind;
    use crate::{list, tuple};

    fn add(a: &Value, b: &Value) -> Value {
        map2(a, b, ops::add).unwrap()
    }

    #[test]
    fn extend_pads_and_truncates() {
        assert_eq!(extend(&[1, 2], 4, 0), vec![1, 2, 0, 0]);
        assert_eq!(extend(&[1, 2, 3], 2, 0), vec![1, 2]);
        assert!(extend(&[1, 2], 0, 0).is_empty());
        assert!(extend::<i32>(&[], 3, 0).is_empty());
    }

    #[test]
    fn wrap_extend_cycles() {
        assert_eq!(wrap_extend(&[1, 2], 5), vec![1, 2, 1, 2, 1]);
        assert_eq!(wrap_extend(&[1, 2, 3], 2), vec![1, 2]);
        assert!(wrap_extend::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn scalar_with_scalar() {
        assert_eq!(add(&Value::from(2), &Value::from(3)), Value::from(5));
    }

    #[test]
    fn shorter_side_wraps() {
        assert_eq!(add(&list![1, 2, 3], &list![10, 20]), list![11, 22, 13]);
        assert_eq!(add(&list![10, 20], &list![1, 2, 3]), list![11, 22, 13]);
    }

    #[test]
    fn scalar_spreads_over_nested_sequence() {
        let v = add(&list![1, list![2, 3]], &Value::from(10));
        assert_eq!(v, list![11, list![12, 13]]);
        let v = add(&Value::from(10), &tuple![1, 2]);
        assert_eq!(v, tuple![11, 12]);
    }

    #[test]
    fn nesting_on_one_side_only() {
        let v = add(&list![1, 2], &list![list![10, 20], 100]);
        assert_eq!(v, list![list![11, 21], 102]);
    }

    #[test]
    fn fixed_infects_result_level() {
        let v = add(&list![1, 2], &tuple![10, 20]);
        assert_eq!(v.kind(), Some(Kind::Fixed));

        let v = add(&list![list![1, 2], list![3]], &list![tuple![10, 20], 5]);
        assert_eq!(v, list![tuple![11, 22], list![8]]);
    }

    #[test]
    fn empty_sequences() {
        assert_eq!(add(&list![], &list![]), list![]);
        assert_eq!(add(&list![], &tuple![]), tuple![]);
        assert_eq!(add(&list![1, 2], &list![]), list![]);
    }

    #[test]
    fn operator_errors_propagate_unchanged() {
        let err = map2(&list![1, "x"], &Value::from(1), ops::add).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedOperands { op: "add", .. }));

        let custom: Result<Value, &str> = map2(&list![1, 2], &list![3], |_, _| Err("boom"));
        assert_eq!(custom.unwrap_err(), "boom");
    }

    #[test]
    fn unary_keeps_kinds() {
        let v = map1(&list![1, tuple![2, 3]], |s| ops::mul(s, &Scalar::Int(2))).unwrap();
        assert_eq!(v, list![2, tuple![4, 6]]);
    }

    #[test]
    fn nary_passes_extra_args_verbatim() {
        let mut seen = Vec::new();
        let v = map_n(&list![1, list![2]], &[Value::from(100), list![7]], |s, args| {
            seen.push(args.len());
            let Some(Scalar::Int(offset)) = args[0].as_scalar() else {
                return Err("bad offset");
            };
            match s {
                Scalar::Int(i) => Ok(Value::from(i + offset)),
                _ => Err("not an int"),
            }
        })
        .unwrap();
        assert_eq!(v, list![101, list![102]]);
        assert_eq!(seen, vec![2, 2]);
    }
}
