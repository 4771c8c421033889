//! Flop: column-to-row transposition with cyclic wrap per column.

use crate::normalize::bubble_items;
use crate::traverse::{max_depth, max_size_at_depth, wrap_at_depth};
use crate::value::{Kind, Scalar, Value};

/// Transpose `columns` into rows.
///
/// Each column is bubbled first (`nil` becomes `[nil]`). The result has as
/// many rows as the longest column; row `i` takes element `i` of every
/// column, wrapping around shorter ones. An empty column contributes an
/// empty sequence to every row. No columns at all yield one empty row.
pub fn flop(columns: &[Value]) -> Vec<Value> {
    if columns.is_empty() {
        return vec![Value::empty()];
    }
    let columns: Vec<Vec<Value>> = columns
        .iter()
        .map(|column| match column {
            Value::Scalar(Scalar::Nil) => vec![Value::nil()],
            other => bubble_items(other),
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    if columns.iter().any(Vec::is_empty) {
        log::trace!("flop: empty column fills {rows} rows with empty cells");
    }
    (0..rows)
        .map(|i| {
            Value::list(
                columns
                    .iter()
                    .map(|column| {
                        if column.is_empty() {
                            Value::empty()
                        } else {
                            column[i % column.len()].clone()
                        }
                    })
                    .collect(),
            )
        })
        .collect()
}

/// Flop several groups of columns so that short inner lists survive.
///
/// A stand-in column as long as the longest inner list of any group is
/// appended before flopping each group and dropped from every row
/// afterwards. Plain `flop` would otherwise stop at the longest column of
/// the group.
pub fn flop_together(groups: &[Vec<Value>]) -> Vec<Vec<Value>> {
    let longest = groups
        .iter()
        .flatten()
        .filter_map(|column| match column {
            Value::Seq(Kind::Plain, items) => Some(items.len()),
            _ => None,
        })
        .max()
        .unwrap_or(0);
    let stand_in = Value::list(vec![Value::nil(); longest]);
    groups
        .iter()
        .map(|group| {
            let mut columns = group.clone();
            columns.push(stand_in.clone());
            flop(&columns)
                .into_iter()
                .map(|row| match row {
                    Value::Seq(kind, mut cells) => {
                        cells.pop();
                        Value::Seq(kind, cells)
                    }
                    other => other,
                })
                .collect()
        })
        .collect()
}

/// Flop at nesting level `rank` instead of the top level.
///
/// `None` picks `max_depth(value) - 1`. Ranks up to 1 are a plain
/// [`flop`] of the elements; deeper ranks produce one row per cyclic
/// index, up to the largest size found at that level.
pub fn flop_deep(value: &Value, rank: Option<usize>) -> Vec<Value> {
    let rank = rank.unwrap_or_else(|| max_depth(value).saturating_sub(1));
    if rank <= 1 {
        return match value {
            Value::Seq(_, items) => flop(items),
            scalar => flop(std::slice::from_ref(scalar)),
        };
    }
    let rows = max_size_at_depth(value, rank);
    (0..rows).map(|i| wrap_at_depth(value, rank, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, tuple};

    #[test]
    fn flop_rectangular() {
        let rows = flop(&[list![1, 2, 3], list![4, 5, 6]]);
        assert_eq!(rows, vec![list![1, 4], list![2, 5], list![3, 6]]);
    }

    #[test]
    fn flop_wraps_short_columns() {
        let rows = flop(&[list![1, 2], list![10, 20, 30], Value::from(7)]);
        assert_eq!(rows, vec![list![1, 10, 7], list![2, 20, 7], list![1, 30, 7]]);
    }

    #[test]
    fn flop_empty_column_gives_empty_cells() {
        let rows = flop(&[list![1, 2], list![]]);
        assert_eq!(rows, vec![list![1, list![]], list![2, list![]]]);
    }

    #[test]
    fn flop_no_columns() {
        assert_eq!(flop(&[]), vec![list![]]);
    }

    #[test]
    fn flop_all_columns_empty() {
        assert!(flop(&[list![], list![]]).is_empty());
    }

    #[test]
    fn flop_nil_and_tuples_are_single_cells() {
        let rows = flop(&[Value::nil(), tuple![1, 2], list![3, 4]]);
        assert_eq!(
            rows,
            vec![
                list![Value::nil(), tuple![1, 2], 3],
                list![Value::nil(), tuple![1, 2], 4],
            ]
        );
    }

    #[test]
    fn flop_together_keeps_short_rows() {
        let groups = vec![
            vec![list![1, 2], list![3]],
            vec![list![10, 20, 30, 40]],
        ];
        let out = flop_together(&groups);
        assert_eq!(
            out[0],
            vec![list![1, 3], list![2, 3], list![1, 3], list![2, 3]]
        );
        assert_eq!(out[1], vec![list![10], list![20], list![30], list![40]]);
    }

    #[test]
    fn flop_deep_defaults_to_one_above_max_depth() {
        // max_depth 2, so rank 1: a plain flop.
        let v = list![list![1, 2], list![3, 4]];
        assert_eq!(flop_deep(&v, None), vec![list![1, 3], list![2, 4]]);
    }

    #[test]
    fn flop_deep_at_rank_two() {
        let v = list![list![list![1, 2], 3], list![4]];
        let rows = flop_deep(&v, Some(2));
        assert_eq!(
            rows,
            vec![list![list![1, 3], list![4]], list![list![2, 3], list![4]]]
        );
    }

    #[test]
    fn flop_deep_default_rank_on_three_levels() {
        // max_depth 3, so rank 2.
        let v = list![list![list![1, 2], 3], list![4]];
        assert_eq!(flop_deep(&v, None), flop_deep(&v, Some(2)));
        assert_eq!(flop_deep(&v, None).len(), 2);
    }

    #[test]
    fn flop_deep_keeps_tuples_whole_at_every_rank() {
        let shallow = flop_deep(&list![tuple![1, 2], list![3, 4]], Some(1));
        assert_eq!(shallow, vec![list![tuple![1, 2], 3], list![tuple![1, 2], 4]]);

        let deep = flop_deep(&list![list![tuple![1, 2], 3]], Some(2));
        assert_eq!(deep, vec![list![list![tuple![1, 2], 3]]]);

        let mixed = flop_deep(&list![list![tuple![1, 2], list![3, 4]]], Some(2));
        assert_eq!(
            mixed,
            vec![
                list![list![tuple![1, 2], 3]],
                list![list![tuple![1, 2], 4]],
            ]
        );
    }
}
