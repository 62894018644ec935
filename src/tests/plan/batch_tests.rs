//! Tests for grouping pending writes by destination.

use crate::plan::{PendingWrite, batch_by_destination};
use crate::strategy::FileResult;

fn write(path: &str, content: &str) -> PendingWrite {
    PendingWrite {
        result: FileResult::new(path, content),
        bytes: content.as_bytes().to_vec(),
    }
}

fn shape(batches: &[Vec<(usize, PendingWrite)>]) -> Vec<Vec<(usize, &str)>> {
    batches
        .iter()
        .map(|batch| {
            batch
                .iter()
                .map(|(index, w)| (*index, w.result.content.as_str()))
                .collect()
        })
        .collect()
}

#[test]
fn distinct_paths_get_one_batch_each() {
    let batches = batch_by_destination(vec![
        write("out/a.txt", "a"),
        write("out/b.txt", "b"),
        write("out/c.txt", "c"),
    ]);
    assert_eq!(shape(&batches), vec![vec![(0, "a")], vec![(1, "b")], vec![(2, "c")]]);
}

#[test]
fn shared_paths_keep_result_order_within_a_batch() {
    let batches = batch_by_destination(vec![
        write("flat/same.txt", "first"),
        write("flat/other.txt", "other"),
        write("flat/same.txt", "second"),
        write("flat/same.txt", "third"),
    ]);
    assert_eq!(
        shape(&batches),
        vec![
            vec![(0, "first"), (2, "second"), (3, "third")],
            vec![(1, "other")],
        ]
    );
}

#[test]
fn no_writes_no_batches() {
    assert!(batch_by_destination(Vec::new()).is_empty());
}
