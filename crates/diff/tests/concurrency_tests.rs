use rayon::prelude::*;
use superdiff::{DiffTag, Differ, Parser, Settings};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_shareable() {
    assert_send_sync::<Settings>();
    assert_send_sync::<Parser>();
    assert_send_sync::<Differ>();
}

#[test]
fn test_shared_differ_across_threads() {
    let differ = Differ::new(Settings::new().ignore_case(true));

    let pairs: Vec<(String, String)> = (0..64)
        .map(|i| {
            (
                format!("line {}\nSAME\n", i),
                format!("LINE {}\nsame\nextra {}\n", i, i),
            )
        })
        .collect();

    let results: Vec<Vec<DiffTag>> = pairs
        .par_iter()
        .map(|(old, new)| {
            differ
                .compare(old, new)
                .iter()
                .map(|record| record.tag)
                .collect()
        })
        .collect();

    for tags in results {
        assert_eq!(tags, vec![DiffTag::Equal, DiffTag::Equal, DiffTag::Insert]);
    }
}
