use pretty_assertions::assert_eq;
use scheduler::{priority, Discipline};

use super::{pids, records, turnarounds, waitings};

#[test]
fn sorts_by_priority_then_runs_fcfs() {
    let mut plist = records(&[(1, 24, 0, 3), (2, 3, 0, 1), (3, 3, 0, 2)]);

    priority().run(&mut plist);

    assert_eq!(pids(&plist), vec![2u32, 3, 1]);
    assert_eq!(waitings(&plist), vec![0, 3, 6]);
    assert_eq!(turnarounds(&plist), vec![3, 6, 30]);
}

#[test]
fn equal_priorities_keep_input_order() {
    let mut plist = records(&[(1, 2, 0, 1), (2, 2, 0, 1), (3, 1, 0, 0)]);

    priority().run(&mut plist);

    assert_eq!(pids(&plist), vec![3u32, 1, 2]);
    assert_eq!(waitings(&plist), vec![0, 1, 3]);
}

#[test]
fn negative_priorities_sort_first() {
    let mut plist = records(&[(1, 4, 0, 0), (2, 2, 0, -5)]);

    priority().run(&mut plist);

    assert_eq!(pids(&plist), vec![2u32, 1]);
    assert_eq!(waitings(&plist), vec![0, 2]);
}

#[test]
fn empty_workload_is_a_no_op() {
    let mut plist = records(&[]);

    priority().run(&mut plist);

    assert!(plist.is_empty());
}
