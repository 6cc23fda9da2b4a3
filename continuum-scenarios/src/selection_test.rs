// continuum-scenarios/src/selection_test.rs

use super::*;
use continuum_core::TaskSlice;

fn matrix() -> MembershipMatrix {
    MembershipMatrix::from_rows(
        vec![
            vec![true, false, false],
            vec![false, true, true],
            vec![false, false, false],
            vec![true, true, false],
            vec![false, false, true],
        ],
        3,
    )
    .unwrap()
}

#[test]
fn test_select_per_sample() {
    let x = vec!["a", "b", "c", "d"];
    let y = vec![10, 11, 12, 13];
    let t = vec![0, 1, 1, 2];
    let selection = select_data_by_task(&x, &y, TaskAssignment::PerSample(&t), &TaskIndex::from(1), 3).unwrap();
    assert_eq!(selection.x, vec!["b", "c"]);
    assert_eq!(selection.y, vec![11, 12]);
    assert_eq!(selection.t, vec![1, 1]);
    assert_eq!(selection.task_indexes, vec![1]);
}

#[test]
fn test_select_per_sample_negative_and_slice() {
    let x = vec![0, 1, 2, 3];
    let t = vec![0, 1, 1, 2];
    let last = select_data_by_task(&x, &x, TaskAssignment::PerSample(&t), &TaskIndex::from(-1), 3).unwrap();
    assert_eq!(last.x, vec![3]);

    let first_two = select_data_by_task(&x, &x, TaskAssignment::PerSample(&t), &TaskIndex::from(..2), 3).unwrap();
    assert_eq!(first_two.x, vec![0, 1, 2]);
    assert_eq!(first_two.t, vec![0, 1, 1]);
}

#[test]
fn test_select_matrix_single_task() {
    let x: Vec<usize> = (0..5).collect();
    let m = matrix();
    let selection = select_data_by_task(&x, &x, TaskAssignment::Matrix(&m), &TaskIndex::from(1), 3).unwrap();
    assert_eq!(selection.x, vec![1, 3]);
    assert_eq!(selection.t, vec![1, 1]);
}

#[test]
fn test_select_matrix_slice_reports_earliest_task() {
    let x: Vec<usize> = (0..5).collect();
    let m = matrix();
    let selection = select_data_by_task(&x, &x, TaskAssignment::Matrix(&m), &TaskIndex::from(1..3), 3).unwrap();
    assert_eq!(selection.x, vec![1, 3, 4]);
    assert_eq!(selection.t, vec![1, 1, 2]);
    assert_eq!(selection.task_indexes, vec![1, 2]);

    let all = select_data_by_task(&x, &x, TaskAssignment::Matrix(&m), &TaskIndex::Slice(TaskSlice::full()), 3).unwrap();
    // sample 2 belongs to no task and is never selected
    assert_eq!(all.x, vec![0, 1, 3, 4]);
    assert_eq!(all.t, vec![0, 1, 0, 2]);
}

#[test]
fn test_select_errors() {
    let x = vec![0, 1];
    let t = vec![0, 0];
    assert!(matches!(
        select_data_by_task(&x, &[0], TaskAssignment::PerSample(&t), &TaskIndex::from(0), 1),
        Err(ContinuumError::LengthMismatch { .. })
    ));
    assert!(matches!(
        select_data_by_task(&x, &x, TaskAssignment::PerSample(&[0]), &TaskIndex::from(0), 1),
        Err(ContinuumError::LengthMismatch { .. })
    ));
    assert_eq!(
        select_data_by_task(&x, &x, TaskAssignment::PerSample(&t), &TaskIndex::from(3), 2).unwrap_err(),
        ContinuumError::TaskIndexOutOfRange { index: 3, nb_tasks: 2 }
    );
}
