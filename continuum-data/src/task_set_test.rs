// continuum-data/src/task_set_test.rs

use super::*;
use crate::decoder::InMemoryLabelMaps;
use continuum_core::{Lambda, Transform};
use std::sync::Arc;

fn negate() -> Compose<i32> {
    let t: Arc<dyn Transform<i32>> = Arc::new(Lambda::new("negate", |x: i32| Ok(-x)));
    Compose::new(vec![t])
}

#[test]
fn test_task_set_new_checks_lengths() {
    let err = TaskSet::new(vec![1, 2], vec![0], vec![0, 0], Compose::identity(), None, DataType::Tensor)
        .unwrap_err();
    assert!(matches!(err, ContinuumError::LengthMismatch { expected: 2, actual: 1, .. }));

    let err = TaskSet::new(vec![1, 2], vec![0, 1], vec![0], Compose::identity(), None, DataType::Tensor)
        .unwrap_err();
    assert!(matches!(err, ContinuumError::LengthMismatch { expected: 2, actual: 1, .. }));
}

#[test]
fn test_task_set_get_applies_transform() {
    let set = TaskSet::new(vec![1, 2, 3], vec![5, 6, 7], vec![1, 1, 1], negate(), None, DataType::Tensor)
        .unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.get(1).unwrap(), (-2, 6, 1));
    assert_eq!(set.get_raw(1).unwrap(), (&2, &6, 1));
    assert!(matches!(
        set.get(3),
        Err(ContinuumError::IndexOutOfBounds { index: 3, len: 3 })
    ));
}

#[test]
fn test_task_set_get_target_remaps() {
    let decoder: InMemoryLabelMaps<&'static str> = [
        ("m0", LabelMap::new(vec![0, 1, 2, 255], vec![4]).unwrap()),
    ]
    .into_iter()
    .collect();
    let remap = LabelRemap::new(&[2], &[1, 2, 3], false, false).unwrap();
    let set = TaskSet::new(
        vec!["img0"],
        vec!["m0"],
        vec![0],
        Compose::identity(),
        Some(remap),
        DataType::Segmentation,
    )
    .unwrap();

    let target = set.get_target(0, &decoder).unwrap();
    assert_eq!(target.data(), &[255, 0, 1, 255]);
    assert_eq!(set.data_type(), DataType::Segmentation);
}

#[test]
fn test_task_set_get_target_without_remap() {
    let decoder: InMemoryLabelMaps<u32> = [(0, LabelMap::new(vec![3, 4], vec![2]).unwrap())]
        .into_iter()
        .collect();
    let set = TaskSet::new(vec![0u8], vec![0u32], vec![0], Compose::identity(), None, DataType::Segmentation)
        .unwrap();
    assert!(set.target_transform().is_none());
    assert_eq!(set.get_target(0, &decoder).unwrap().data(), &[3, 4]);
}
