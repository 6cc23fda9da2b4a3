// continuum-scenarios/src/segmentation_test.rs

use super::*;
use continuum_core::{LabelMap, TaskSlice};
use continuum_data::{Dataset, InMemoryDataset, InMemoryLabelMaps};

type Fixture = (InMemoryDataset<&'static str, &'static str>, InMemoryLabelMaps<&'static str>);

/// Five 2x2 label maps over classes 1..=4.
fn fixture(train: bool) -> Fixture {
    let maps: InMemoryLabelMaps<&'static str> = [
        ("m0", vec![0, 1, 1, 0]),
        ("m1", vec![0, 3, 3, 255]),
        ("m2", vec![1, 1, 3, 3]),
        ("m3", vec![0, 0, 255, 255]),
        ("m4", vec![2, 4, 4, 0]),
    ]
    .into_iter()
    .map(|(k, v)| (k, LabelMap::new(v, vec![2, 2]).unwrap()))
    .collect();
    let dataset = InMemoryDataset::new(
        vec!["img0", "img1", "img2", "img3", "img4"],
        vec!["m0", "m1", "m2", "m3", "m4"],
        train,
        DataType::Segmentation,
    )
    .unwrap();
    (dataset, maps)
}

fn build(train: bool, options: SegmentationOptions) -> Result<SegmentationClassIncremental<&'static str, &'static str>, ContinuumError> {
    let (dataset, maps) = fixture(train);
    SegmentationClassIncremental::new(&dataset, &maps, Compose::identity(), options)
}

#[test]
fn test_segmentation_overlap_tasks() {
    let scenario = build(true, SegmentationOptions::new(4, 2)).unwrap();
    assert_eq!(scenario.nb_tasks(), 2);
    assert_eq!(scenario.nb_classes(), 4);
    assert_eq!(scenario.classes(), &[1, 2, 3, 4]);
    assert_eq!(scenario.increments(), &[2, 2]);
    assert_eq!(scenario.nb_samples(), 5);

    let task0 = scenario.get(0).unwrap();
    assert_eq!(task0.x(), &["img0", "img2", "img4"]);
    assert_eq!(task0.task_ids(), &[0, 0, 0]);
    let task1 = scenario.get(1).unwrap();
    assert_eq!(task1.x(), &["img1", "img2", "img4"]);
    assert_eq!(task1.data_type(), DataType::Segmentation);
}

#[test]
fn test_segmentation_disjoint_tasks() {
    let scenario = build(true, SegmentationOptions::new(4, 2).with_mode(Mode::Disjoint)).unwrap();
    assert_eq!(scenario.get(0).unwrap().x(), &["img0"]);
    assert_eq!(scenario.get(1).unwrap().x(), &["img1", "img2", "img4"]);
    assert_eq!(scenario.membership().unassigned(), vec![3]);
}

#[test]
fn test_segmentation_negative_index_and_slice() {
    let scenario = build(true, SegmentationOptions::new(4, 1)).unwrap();
    assert_eq!(scenario.nb_tasks(), 4);

    let last = scenario.get(-1).unwrap();
    assert_eq!(last.x(), &["img4"]);

    let first_two = scenario.get(..2).unwrap();
    assert_eq!(first_two.x(), &["img0", "img2", "img4"]);
    assert_eq!(first_two.task_ids(), &[0, 0, 1]);
    // labels of a slice are the union of its tasks
    let remap = first_two.target_transform().unwrap();
    assert_eq!(remap.lookup(1), 0);
    assert_eq!(remap.lookup(2), 1);
    assert!(!remap.is_explicit(3));
}

#[test]
fn test_segmentation_rejects_stepped_slice() {
    let scenario = build(true, SegmentationOptions::new(4, 1)).unwrap();
    let stepped = TaskIndex::Slice(TaskSlice::full().with_step(1));
    assert_eq!(
        scenario.task_set(stepped).unwrap_err(),
        ContinuumError::SteppedSlice { step: 1 }
    );
}

#[test]
fn test_segmentation_out_of_range() {
    let scenario = build(true, SegmentationOptions::new(4, 2)).unwrap();
    assert_eq!(
        scenario.get(2).unwrap_err(),
        ContinuumError::TaskIndexOutOfRange { index: 2, nb_tasks: 2 }
    );
    assert!(scenario.task_labels(&[5]).is_err());
}

#[test]
fn test_segmentation_train_remap() {
    let scenario = build(true, SegmentationOptions::new(4, 2)).unwrap();
    let (_, maps) = fixture(true);
    let task1 = scenario.get(1).unwrap();
    // img1 -> m1 = [0, 3, 3, 255]
    let target = task1.get_target(0, &maps).unwrap();
    assert_eq!(target.data(), &[0, 2, 2, 0]);
    // img2 -> m2 = [1, 1, 3, 3], class 1 is not part of task 1
    let target = task1.get_target(1, &maps).unwrap();
    assert_eq!(target.data(), &[0, 0, 2, 2]);
}

#[test]
fn test_segmentation_test_remap_background() {
    let (dataset, maps) = fixture(false);
    let ignore_bg = SegmentationClassIncremental::new(
        &dataset,
        &maps,
        Compose::identity(),
        SegmentationOptions::new(4, 2).with_test_background(false),
    )
    .unwrap();
    assert!(!ignore_bg.is_train());
    let target = ignore_bg.get(1).unwrap().get_target(0, &maps).unwrap();
    assert_eq!(target.data(), &[255, 2, 2, 255]);

    let score_bg = SegmentationClassIncremental::new(&dataset, &maps, Compose::identity(), SegmentationOptions::new(4, 2))
        .unwrap();
    assert!(score_bg.test_background());
    let target = score_bg.get(1).unwrap().get_target(0, &maps).unwrap();
    assert_eq!(target.data(), &[0, 2, 2, 255]);
}

#[test]
fn test_segmentation_custom_class_order() {
    let options = SegmentationOptions::new(4, 2).with_class_order(vec![3, 4, 1, 2]);
    let scenario = build(true, options).unwrap();
    assert_eq!(scenario.task_labels(&[0]).unwrap(), vec![3, 4]);
    assert_eq!(scenario.get(0).unwrap().x(), &["img1", "img2", "img4"]);
    let remap = scenario.label_remap(&[1]).unwrap();
    assert_eq!(remap.lookup(1), 2);
    assert_eq!(remap.lookup(2), 3);
}

#[test]
fn test_segmentation_initial_increment() {
    let options = SegmentationOptions::new(4, 1).with_initial_increment(2);
    let scenario = build(true, options).unwrap();
    assert_eq!(scenario.increments(), &[2, 1, 1]);
    assert_eq!(scenario.task_labels(&[0, 2]).unwrap(), vec![1, 2, 4]);
}

#[test]
fn test_segmentation_configuration_errors() {
    assert_eq!(
        build(true, SegmentationOptions::new(0, 1)).unwrap_err(),
        ContinuumError::InvalidNbClasses { nb_classes: 0, max: MAX_CLASSES }
    );
    assert!(matches!(
        build(true, SegmentationOptions::new(255, 1)),
        Err(ContinuumError::InvalidNbClasses { .. })
    ));
    assert!(matches!(
        build(true, SegmentationOptions::new(4, 3)),
        Err(ContinuumError::UnevenIncrement { .. })
    ));
    for order in [vec![1, 2, 3], vec![1, 2, 3, 3], vec![0, 1, 2, 3], vec![1, 2, 3, 255]] {
        assert!(matches!(
            build(true, SegmentationOptions::new(4, 2).with_class_order(order)),
            Err(ContinuumError::InvalidClassOrder(_))
        ));
    }
}

#[test]
fn test_segmentation_missing_label_map() {
    let dataset = InMemoryDataset::new(vec!["img"], vec!["nowhere"], true, DataType::Segmentation).unwrap();
    let maps: InMemoryLabelMaps<&'static str> = InMemoryLabelMaps::new();
    let err = SegmentationClassIncremental::new(&dataset, &maps, Compose::identity(), SegmentationOptions::new(2, 1))
        .unwrap_err();
    assert!(matches!(err, ContinuumError::DecodeError { .. }));
}

#[test]
fn test_segmentation_iterates_tasks() {
    let scenario = build(true, SegmentationOptions::new(4, 2)).unwrap();
    let sizes: Vec<usize> = scenario.iter().map(|t| t.unwrap().len()).collect();
    assert_eq!(sizes, vec![3, 3]);
    assert_eq!(scenario.iter().len(), 2);
}
