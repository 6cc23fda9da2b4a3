use continuum_core::{DataType, LabelMap};
use continuum_data::{InMemoryDataset, InMemoryLabelMaps};

pub type Sample = Vec<f32>;

/// A 3x3 "image" filled with `value`.
#[allow(dead_code)]
pub fn image(value: f32) -> Sample {
    vec![value; 9]
}

/// Six 3x3 label maps over classes 1..=6, referenced by path-like keys.
///
/// | sample | classes        |
/// |--------|----------------|
/// | 0      | 0, 1           |
/// | 1      | 0, 2, 255      |
/// | 2      | 1, 3           |
/// | 3      | 0, 4, 5        |
/// | 4      | 0, 255         |
/// | 5      | 2, 6           |
#[allow(dead_code)]
pub fn segmentation_fixture(train: bool) -> (InMemoryDataset<Sample, String>, InMemoryLabelMaps<String>) {
    let maps: Vec<Vec<u8>> = vec![
        vec![0, 0, 0, 1, 1, 1, 0, 0, 0],
        vec![0, 2, 2, 2, 255, 255, 0, 0, 0],
        vec![1, 1, 1, 3, 3, 3, 1, 1, 1],
        vec![0, 4, 4, 5, 5, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 255, 0, 0, 0, 0],
        vec![2, 2, 6, 6, 6, 6, 2, 2, 2],
    ];
    let references: Vec<String> = (0..maps.len()).map(|i| format!("labels/{}.png", i)).collect();
    let decoder: InMemoryLabelMaps<String> = references
        .iter()
        .cloned()
        .zip(maps)
        .map(|(reference, data)| (reference, LabelMap::new(data, vec![3, 3]).expect("valid label map")))
        .collect();
    let x = (0..references.len()).map(|i| image(i as f32)).collect();
    let dataset = InMemoryDataset::new(x, references, train, DataType::Segmentation).expect("valid dataset");
    (dataset, decoder)
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
