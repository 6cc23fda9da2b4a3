// continuum-data/src/decoder_test.rs

use super::*;

fn maps() -> InMemoryLabelMaps<String> {
    [
        ("a.png".to_string(), LabelMap::new(vec![0, 1, 1, 255], vec![2, 2]).unwrap()),
        ("b.png".to_string(), LabelMap::new(vec![2, 2, 3, 0], vec![2, 2]).unwrap()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_in_memory_decode() {
    let decoder = maps();
    assert_eq!(decoder.len(), 2);
    let map = decoder.decode(&"a.png".to_string()).unwrap();
    assert_eq!(map.data(), &[0, 1, 1, 255]);
}

#[test]
fn test_in_memory_unique_classes() {
    let decoder = maps();
    let classes = decoder.unique_classes(&"b.png".to_string()).unwrap();
    assert_eq!(classes.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
}

#[test]
fn test_in_memory_missing_reference() {
    let decoder = maps();
    match decoder.decode(&"missing.png".to_string()) {
        Err(ContinuumError::DecodeError { reference, .. }) => {
            assert_eq!(reference, "\"missing.png\"")
        }
        other => panic!("Expected DecodeError, got {:?}", other),
    }
    assert!(decoder.unique_classes(&"missing.png".to_string()).is_err());
}

#[test]
fn test_in_memory_insert_replaces() {
    let mut decoder: InMemoryLabelMaps<u32> = InMemoryLabelMaps::new();
    assert!(decoder.is_empty());
    assert!(decoder.insert(1, LabelMap::filled(4, vec![1])).is_none());
    let previous = decoder.insert(1, LabelMap::filled(5, vec![1]));
    assert_eq!(previous.unwrap().data(), &[4]);
    assert_eq!(decoder.decode(&1).unwrap().data(), &[5]);
}
