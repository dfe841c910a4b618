use crate::tokenize::Record;

#[test]
fn missing_key_is_absent() {
    let record: Record = [("srcip", "10.0.0.1")].into_iter().collect();

    assert_eq!(record.get("dstip"), None);
    assert!(!record.contains("dstip"));
    assert!(record.contains("srcip"));
}

#[test]
fn iter_visits_every_field() {
    let record: Record = [("a", "1"), ("b", "2")].into_iter().collect();

    let mut pairs: Vec<_> = record.iter().collect();
    pairs.sort();

    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}
