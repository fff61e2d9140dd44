use cellcheck::collation::compare_values;
use cellcheck::sort_values;
use std::cmp::Ordering;

fn sorted(values: &[&str]) -> Vec<String> {
    sort_values(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn case_insensitive_with_digits_last() {
    assert_eq!(
        sorted(&["banana", "Apple", "10", "zebra", "Apple"]),
        vec!["Apple", "Apple", "banana", "zebra", "10"]
    );
}

#[test]
fn equal_keys_keep_input_order() {
    assert_eq!(
        sorted(&["apple", "APPLE", "Apple"]),
        vec!["apple", "APPLE", "Apple"]
    );
    assert_eq!(sorted(&["Éclair", "eclair"]), vec!["Éclair", "eclair"]);
}

#[test]
fn accented_letters_sort_with_their_base_letter() {
    assert_eq!(
        sorted(&["zulu", "éclair", "Echo", "dune"]),
        vec!["dune", "Echo", "éclair", "zulu"]
    );
}

#[test]
fn symbols_and_digits_trail_letters() {
    assert_eq!(
        sorted(&["#hash", "9", "b", "(paren)", "A", "100"]),
        vec!["A", "b", "#hash", "(paren)", "100", "9"]
    );
}

#[test]
fn other_scripts_trail_latin_letters() {
    assert_eq!(
        sorted(&["10", "漢字", "Ωmega", "#x", "zebra"]),
        vec!["zebra", "#x", "10", "Ωmega", "漢字"]
    );
    assert_eq!(compare_values("жук", "42"), Ordering::Greater);
    assert_eq!(compare_values("Жук", "жук"), Ordering::Equal);
}

#[test]
fn empty_input_sorts_to_empty() {
    assert!(sort_values(Vec::new()).is_empty());
}
