use pretty_assertions::assert_eq;
use sigcodec::{get_qualifier, get_simple_name, get_simple_names, to_qualified_name};

#[test]
fn qualifier_and_simple_name() {
    assert_eq!(get_qualifier("java.lang.Object"), "java.lang");
    assert_eq!(get_simple_name("java.lang.Object"), "Object");
    assert_eq!(get_qualifier("NoDots"), "");
    assert_eq!(get_simple_name("NoDots"), "NoDots");
}

#[test]
fn segment_splitting() {
    assert_eq!(get_simple_names("java.lang.Object"), ["java", "lang", "Object"]);
    assert_eq!(get_simple_names("Object"), ["Object"]);
    assert!(get_simple_names("").is_empty());
}

#[test]
fn join_round_trip() {
    for segments in [vec!["java", "lang", "Object"], vec!["a", "b"], vec!["only"]] {
        let joined = to_qualified_name(&segments);
        assert_eq!(get_simple_names(&joined), segments);
    }
    assert_eq!(to_qualified_name(&[]), "");
    assert_eq!(to_qualified_name(&["Object"]), "Object");
}

#[test]
fn no_stray_dots() {
    let joined = to_qualified_name(&["a", "b", "c"]);
    assert!(!joined.starts_with('.'));
    assert!(!joined.ends_with('.'));
    assert_eq!(joined, "a.b.c");
}
