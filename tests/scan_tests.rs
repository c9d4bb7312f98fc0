use pretty_assertions::assert_eq;
use sigcodec::scan::{
    scan_array_type_signature, scan_base_type_signature, scan_class_type_signature,
    scan_identifier, scan_type_argument_signatures, scan_type_signature,
    scan_type_variable_signature,
};
use sigcodec::{get_type_signature_kind, TypeSignatureKind};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn base_type_scans_single_char() {
    let sig = chars("I");
    assert_eq!(scan_base_type_signature(&sig, 0).unwrap(), 0);
    for c in "BCDFIJSVZ".chars() {
        let one = vec![c];
        assert_eq!(scan_base_type_signature(&one, 0).unwrap(), 0);
    }
    assert!(scan_base_type_signature(&chars("L"), 0).is_err());
}

#[test]
fn array_scan_recurses_into_element() {
    let sig = chars("[[Ljava.lang.String;");
    assert_eq!(scan_array_type_signature(&sig, 0).unwrap(), sig.len() - 1);
    assert_eq!(scan_array_type_signature(&sig, 1).unwrap(), sig.len() - 1);
    // a bare '[' has no element type
    assert!(scan_array_type_signature(&chars("["), 0).is_err());
}

#[test]
fn class_scan_stops_at_terminator() {
    let sig = chars("Ljava.lang.String;I");
    assert_eq!(scan_class_type_signature(&sig, 0).unwrap(), sig.len() - 2);
    // the trailing base type is a separate unit
    assert_eq!(scan_type_signature(&sig, sig.len() - 1).unwrap(), sig.len() - 1);
}

#[test]
fn class_scan_skips_generic_argument_lists() {
    let sig = chars("Ljava.util.Map<Ljava.lang.String;Tv;>;");
    assert_eq!(scan_class_type_signature(&sig, 0).unwrap(), sig.len() - 1);
}

#[test]
fn class_scan_accepts_slash_separators() {
    let sig = chars("Ljava/lang/String;");
    assert_eq!(scan_class_type_signature(&sig, 0).unwrap(), sig.len() - 1);
}

#[test]
fn unterminated_class_scan_fails() {
    assert!(scan_class_type_signature(&chars("L"), 0).is_err());
    assert!(scan_class_type_signature(&chars("Ljava.lang.String"), 0).is_err());
    assert!(scan_class_type_signature(&chars("Ljava.util.Map<QString;"), 0).is_err());
}

#[test]
fn type_variable_scan() {
    let sig = chars("Telement;");
    assert_eq!(scan_type_variable_signature(&sig, 0).unwrap(), sig.len() - 1);
    assert!(scan_type_variable_signature(&chars("T;"), 0).is_err());
    assert!(scan_type_variable_signature(&chars("Telement"), 0).is_err());
}

#[test]
fn identifier_scan_stops_at_delimiters() {
    let sig = chars("Tfoo;bar");
    assert_eq!(scan_identifier(&sig, 1).unwrap(), 3);
    // runs to the buffer end when no delimiter follows
    let plain = chars("abc");
    assert_eq!(scan_identifier(&plain, 0).unwrap(), 2);
}

#[test]
fn type_argument_list_tolerates_empty() {
    let sig = chars("<>");
    assert_eq!(scan_type_argument_signatures(&sig, 0).unwrap(), 1);
    let wild = chars("<*+I-QString;>");
    assert_eq!(scan_type_argument_signatures(&wild, 0).unwrap(), wild.len() - 1);
}

#[test]
fn kind_classification() {
    assert_eq!(get_type_signature_kind("[I").unwrap(), TypeSignatureKind::Array);
    assert_eq!(get_type_signature_kind("I").unwrap(), TypeSignatureKind::Base);
    assert_eq!(get_type_signature_kind("Tx;").unwrap(), TypeSignatureKind::TypeVariable);
    assert_eq!(
        get_type_signature_kind("Ljava.lang.String;").unwrap(),
        TypeSignatureKind::Class
    );
    assert_eq!(get_type_signature_kind("QString;").unwrap(), TypeSignatureKind::Class);
    assert!(get_type_signature_kind("(I)V").is_err());
}

#[test]
fn unknown_marker_is_a_syntax_error() {
    assert!(scan_type_signature(&chars("W"), 0).is_err());
    assert!(scan_type_signature(&chars(""), 0).is_err());
}
