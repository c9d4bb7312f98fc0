//! Boundary scanners and introspection for compact signatures
//!
//! Each scanner locates the index of the *last* character of the syntactic
//! unit starting at `start`, using only index arithmetic over a flat char
//! buffer. No output is built during a scan; callers slice the buffer once
//! the boundaries are known. The introspection functions at the bottom of
//! the module use the scanners to walk method signatures and formal type
//! parameters.

use crate::consts::{
    BASE_TYPE_CHARS, C_ARRAY, C_COLON, C_GENERIC_END, C_GENERIC_START, C_PARAM_END,
    C_PARAM_START, C_RESOLVED, C_SEMICOLON, C_STAR, C_THROWS, C_TYPE_VARIABLE, C_UNRESOLVED,
};
use crate::error::{Error, Result};

/// The four syntactic categories a type signature can belong to,
/// discriminated by its leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSignatureKind {
    /// Primitive or void, e.g. `"I"`
    Base,
    /// Resolved (`L...;`) or unresolved (`Q...;`) named type
    Class,
    /// Type variable reference, e.g. `"Tx;"`
    TypeVariable,
    /// Array type, e.g. `"[I"`
    Array,
}

/// Classifies the given type signature by its leading character.
pub fn get_type_signature_kind(type_signature: &str) -> Result<TypeSignatureKind> {
    let c = type_signature
        .chars()
        .next()
        .ok_or_else(|| Error::syntax("empty type signature"))?;
    match c {
        C_ARRAY => Ok(TypeSignatureKind::Array),
        C_RESOLVED | C_UNRESOLVED => Ok(TypeSignatureKind::Class),
        C_TYPE_VARIABLE => Ok(TypeSignatureKind::TypeVariable),
        c if BASE_TYPE_CHARS.contains(c) => Ok(TypeSignatureKind::Base),
        c => Err(Error::syntax(format!("unknown signature marker '{c}'"))),
    }
}

/// Scans a type signature and returns the index of its last character.
///
/// Dispatches on the leading marker:
///
/// ```text
/// TypeSignature:
///   |  BaseTypeSignature
///   |  ArrayTypeSignature
///   |  ClassTypeSignature
///   |  TypeVariableSignature
/// ```
pub fn scan_type_signature(sig: &[char], start: usize) -> Result<usize> {
    let c = *sig
        .get(start)
        .ok_or_else(|| Error::syntax("type signature starts past end of buffer"))?;
    match c {
        C_ARRAY => scan_array_type_signature(sig, start),
        C_RESOLVED | C_UNRESOLVED => scan_class_type_signature(sig, start),
        C_TYPE_VARIABLE => scan_type_variable_signature(sig, start),
        c if BASE_TYPE_CHARS.contains(c) => scan_base_type_signature(sig, start),
        c => Err(Error::syntax(format!("unknown signature marker '{c}'"))),
    }
}

/// Scans a base type signature: a single character in `BCDFIJSVZ`.
pub fn scan_base_type_signature(sig: &[char], start: usize) -> Result<usize> {
    match sig.get(start) {
        Some(c) if BASE_TYPE_CHARS.contains(*c) => Ok(start),
        Some(c) => Err(Error::syntax(format!("'{c}' is not a base type code"))),
        None => Err(Error::syntax("base type signature starts past end of buffer")),
    }
}

/// Scans an array type signature: `[` followed by a type signature.
pub fn scan_array_type_signature(sig: &[char], start: usize) -> Result<usize> {
    // need a minimum 2 chars
    if start + 1 >= sig.len() {
        return Err(Error::syntax("array signature has no element type"));
    }
    if sig[start] != C_ARRAY {
        return Err(Error::syntax("array signature must start with '['"));
    }
    scan_type_signature(sig, start + 1)
}

/// Scans a type variable signature: `T` Identifier `;`.
pub fn scan_type_variable_signature(sig: &[char], start: usize) -> Result<usize> {
    // need a minimum 3 chars "Tx;"
    if start + 2 >= sig.len() {
        return Err(Error::syntax("type variable signature is too short"));
    }
    if sig[start] != C_TYPE_VARIABLE {
        return Err(Error::syntax("type variable signature must start with 'T'"));
    }
    let id = scan_identifier(sig, start + 1)?;
    match sig.get(id + 1) {
        Some(&C_SEMICOLON) => Ok(id + 1),
        _ => Err(Error::syntax("unterminated type variable signature")),
    }
}

/// Scans an identifier and returns the index of its last character.
/// Stop characters are `<`, `>`, `:`, `;`, `.` and `/`; the scan also ends
/// at the buffer end.
pub fn scan_identifier(sig: &[char], start: usize) -> Result<usize> {
    if start >= sig.len() {
        return Err(Error::syntax("identifier starts past end of buffer"));
    }
    let mut p = start;
    while p < sig.len() {
        let c = sig[p];
        if c == '<' || c == '>' || c == ':' || c == ';' || c == '.' || c == '/' {
            break;
        }
        p += 1;
    }
    // the identifier ends just before the stop character (or at the buffer end)
    p.checked_sub(1)
        .ok_or_else(|| Error::syntax("empty identifier"))
}

/// Scans a class type signature and returns the index of the terminating `;`.
///
/// ```text
/// ClassTypeSignature:
///     { L | Q } Identifier
///         { { / | . } Identifier [ < TypeArgumentSignature* > ] }
///     ;
/// ```
///
/// All `/`-separated segments are supposed to come before `.`-separated
/// ones, but there is no syntactic ambiguity either way and the scanner
/// accepts any mix.
pub fn scan_class_type_signature(sig: &[char], start: usize) -> Result<usize> {
    // need a minimum 3 chars "Lx;"
    if start + 2 >= sig.len() {
        return Err(Error::syntax("class type signature is too short"));
    }
    let c = sig[start];
    if c != C_RESOLVED && c != C_UNRESOLVED {
        return Err(Error::syntax("class type signature must start with 'L' or 'Q'"));
    }
    let mut p = start + 1;
    loop {
        let c = *sig
            .get(p)
            .ok_or_else(|| Error::syntax("unterminated class type signature"))?;
        if c == C_SEMICOLON {
            return Ok(p);
        } else if c == C_GENERIC_START {
            // skip the whole argument list so a ';' inside it does not
            // terminate the scan early
            p = scan_type_argument_signatures(sig, p)?;
        } else if c == '.' || c == '/' {
            p = scan_identifier(sig, p + 1)?;
        }
        p += 1;
    }
}

/// Scans a `<...>` type argument list. Zero arguments scan without
/// complaint even though the grammar expects at least one.
pub fn scan_type_argument_signatures(sig: &[char], start: usize) -> Result<usize> {
    // need a minimum 2 chars "<>"
    if start + 1 >= sig.len() {
        return Err(Error::syntax("type argument list is too short"));
    }
    if sig[start] != C_GENERIC_START {
        return Err(Error::syntax("type argument list must start with '<'"));
    }
    let mut p = start + 1;
    loop {
        let c = *sig
            .get(p)
            .ok_or_else(|| Error::syntax("unterminated type argument list"))?;
        if c == C_GENERIC_END {
            return Ok(p);
        }
        p = scan_type_argument_signature(sig, p)? + 1;
    }
}

/// Scans a single type argument: `*`, `+Type`, `-Type` or a plain type.
/// Base types are not allowed here semantically but scan without complaint.
pub fn scan_type_argument_signature(sig: &[char], start: usize) -> Result<usize> {
    let c = *sig
        .get(start)
        .ok_or_else(|| Error::syntax("type argument starts past end of buffer"))?;
    match c {
        C_STAR => Ok(start),
        '+' | '-' => scan_type_signature(sig, start + 1),
        _ => scan_type_signature(sig, start),
    }
}

/// Returns the array nesting depth of the given type signature: the count
/// of its leading `[` characters. A signature consisting of nothing but
/// `[` (or nothing at all) is syntactically incorrect.
pub fn get_array_count(type_signature: &str) -> Result<usize> {
    let mut count = 0;
    for c in type_signature.chars() {
        if c != C_ARRAY {
            return Ok(count);
        }
        count += 1;
    }
    Err(Error::syntax("array signature has no element type"))
}

/// Returns the type signature with all array nesting removed.
pub fn get_element_type(type_signature: &str) -> Result<&str> {
    let count = get_array_count(type_signature)?;
    // leading '[' characters are single-byte, so this slice is safe
    Ok(&type_signature[count..])
}

/// Returns the number of parameter types in the given method signature.
pub fn get_parameter_count(method_signature: &str) -> Result<usize> {
    let sig: Vec<char> = method_signature.chars().collect();
    let open = sig
        .iter()
        .position(|&c| c == C_PARAM_START)
        .ok_or_else(|| Error::syntax("method signature has no '('"))?;
    let mut count = 0;
    let mut i = open + 1;
    loop {
        match sig.get(i) {
            None => return Err(Error::syntax("unterminated parameter list")),
            Some(&C_PARAM_END) => return Ok(count),
            Some(_) => {
                i = scan_type_signature(&sig, i)? + 1;
                count += 1;
            }
        }
    }
}

/// Extracts the parameter type signatures from the given method signature,
/// in declaration order.
pub fn get_parameter_types(method_signature: &str) -> Result<Vec<String>> {
    let sig: Vec<char> = method_signature.chars().collect();
    let open = sig
        .iter()
        .position(|&c| c == C_PARAM_START)
        .ok_or_else(|| Error::syntax("method signature has no '('"))?;
    let mut result = Vec::new();
    let mut i = open + 1;
    loop {
        match sig.get(i) {
            None => return Err(Error::syntax("unterminated parameter list")),
            Some(&C_PARAM_END) => return Ok(result),
            Some(_) => {
                let e = scan_type_signature(&sig, i)?;
                result.push(sig[i..=e].iter().collect());
                i = e + 1;
            }
        }
    }
}

/// Extracts the return type from the given method signature: everything
/// after the *last* `)`, up to (but excluding) any `^` throws marker.
pub fn get_return_type(method_signature: &str) -> Result<&str> {
    let close = method_signature
        .rfind(C_PARAM_END)
        .ok_or_else(|| Error::syntax("method signature has no ')'"))?;
    let rest = &method_signature[close + 1..];
    match rest.find(C_THROWS) {
        Some(caret) => Ok(&rest[..caret]),
        None => Ok(rest),
    }
}

/// Extracts the type variable name from a formal type parameter signature:
/// everything before the first `:`.
pub fn get_type_variable(formal_type_parameter: &str) -> Result<&str> {
    let colon = formal_type_parameter
        .find(C_COLON)
        .ok_or_else(|| Error::syntax("formal type parameter has no ':'"))?;
    Ok(&formal_type_parameter[..colon])
}

/// Extracts the bounds from a formal type parameter signature. The class
/// bound, when present, comes first, followed by the interface bounds.
/// `"X:"` has no bounds at all and yields an empty list.
pub fn get_type_parameter_bounds(formal_type_parameter: &str) -> Result<Vec<String>> {
    let p1 = formal_type_parameter
        .find(C_COLON)
        .ok_or_else(|| Error::syntax("formal type parameter has no ':'"))?;
    if p1 == formal_type_parameter.len() - 1 {
        // no class or interface bounds
        return Ok(Vec::new());
    }
    let rest = &formal_type_parameter[p1 + 1..];
    match rest.find(C_COLON) {
        None => Ok(vec![rest.to_string()]),
        Some(p2) => {
            let mut bounds = Vec::new();
            if p2 > 0 {
                bounds.push(rest[..p2].to_string());
            }
            bounds.extend(rest[p2 + 1..].split(C_COLON).map(str::to_string));
            Ok(bounds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_scan_base_and_array() {
        assert_eq!(scan_type_signature(&chars("I"), 0), Ok(0));
        assert_eq!(scan_type_signature(&chars("[[I"), 0), Ok(2));
        assert!(scan_type_signature(&chars("["), 0).is_err());
        assert!(scan_type_signature(&chars("X"), 0).is_err());
    }

    #[test]
    fn test_scan_class_type() {
        let sig = chars("Ljava.lang.String;");
        assert_eq!(scan_class_type_signature(&sig, 0), Ok(sig.len() - 1));
        // a ';' inside type arguments must not terminate the scan
        let generic = chars("Ljava.util.List<Ljava.lang.String;>;");
        assert_eq!(scan_class_type_signature(&generic, 0), Ok(generic.len() - 1));
        assert!(scan_class_type_signature(&chars("L"), 0).is_err());
        assert!(scan_class_type_signature(&chars("Ljava.lang.String"), 0).is_err());
    }

    #[test]
    fn test_scan_type_variable() {
        assert_eq!(scan_type_variable_signature(&chars("Tx;"), 0), Ok(2));
        assert!(scan_type_variable_signature(&chars("Tx"), 0).is_err());
        assert!(scan_type_variable_signature(&chars("x;"), 0).is_err());
    }

    #[test]
    fn test_scan_empty_type_argument_list() {
        // the grammar tolerates zero arguments
        let sig = chars("<>");
        assert_eq!(scan_type_argument_signatures(&sig, 0), Ok(1));
    }

    #[test]
    fn test_scan_wildcard_arguments() {
        assert_eq!(scan_type_argument_signature(&chars("*"), 0), Ok(0));
        assert_eq!(scan_type_argument_signature(&chars("+Tx;"), 0), Ok(3));
        assert_eq!(scan_type_argument_signature(&chars("-QString;"), 0), Ok(8));
    }

    #[test]
    fn test_kind() {
        assert_eq!(get_type_signature_kind("[I"), Ok(TypeSignatureKind::Array));
        assert_eq!(get_type_signature_kind("I"), Ok(TypeSignatureKind::Base));
        assert_eq!(get_type_signature_kind("Tx;"), Ok(TypeSignatureKind::TypeVariable));
        assert_eq!(get_type_signature_kind("QString;"), Ok(TypeSignatureKind::Class));
        assert!(get_type_signature_kind("").is_err());
        assert!(get_type_signature_kind("*").is_err());
    }

    #[test]
    fn test_array_count_and_element_type() {
        assert_eq!(get_array_count("I"), Ok(0));
        assert_eq!(get_array_count("[[I"), Ok(2));
        assert!(get_array_count("[[").is_err());
        assert!(get_array_count("").is_err());
        assert_eq!(get_element_type("[[Ljava.lang.String;"), Ok("Ljava.lang.String;"));
        assert_eq!(get_element_type("I"), Ok("I"));
    }
}
