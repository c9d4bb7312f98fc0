//! Rendering of compact signatures into human-readable type expressions
//!
//! The renderers mirror the scanners in `scan`, but write into a growing
//! `String` accumulator as they walk the buffer. Package-qualifier
//! stripping relies on a checkpoint saved before the class name is walked:
//! while stripping is active, every segment boundary truncates the
//! accumulator back to the checkpoint, so only the last segment survives.

use crate::consts::{
    C_ARRAY, C_BOOLEAN, C_BYTE, C_CHAR, C_CONST, C_DOLLAR, C_DOUBLE, C_FLOAT, C_GENERIC_END,
    C_GENERIC_START, C_INT, C_LONG, C_PARAM_START, C_RESOLVED, C_SEMICOLON, C_SHORT, C_STAR,
    C_TYPE_VARIABLE, C_UNRESOLVED, C_VOID,
};
use crate::error::{Error, Result};
use crate::scan::{get_parameter_types, get_return_type, scan_type_variable_signature};

/// Converts a signature to a readable string. A buffer starting with `(`
/// or `<` is rendered as a method signature (fully qualified, return type
/// included); anything else as a single type, fully qualified.
///
/// ```
/// # use sigcodec::display::signature_to_string;
/// assert_eq!(signature_to_string("[Ljava.lang.String;").unwrap(), "java.lang.String[]");
/// assert_eq!(signature_to_string("I").unwrap(), "int");
/// ```
pub fn signature_to_string(signature: &str) -> Result<String> {
    if signature.is_empty()
        || signature.starts_with(C_PARAM_START)
        || signature.starts_with(C_GENERIC_START)
    {
        return method_signature_to_string(signature, None, None, true, true);
    }
    type_signature_to_string(signature, true)
}

/// Converts a single type signature to a readable string, keeping or
/// stripping package qualifiers per `fully_qualify`.
pub fn type_signature_to_string(type_signature: &str, fully_qualify: bool) -> Result<String> {
    let sig: Vec<char> = type_signature.chars().collect();
    let mut out = String::with_capacity(type_signature.len() + 10);
    append_type_signature(&sig, 0, fully_qualify, &mut out)?;
    Ok(out)
}

/// Converts a method signature to a readable form such as
/// `void main(String[] args)`.
///
/// The method name and parameter names are optional. When parameter names
/// are supplied their count must match the parameter count of the
/// signature; a mismatch is reported as an error rather than truncated.
pub fn method_signature_to_string(
    method_signature: &str,
    method_name: Option<&str>,
    parameter_names: Option<&[&str]>,
    fully_qualify: bool,
    include_return_type: bool,
) -> Result<String> {
    if !method_signature.contains(C_PARAM_START) {
        return Err(Error::syntax("method signature has no '('"));
    }
    let parameter_types = get_parameter_types(method_signature)?;
    if let Some(names) = parameter_names {
        if names.len() != parameter_types.len() {
            return Err(Error::ParameterNameCount {
                expected: parameter_types.len(),
                actual: names.len(),
            });
        }
    }

    let mut out = String::with_capacity(method_signature.len() + 10);
    if include_return_type {
        let return_type: Vec<char> = get_return_type(method_signature)?.chars().collect();
        append_type_signature(&return_type, 0, fully_qualify, &mut out)?;
        out.push(' ');
    }
    if let Some(name) = method_name {
        out.push_str(name);
    }
    out.push('(');
    for (i, parameter_type) in parameter_types.iter().enumerate() {
        let sig: Vec<char> = parameter_type.chars().collect();
        append_type_signature(&sig, 0, fully_qualify, &mut out)?;
        if let Some(names) = parameter_names {
            out.push(' ');
            out.push_str(names[i]);
        }
        if i != parameter_types.len() - 1 {
            out.push_str(", ");
        }
    }
    out.push(')');
    Ok(out)
}

/// Renders the type signature starting at `start` into `out` and returns
/// the index of its last character.
fn append_type_signature(
    sig: &[char],
    start: usize,
    fully_qualify: bool,
    out: &mut String,
) -> Result<usize> {
    let c = *sig
        .get(start)
        .ok_or_else(|| Error::syntax("type signature starts past end of buffer"))?;
    match c {
        C_ARRAY => append_array_type_signature(sig, start, fully_qualify, out),
        C_RESOLVED | C_UNRESOLVED => append_class_type_signature(sig, start, fully_qualify, out),
        C_TYPE_VARIABLE => {
            let e = scan_type_variable_signature(sig, start)?;
            out.extend(&sig[start + 1..e]);
            Ok(e)
        }
        C_BOOLEAN => {
            out.push_str("boolean");
            Ok(start)
        }
        C_BYTE => {
            out.push_str("byte");
            Ok(start)
        }
        C_CHAR => {
            out.push_str("char");
            Ok(start)
        }
        C_DOUBLE => {
            out.push_str("double");
            Ok(start)
        }
        C_FLOAT => {
            out.push_str("float");
            Ok(start)
        }
        C_INT => {
            out.push_str("int");
            Ok(start)
        }
        C_LONG => {
            out.push_str("long");
            Ok(start)
        }
        C_SHORT => {
            out.push_str("short");
            Ok(start)
        }
        C_VOID => {
            out.push_str("void");
            Ok(start)
        }
        C_CONST => {
            out.push_str("const");
            Ok(start)
        }
        c => Err(Error::syntax(format!("unknown signature marker '{c}'"))),
    }
}

/// Renders `[T` as the element type followed by a `[]` suffix, so `[[I`
/// comes out as `int[][]`.
fn append_array_type_signature(
    sig: &[char],
    start: usize,
    fully_qualify: bool,
    out: &mut String,
) -> Result<usize> {
    // need a minimum 2 chars
    if start + 1 >= sig.len() {
        return Err(Error::syntax("array signature has no element type"));
    }
    if sig[start] != C_ARRAY {
        return Err(Error::syntax("array signature must start with '['"));
    }
    let e = append_type_signature(sig, start + 1, fully_qualify, out)?;
    out.push_str("[]");
    Ok(e)
}

/// Renders a class type signature, walking it character by character.
///
/// Qualifier stripping is active only for resolved signatures when full
/// qualification was not requested, and flips off permanently at the first
/// type argument list or `$`: everything from that point on must survive.
/// A `$` in a resolved signature is rendered as `.` on the assumption that
/// it separates an inner class name. That assumption is wrong for the rare
/// type name that genuinely contains `$`, but deciding the difference would
/// require resolving the name.
fn append_class_type_signature(
    sig: &[char],
    start: usize,
    fully_qualify: bool,
    out: &mut String,
) -> Result<usize> {
    // need a minimum 3 chars "Lx;"
    if start + 2 >= sig.len() {
        return Err(Error::syntax("class type signature is too short"));
    }
    let marker = sig[start];
    if marker != C_RESOLVED && marker != C_UNRESOLVED {
        return Err(Error::syntax("class type signature must start with 'L' or 'Q'"));
    }
    let resolved = marker == C_RESOLVED;
    // an unresolved name is kept exactly as written
    let mut remove_package_qualifiers = !fully_qualify && resolved;
    let checkpoint = out.len();
    let mut p = start + 1;
    loop {
        let c = *sig
            .get(p)
            .ok_or_else(|| Error::syntax("unterminated class type signature"))?;
        match c {
            C_SEMICOLON => return Ok(p),
            C_GENERIC_START => {
                p = append_type_argument_signatures(sig, p, fully_qualify, out)?;
                // no more package prefixes once type arguments appear
                remove_package_qualifiers = false;
            }
            '.' | '/' => {
                if remove_package_qualifiers {
                    out.truncate(checkpoint);
                } else {
                    out.push(c);
                }
            }
            C_DOLLAR => {
                if resolved {
                    remove_package_qualifiers = false;
                    out.push('.');
                }
            }
            _ => out.push(c),
        }
        p += 1;
    }
}

/// Renders a `<A,B,...>` type argument list.
fn append_type_argument_signatures(
    sig: &[char],
    start: usize,
    fully_qualify: bool,
    out: &mut String,
) -> Result<usize> {
    // need a minimum 2 chars "<>"
    if start + 1 >= sig.len() {
        return Err(Error::syntax("type argument list is too short"));
    }
    if sig[start] != C_GENERIC_START {
        return Err(Error::syntax("type argument list must start with '<'"));
    }
    out.push('<');
    let mut p = start + 1;
    let mut count = 0;
    loop {
        let c = *sig
            .get(p)
            .ok_or_else(|| Error::syntax("unterminated type argument list"))?;
        if c == C_GENERIC_END {
            out.push('>');
            return Ok(p);
        }
        if count != 0 {
            out.push(',');
        }
        p = append_type_argument_signature(sig, p, fully_qualify, out)? + 1;
        count += 1;
    }
}

/// Renders a single type argument: `*` as `?`, `+T` as `? extends T`,
/// `-T` as `? super T`, anything else as a plain type.
fn append_type_argument_signature(
    sig: &[char],
    start: usize,
    fully_qualify: bool,
    out: &mut String,
) -> Result<usize> {
    let c = *sig
        .get(start)
        .ok_or_else(|| Error::syntax("type argument starts past end of buffer"))?;
    match c {
        C_STAR => {
            out.push('?');
            Ok(start)
        }
        '+' => {
            out.push_str("? extends ");
            append_type_signature(sig, start + 1, fully_qualify, out)
        }
        '-' => {
            out.push_str("? super ");
            append_type_signature(sig, start + 1, fully_qualify, out)
        }
        _ => append_type_signature(sig, start, fully_qualify, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_rendering() {
        assert_eq!(signature_to_string("I"), Ok("int".to_string()));
        assert_eq!(signature_to_string("[[I"), Ok("int[][]".to_string()));
        assert_eq!(signature_to_string("K"), Ok("const".to_string()));
    }

    #[test]
    fn test_qualifier_stripping() {
        assert_eq!(
            type_signature_to_string("Ljava.lang.String;", true),
            Ok("java.lang.String".to_string())
        );
        assert_eq!(
            type_signature_to_string("Ljava.lang.String;", false),
            Ok("String".to_string())
        );
        // unresolved names are never stripped
        assert_eq!(
            type_signature_to_string("Qjava.lang.String;", false),
            Ok("java.lang.String".to_string())
        );
    }

    #[test]
    fn test_inner_class_dollar() {
        assert_eq!(
            type_signature_to_string("Ljava.util.Map$Entry;", false),
            Ok("Map.Entry".to_string())
        );
        assert_eq!(
            type_signature_to_string("Ljava.util.Map$Entry;", true),
            Ok("java.util.Map.Entry".to_string())
        );
        // '$' in an unresolved signature is dropped
        assert_eq!(
            type_signature_to_string("QMap$Entry;", false),
            Ok("MapEntry".to_string())
        );
    }

    #[test]
    fn test_type_arguments() {
        assert_eq!(
            type_signature_to_string("Ljava.util.Map<Ljava.lang.String;*>;", false),
            Ok("Map<String,?>".to_string())
        );
        assert_eq!(
            type_signature_to_string("Ljava.util.List<+Ljava.lang.Number;>;", false),
            Ok("List<? extends Number>".to_string())
        );
        assert_eq!(
            type_signature_to_string("Ljava.util.List<-Tx;>;", true),
            Ok("java.util.List<? super x>".to_string())
        );
    }

    #[test]
    fn test_empty_type_argument_list() {
        assert_eq!(type_signature_to_string("La<>;", true), Ok("a<>".to_string()));
    }

    #[test]
    fn test_unterminated_signature_fails() {
        assert!(signature_to_string("L").is_err());
        assert!(signature_to_string("Ljava.lang.String").is_err());
        assert!(signature_to_string("Tx").is_err());
    }

    #[test]
    fn test_parameter_name_count_mismatch() {
        let err = method_signature_to_string(
            "(I)V",
            Some("f"),
            Some(&["a", "b"]),
            false,
            true,
        )
        .unwrap_err();
        assert_eq!(err, Error::ParameterNameCount { expected: 1, actual: 2 });
    }
}
