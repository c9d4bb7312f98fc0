//! Construction of compact signatures from source-level type names

use crate::consts::{C_ARRAY, C_DOT, C_NAME_END, C_PARAM_END, C_PARAM_START, C_RESOLVED, C_UNRESOLVED, PRIMITIVE_KEYWORDS};
use crate::error::{Error, Result};

/// Creates a type signature from a possibly qualified, possibly
/// array-suffixed type name. Parameterized types are not supported.
///
/// The array nesting is the count of `[` characters anywhere in the name;
/// whitespace is ignored throughout. A primitive keyword encodes to its
/// one-character code, anything else to a named type marked `L` (resolved)
/// or `Q` (unresolved):
///
/// ```
/// # use sigcodec::encode::create_type_signature;
/// assert_eq!(create_type_signature("int", false).unwrap(), "I");
/// assert_eq!(create_type_signature("int []", false).unwrap(), "[I");
/// assert_eq!(create_type_signature("java.lang.String", true).unwrap(), "Ljava.lang.String;");
/// assert_eq!(create_type_signature("String", false).unwrap(), "QString;");
/// ```
pub fn create_type_signature(type_name: &str, is_resolved: bool) -> Result<String> {
    let name: Vec<char> = type_name.chars().collect();
    if name.is_empty() {
        return Err(Error::syntax("empty type name"));
    }
    let array_count = name.iter().filter(|&&c| c == C_ARRAY).count();
    let mut sig = String::with_capacity(name.len() + array_count + 2);
    for _ in 0..array_count {
        sig.push(C_ARRAY);
    }

    if let Some(code) = primitive_code(&name) {
        sig.push(code);
        return Ok(sig);
    }

    // named type: drop whitespace and brackets, keep the dotted segments
    sig.push(if is_resolved { C_RESOLVED } else { C_UNRESOLVED });
    let mut past_brackets = false;
    for &c in &name {
        if c == C_ARRAY {
            // identifier characters after the brackets are dropped
            past_brackets = true;
        } else if c == C_DOT {
            if past_brackets {
                return Err(Error::syntax(format!(
                    "unexpected '.' after '[]' in type name '{type_name}'"
                )));
            }
            sig.push(C_DOT);
        } else if !c.is_whitespace() && !past_brackets {
            sig.push(c);
        }
    }
    sig.push(C_NAME_END);
    Ok(sig)
}

/// Prepends `array_count` levels of array nesting to the given type
/// signature. A count of zero returns the input unchanged.
pub fn create_array_signature(type_signature: &str, array_count: usize) -> String {
    if array_count == 0 {
        return type_signature.to_string();
    }
    let mut sig = String::with_capacity(array_count + type_signature.len());
    for _ in 0..array_count {
        sig.push(C_ARRAY);
    }
    sig.push_str(type_signature);
    sig
}

/// Creates a method signature from parameter and return type signatures.
/// Composition is purely textual; the inputs are not validated.
pub fn create_method_signature(parameter_types: &[&str], return_type: &str) -> String {
    let parameter_length: usize = parameter_types.iter().map(|p| p.len()).sum();
    let mut sig = String::with_capacity(2 + parameter_length + return_type.len());
    sig.push(C_PARAM_START);
    for parameter_type in parameter_types {
        sig.push_str(parameter_type);
    }
    sig.push(C_PARAM_END);
    sig.push_str(return_type);
    sig
}

/// Matches a primitive keyword at the head of the name. The keyword must be
/// followed by whitespace, `[`, `.` or the end of the name, so that e.g.
/// `intValue` is not mistaken for `int`.
fn primitive_code(name: &[char]) -> Option<char> {
    for (keyword, code) in PRIMITIVE_KEYWORDS {
        if matches_keyword(name, keyword) {
            return Some(*code);
        }
    }
    None
}

fn matches_keyword(name: &[char], keyword: &str) -> bool {
    let len = keyword.len();
    if name.len() < len || !name[..len].iter().copied().eq(keyword.chars()) {
        return false;
    }
    match name.get(len) {
        None => true,
        Some(&c) => c.is_whitespace() || c == C_ARRAY || c == C_DOT,
    }
}
