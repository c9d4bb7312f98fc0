// Character markers of the compact signature grammar (dot-based descriptors)

// Base (primitive) type codes
pub const C_BOOLEAN: char = 'Z';
pub const C_BYTE: char = 'B';
pub const C_CHAR: char = 'C';
pub const C_DOUBLE: char = 'D';
pub const C_FLOAT: char = 'F';
pub const C_INT: char = 'I';
pub const C_LONG: char = 'J';
pub const C_SHORT: char = 'S';
pub const C_VOID: char = 'V';
// Const marker; only recognized by the renderer, never by the scanner
pub const C_CONST: char = 'K';

// Structural markers
pub const C_ARRAY: char = '[';
pub const C_RESOLVED: char = 'L';
pub const C_UNRESOLVED: char = 'Q';
pub const C_TYPE_VARIABLE: char = 'T';
pub const C_NAME_END: char = ';';
pub const C_SEMICOLON: char = ';';
pub const C_COLON: char = ':';
pub const C_DOT: char = '.';
pub const C_DOLLAR: char = '$';
pub const C_PARAM_START: char = '(';
pub const C_PARAM_END: char = ')';
pub const C_GENERIC_START: char = '<';
pub const C_GENERIC_END: char = '>';
pub const C_STAR: char = '*';
// Separates the return type from a throws clause in rich method signatures
pub const C_THROWS: char = '^';

// Every base type code accepted by the scanner. 'V' is only semantically
// valid as a return type but scans fine anywhere; semantic checks are the
// caller's business.
pub const BASE_TYPE_CHARS: &str = "BCDFIJSVZ";

// Source-level primitive keywords and their one-character codes
pub const PRIMITIVE_KEYWORDS: &[(&str, char)] = &[
    ("boolean", C_BOOLEAN),
    ("byte", C_BYTE),
    ("char", C_CHAR),
    ("double", C_DOUBLE),
    ("float", C_FLOAT),
    ("int", C_INT),
    ("long", C_LONG),
    ("short", C_SHORT),
    ("void", C_VOID),
];
