//! sigcodec
//!
//! Encoder, decoder and pretty-printer for compact, dot-based type and
//! method signature strings.
//!
//! ## Grammar
//!
//! ```text
//! TypeSignature ::=
//!     "B"  // byte
//!   | "C"  // char
//!   | "D"  // double
//!   | "F"  // float
//!   | "I"  // int
//!   | "J"  // long
//!   | "S"  // short
//!   | "V"  // void
//!   | "Z"  // boolean
//!   | "T" Identifier ";"          // type variable
//!   | "[" TypeSignature           // array
//!   | ResolvedClassTypeSignature
//!   | UnresolvedClassTypeSignature
//!
//! ResolvedClassTypeSignature ::=   // fully qualified named type
//!     "L" Identifier OptionalTypeArguments
//!         ( ( "." | "/" ) Identifier OptionalTypeArguments )* ";"
//!
//! UnresolvedClassTypeSignature ::= // named type as written in source
//!     "Q" Identifier OptionalTypeArguments
//!         ( ( "." | "/" ) Identifier OptionalTypeArguments )* ";"
//!
//! OptionalTypeArguments ::= "<" TypeArgument+ ">" | ε
//!
//! TypeArgument ::=
//!     TypeSignature
//!   | "*"                 // wildcard ?
//!   | "+" TypeSignature   // wildcard ? extends X
//!   | "-" TypeSignature   // wildcard ? super X
//!
//! MethodSignature ::= "(" TypeSignature* ")" TypeSignature
//!
//! FormalTypeParameterSignature ::=
//!     Identifier ( ":" TypeSignature? ) ( ":" TypeSignature )*
//! ```
//!
//! Examples: `"[[I"` denotes `int[][]`; `"Ljava.lang.String;"` denotes the
//! fully qualified `java.lang.String`; `"QString;"` denotes `String` as
//! written in source; `"QMap<QString;*>;"` denotes `Map<String,?>`;
//! `"([Ljava.lang.String;)V"` denotes `void f(java.lang.String[])`.
//!
//! ## Architecture
//!
//! - **scan**: boundary-finding scanners over a flat char buffer plus the
//!   introspection operations built on them (parameter walks, array
//!   arity, kind classification, formal type parameter bounds)
//! - **encode**: source-level type name to signature
//! - **display**: signature to human-readable type expression
//! - **names**: dot-separated qualified-name helpers
//!
//! Every operation is a pure transform from input to output: signatures
//! are never materialized as trees, there is no shared state, and every
//! entry point is safe to call concurrently. Malformed input surfaces as
//! [`Error::Syntax`] through the crate [`Result`]; no partial result is
//! ever produced.

pub mod consts;
pub mod display;
pub mod encode;
pub mod error;
pub mod names;
pub mod scan;

pub use display::{method_signature_to_string, signature_to_string, type_signature_to_string};
pub use encode::{create_array_signature, create_method_signature, create_type_signature};
pub use error::{Error, Result};
pub use names::{get_qualifier, get_simple_name, get_simple_names, to_qualified_name};
pub use scan::{
    get_array_count, get_element_type, get_parameter_count, get_parameter_types, get_return_type,
    get_type_parameter_bounds, get_type_signature_kind, get_type_variable, TypeSignatureKind,
};
