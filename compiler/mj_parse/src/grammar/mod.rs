//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one part of the
//! language:
//!
//! - [`program`]: package header, imports, the class list
//! - [`item`]: class bodies, fields, methods, parameters
//! - [`stmt`]: statements and the `for` header
//! - [`expr`]: expressions
//! - [`reference`]: the Type-or-Reference prefix and its [`Classification`]
//! - [`ty`]: types in positions where nothing else is allowed

mod expr;
mod item;
mod program;
mod reference;
mod stmt;
mod ty;

pub use reference::Classification;
