//! MiniJ IR - shared vocabulary for the front end.
//!
//! This crate holds the pieces the scanner and parser agree on:
//! - [`Position`] for line/column source locations
//! - [`Dialect`], the immutable grammar switch (mini or extended)
//! - [`Token`] and the closed [`TokenKind`] set
//! - [`lookup`], the static classification tables keyed by text or character
//!
//! Nothing here has behavior beyond construction, field access and table
//! lookup.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod dialect;
pub mod lookup;
mod position;
mod token;

pub use dialect::{Dialect, UnknownDialect};
pub use position::Position;
pub use token::{Token, TokenKind};
