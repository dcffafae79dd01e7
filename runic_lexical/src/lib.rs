//! This crate implements a specification-driven lexical scanner: an ordered
//! list of pattern rules is applied against a text input to produce a
//! sequence of typed tokens for consumption by a downstream parser.
//!
//! The rules live in a [`specification::Specification`]; the
//! [`scanner::Scanner`] drives it against an input either eagerly (the whole
//! token list at once) or interactively, one token of lookahead at a time,
//! the way a parser consumes them.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod pattern;
pub mod scanner;
pub mod specification;
pub mod token;
