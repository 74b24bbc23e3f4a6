//! photonc-util - Foundation Types for the Photon Compiler
//!
//! This crate provides the infrastructure the compiler phases build on:
//!
//! - **Arena allocation** ([`arena`]): a bump allocator with block
//!   chaining. Phase-scoped data (interned identifier text, decoded
//!   literal bodies) is allocated here and released in bulk, so a phase
//!   pays one free for thousands of allocations.
//! - **Source management** ([`span`]): registered source buffers behind
//!   stable [`FileId`] handles, byte-precise [`Span`]s, and lazy
//!   offset-to-line/column resolution for diagnostics.
//! - **Errors** ([`error`]): the I/O-facing error types of this layer.
//!
//! Positions are deliberately compact: a [`Span`] is `(file, offset,
//! len)` and nothing else. Line and column numbers are derived on demand
//! through the [`SourceManager`] line index, which keeps tokens small and
//! makes location math trivial to test.

pub mod arena;
pub mod error;
pub mod span;

pub use arena::Arena;
pub use error::{SourceError, SourceResult};
pub use span::{FileId, Resolved, SourceFile, SourceManager, Span};
