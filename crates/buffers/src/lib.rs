//! typed-concat-buffers - typed views over shared binary storage
//!
//! This crate holds the data model the concatenation engine works on:
//! element kinds, reference-counted backing storage and fixed-width typed
//! views over it, plus the little-endian element reader and writer.

pub mod backing;
pub mod kind;
pub mod reader;
pub mod splice;
pub mod view;
pub mod writer;

pub use backing::{Backing, BackingId};
pub use kind::{Element, ElementKind, ElementType};
pub use reader::Reader;
pub use splice::extend_region;
pub use view::TypedView;
pub use writer::Writer;

use thiserror::Error;

/// Errors produced while constructing or reading typed views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("end of buffer")]
    EndOfBuffer,
    #[error("view [{byte_offset}, +{byte_len}) exceeds backing storage of {backing_len} bytes")]
    OutOfBounds {
        byte_offset: usize,
        byte_len: u128,
        backing_len: usize,
    },
    #[error("byte offset {byte_offset} is not a multiple of the {kind} element width {width}")]
    Misaligned {
        byte_offset: usize,
        kind: ElementKind,
        width: usize,
    },
    #[error("expected {expected} elements, found {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
}
