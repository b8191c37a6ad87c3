//! typed-concat - concatenation engine for fixed-width typed views
//!
//! Concatenation runs as a straight pipeline:
//!
//! 1. [`validate`] checks that every input shares one element kind and that
//!    the total size fits the configured limit, producing a [`ConcatPlan`].
//! 2. [`select`] picks a [`Strategy`]: a zero-copy view when the inputs are
//!    adjacent slices of one backing, a deferred copy for large results when
//!    configured, and an eager copy otherwise.
//! 3. [`execute`] acquires storage through an [`Allocator`] and produces the
//!    result.
//!
//! The byte content of the result never depends on the strategy chosen.
//!
//! # Example
//!
//! ```
//! use typed_concat::{concat, ElementKind, TypedView};
//!
//! let a = TypedView::from_slice(&[1.5f32, 2.5]);
//! let b = TypedView::from_slice(&[3.5f32]);
//! let out = concat(&[a, b], None).unwrap();
//! assert_eq!(out.kind(), ElementKind::Float32);
//! assert_eq!(out.to_vec::<f32>().unwrap(), vec![1.5, 2.5, 3.5]);
//! ```

pub mod allocator;
pub mod config;
pub mod engine;
pub mod error;
pub mod execute;
pub mod strategy;
pub mod validate;

pub use allocator::{Allocator, BudgetAllocator, SystemAllocator};
pub use config::ConcatConfig;
pub use engine::ConcatEngine;
pub use error::{AllocError, ConcatError};
pub use execute::execute;
pub use strategy::{select, Strategy};
pub use validate::{validate, ConcatPlan, Segment, DEFAULT_EMPTY_KIND};

pub use typed_concat_buffers::{
    Backing, BackingId, BufferError, Element, ElementKind, ElementType, TypedView,
};

/// Concatenates `inputs` with the default configuration.
///
/// `kind_if_empty` sets the result kind for an empty request, defaulting to
/// [`DEFAULT_EMPTY_KIND`].
pub fn concat(
    inputs: &[TypedView],
    kind_if_empty: Option<ElementKind>,
) -> Result<TypedView, ConcatError> {
    ConcatEngine::default().concat(inputs, kind_if_empty)
}

/// Concatenates `inputs` under `config`, allocating from the system heap.
pub fn concat_with(
    inputs: &[TypedView],
    kind_if_empty: Option<ElementKind>,
    config: &ConcatConfig,
) -> Result<TypedView, ConcatError> {
    ConcatEngine::new(config.clone()).concat(inputs, kind_if_empty)
}
