use thiserror::Error;
use typed_concat_buffers::ElementKind;

/// Storage for a destination could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to allocate {requested} bytes: {reason}")]
pub struct AllocError {
    pub requested: usize,
    pub reason: String,
}

/// Errors surfaced by a concatenation call.
///
/// Every variant is raised before a destination becomes reachable, so a
/// failed call never leaves a partially copied result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConcatError {
    #[error("input {index} has element kind {found}, expected {expected}")]
    TypeMismatch {
        index: usize,
        expected: ElementKind,
        found: ElementKind,
    },
    #[error("concatenation needs {required} bytes, limit is {max}")]
    SizeLimit { required: u128, max: usize },
    #[error(transparent)]
    Allocation(#[from] AllocError),
}
