use std::fmt;
use std::sync::Arc;

use typed_concat_buffers::{ElementKind, TypedView};

use crate::{execute, select, validate, Allocator, ConcatConfig, ConcatError, SystemAllocator};

/// A configured concatenation pipeline: validate, select, execute.
///
/// The engine holds no per-call state and can be shared between threads.
/// Inputs must not be mutated by anyone else while a call is running.
///
/// # Example
///
/// ```
/// use typed_concat::{ConcatEngine, TypedView};
///
/// let engine = ConcatEngine::default();
/// let hello = TypedView::from_slice(b"Hello");
/// let world = TypedView::from_slice(b"World");
/// let out = engine.concat(&[hello, world], None).unwrap();
/// assert_eq!(out.bytes(), b"HelloWorld");
/// ```
#[derive(Clone)]
pub struct ConcatEngine {
    config: ConcatConfig,
    allocator: Arc<dyn Allocator>,
}

impl Default for ConcatEngine {
    fn default() -> Self {
        Self::new(ConcatConfig::default())
    }
}

impl ConcatEngine {
    pub fn new(config: ConcatConfig) -> Self {
        Self::with_allocator(config, Arc::new(SystemAllocator))
    }

    pub fn with_allocator(config: ConcatConfig, allocator: Arc<dyn Allocator>) -> Self {
        Self { config, allocator }
    }

    pub fn config(&self) -> &ConcatConfig {
        &self.config
    }

    /// Concatenates `inputs` into one view.
    ///
    /// `kind_if_empty` sets the kind of the result when `inputs` is empty.
    pub fn concat(
        &self,
        inputs: &[TypedView],
        kind_if_empty: Option<ElementKind>,
    ) -> Result<TypedView, ConcatError> {
        let plan = validate(inputs, kind_if_empty, self.config.max_byte_length)?;
        let strategy = select(&plan, &self.config);
        execute(&plan, strategy, self.allocator.as_ref())
    }
}

impl fmt::Debug for ConcatEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcatEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
