//! Destination storage acquisition.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::AllocError;

/// Hands out destination buffers to the executor.
///
/// Implementations return an empty vector with at least `byte_len` bytes of
/// capacity. Returned storage is always fresh, never shared with any existing
/// backing, which is what lets an eager copy skip overlap handling.
pub trait Allocator: Send + Sync {
    fn allocate(&self, byte_len: usize) -> Result<Vec<u8>, AllocError>;
}

/// Allocates from the global heap, reporting failure instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&self, byte_len: usize) -> Result<Vec<u8>, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(byte_len).map_err(|err| AllocError {
            requested: byte_len,
            reason: err.to_string(),
        })?;
        Ok(buf)
    }
}

/// Allocates from the heap until a fixed byte budget is spent.
///
/// The budget covers the lifetime of the allocator; freed results are not
/// credited back.
#[derive(Debug)]
pub struct BudgetAllocator {
    remaining: AtomicUsize,
}

impl BudgetAllocator {
    pub fn new(budget: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(budget),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }
}

impl Allocator for BudgetAllocator {
    fn allocate(&self, byte_len: usize) -> Result<Vec<u8>, AllocError> {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| {
                left.checked_sub(byte_len)
            })
            .map_err(|left| AllocError {
                requested: byte_len,
                reason: format!("budget exhausted, {left} bytes left"),
            })?;
        SystemAllocator.allocate(byte_len).inspect_err(|_| {
            self.remaining.fetch_add(byte_len, Ordering::AcqRel);
        })
    }
}
