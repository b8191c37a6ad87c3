//! Shared, read-only backing storage.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Process-unique identity of a backing storage region.
///
/// Two views alias each other only if they report the same `BackingId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BackingId(u64);

impl BackingId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        BackingId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Fill = Box<dyn FnOnce() -> Vec<u8> + Send>;

struct Storage {
    bytes: OnceLock<Box<[u8]>>,
    fill: Mutex<Option<Fill>>,
}

/// A reference-counted region of raw bytes that views are mapped onto.
///
/// Storage is immutable once observed. A backing is either ready, holding its
/// bytes from construction, or deferred, holding a one-shot fill closure that
/// runs the first time any view observes the bytes. The fill runs at most once
/// even when several threads observe concurrently.
///
/// # Example
///
/// ```
/// use typed_concat_buffers::Backing;
///
/// let backing = Backing::deferred(3, || vec![1, 2, 3]);
/// assert!(!backing.is_materialized());
/// assert_eq!(backing.bytes(), &[1, 2, 3]);
/// assert!(backing.is_materialized());
/// ```
#[derive(Clone)]
pub struct Backing {
    id: BackingId,
    byte_len: usize,
    storage: Arc<Storage>,
}

impl Backing {
    /// Wraps already-initialized bytes.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let byte_len = bytes.len();
        Self {
            id: BackingId::next(),
            byte_len,
            storage: Arc::new(Storage {
                bytes: OnceLock::from(bytes.into_boxed_slice()),
                fill: Mutex::new(None),
            }),
        }
    }

    /// Creates storage of `byte_len` bytes whose contents are produced by
    /// `fill` on first observation.
    ///
    /// # Panics
    ///
    /// Observing the storage panics if `fill` does not return exactly
    /// `byte_len` bytes.
    pub fn deferred<F>(byte_len: usize, fill: F) -> Self
    where
        F: FnOnce() -> Vec<u8> + Send + 'static,
    {
        Self {
            id: BackingId::next(),
            byte_len,
            storage: Arc::new(Storage {
                bytes: OnceLock::new(),
                fill: Mutex::new(Some(Box::new(fill))),
            }),
        }
    }

    pub fn id(&self) -> BackingId {
        self.id
    }

    /// Length in bytes. Known without materializing.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn is_materialized(&self) -> bool {
        self.storage.bytes.get().is_some()
    }

    /// Returns the full contents, running a pending fill first.
    pub fn bytes(&self) -> &[u8] {
        self.storage.bytes.get_or_init(|| {
            let fill = self
                .storage
                .fill
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            let bytes = fill.map(|fill| fill()).unwrap_or_default();
            assert_eq!(
                bytes.len(),
                self.byte_len,
                "deferred fill produced {} bytes for a {}-byte backing",
                bytes.len(),
                self.byte_len
            );
            bytes.into_boxed_slice()
        })
    }

    /// Forces a pending fill without reading anything.
    pub fn materialize(&self) {
        let _ = self.bytes();
    }

    /// Number of handles currently sharing this storage.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.storage)
    }
}

impl fmt::Debug for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backing")
            .field("id", &self.id)
            .field("byte_len", &self.byte_len)
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
