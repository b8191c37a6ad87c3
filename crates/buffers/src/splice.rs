//! Byte region splicing.

/// Appends `len` bytes of `src` starting at `offset` to `dst`.
///
/// `dst` is expected to already have the capacity reserved; this never
/// zero-fills.
///
/// # Example
///
/// ```
/// use typed_concat_buffers::extend_region;
///
/// let mut dst = Vec::with_capacity(3);
/// extend_region(&mut dst, &[9, 1, 2, 3, 9], 1, 3);
/// assert_eq!(dst, vec![1, 2, 3]);
/// ```
#[inline]
pub fn extend_region(dst: &mut Vec<u8>, src: &[u8], offset: usize, len: usize) {
    dst.extend_from_slice(&src[offset..offset + len]);
}
