//! Little-endian element writer with auto-growing capacity.

use crate::Element;

/// A binary buffer writer that grows automatically as needed.
///
/// # Example
///
/// ```
/// use typed_concat_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x03, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    #[inline]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.ensure_capacity(N);
        self.uint8[self.x..self.x + N].copy_from_slice(&bytes);
        self.x += N;
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.put([val]);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.put(val.to_le_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.put(val.to_le_bytes());
    }

    /// Writes one element using its own kind's width.
    pub fn element(&mut self, val: Element) {
        match val {
            Element::I8(v) => self.i8(v),
            Element::U8(v) => self.u8(v),
            Element::I16(v) => self.i16(v),
            Element::U16(v) => self.u16(v),
            Element::I32(v) => self.i32(v),
            Element::U32(v) => self.u32(v),
            Element::I64(v) => self.i64(v),
            Element::U64(v) => self.u64(v),
            Element::F32(v) => self.f32(v),
            Element::F64(v) => self.f64(v),
        }
    }
}
