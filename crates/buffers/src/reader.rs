//! Little-endian element reader with cursor tracking.

use crate::{BufferError, Element, ElementKind};

/// Reads fixed-width elements out of a byte slice.
///
/// The reader maintains a cursor position. The plain methods panic when
/// reading past the end; [`try_element`](Reader::try_element) returns
/// [`BufferError::EndOfBuffer`] instead.
///
/// # Example
///
/// ```
/// use typed_concat_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), 0x01);
/// assert_eq!(reader.u16(), 0x0302);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.uint8[self.x..self.x + N]);
        self.x += N;
        bytes
    }

    #[inline]
    pub fn u8(&mut self) -> u8 {
        let val = self.uint8[self.x];
        self.x += 1;
        val
    }

    #[inline]
    pub fn i8(&mut self) -> i8 {
        let val = self.uint8[self.x] as i8;
        self.x += 1;
        val
    }

    #[inline]
    pub fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    #[inline]
    pub fn i16(&mut self) -> i16 {
        i16::from_le_bytes(self.take())
    }

    #[inline]
    pub fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    #[inline]
    pub fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }

    #[inline]
    pub fn u64(&mut self) -> u64 {
        u64::from_le_bytes(self.take())
    }

    #[inline]
    pub fn i64(&mut self) -> i64 {
        i64::from_le_bytes(self.take())
    }

    #[inline]
    pub fn f32(&mut self) -> f32 {
        f32::from_le_bytes(self.take())
    }

    #[inline]
    pub fn f64(&mut self) -> f64 {
        f64::from_le_bytes(self.take())
    }

    /// Reads one element of the given kind.
    pub fn element(&mut self, kind: ElementKind) -> Element {
        match kind {
            ElementKind::Int8 => Element::I8(self.i8()),
            ElementKind::Uint8 => Element::U8(self.u8()),
            ElementKind::Int16 => Element::I16(self.i16()),
            ElementKind::Uint16 => Element::U16(self.u16()),
            ElementKind::Int32 => Element::I32(self.i32()),
            ElementKind::Uint32 => Element::U32(self.u32()),
            ElementKind::Int64 => Element::I64(self.i64()),
            ElementKind::Uint64 => Element::U64(self.u64()),
            ElementKind::Float32 => Element::F32(self.f32()),
            ElementKind::Float64 => Element::F64(self.f64()),
        }
    }

    // -----------------------------------------------------------------------
    // Bounds-checked variants
    // -----------------------------------------------------------------------

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.uint8.len() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads one element of the given kind, returning `Err` on out-of-bounds.
    pub fn try_element(&mut self, kind: ElementKind) -> Result<Element, BufferError> {
        self.check(kind.width())?;
        Ok(self.element(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), 0x01);
        assert_eq!(reader.u8(), 0x02);
        assert_eq!(reader.size(), 1);
    }

    #[test]
    fn test_u16_little_endian() {
        let data = [0x34, 0x12];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16(), 0x1234);
    }

    #[test]
    fn test_i32_negative() {
        let data = (-123_456i32).to_le_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i32(), -123_456);
    }

    #[test]
    fn test_f32() {
        let data = 1.5f32.to_le_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.f32(), 1.5);
    }

    #[test]
    fn test_element_dispatch() {
        let data = 0xdead_beef_u32.to_le_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.element(ElementKind::Uint32),
            Element::U32(0xdead_beef)
        );
    }

    #[test]
    fn test_try_element_end_of_buffer() {
        let data = [0u8; 3];
        let mut reader = Reader::new(&data);
        assert_eq!(
            reader.try_element(ElementKind::Float32),
            Err(BufferError::EndOfBuffer)
        );
        assert_eq!(reader.x, 0);
        assert_eq!(reader.try_element(ElementKind::Uint16), Ok(Element::U16(0)));
        assert_eq!(reader.size(), 1);
    }
}
