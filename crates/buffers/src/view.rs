//! Fixed-width typed views over backing storage.

use crate::{Backing, BackingId, BufferError, Element, ElementKind, ElementType, Reader, Writer};

/// A typed window over a contiguous region of a [`Backing`].
///
/// A view never owns its bytes exclusively: cloning a view, or taking a
/// [`subarray`](TypedView::subarray), shares the same backing.
///
/// # Example
///
/// ```
/// use typed_concat_buffers::{ElementKind, TypedView};
///
/// let view = TypedView::from_slice(&[1u16, 2, 3]);
/// assert_eq!(view.kind(), ElementKind::Uint16);
/// assert_eq!(view.element_count(), 3);
/// assert_eq!(view.byte_len(), 6);
/// assert_eq!(view.to_vec::<u16>().unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct TypedView {
    backing: Backing,
    kind: ElementKind,
    byte_offset: usize,
    element_count: usize,
}

impl TypedView {
    /// Maps a view onto `backing`.
    ///
    /// Fails if the region does not fit inside the backing or if `byte_offset`
    /// is not a multiple of the element width.
    pub fn new(
        backing: Backing,
        kind: ElementKind,
        byte_offset: usize,
        element_count: usize,
    ) -> Result<Self, BufferError> {
        let width = kind.width();
        if byte_offset % width != 0 {
            return Err(BufferError::Misaligned {
                byte_offset,
                kind,
                width,
            });
        }
        let byte_len = element_count as u128 * width as u128;
        if byte_offset as u128 + byte_len > backing.byte_len() as u128 {
            return Err(BufferError::OutOfBounds {
                byte_offset,
                byte_len,
                backing_len: backing.byte_len(),
            });
        }
        Ok(Self {
            backing,
            kind,
            byte_offset,
            element_count,
        })
    }

    /// A view spanning the whole of `backing`. Trailing bytes that do not
    /// fill a whole element are not visible.
    pub fn over(backing: Backing, kind: ElementKind) -> Self {
        let element_count = backing.byte_len() / kind.width();
        Self {
            backing,
            kind,
            byte_offset: 0,
            element_count,
        }
    }

    /// A zero-length view over fresh, empty storage.
    pub fn empty(kind: ElementKind) -> Self {
        Self::over(Backing::from_vec(Vec::new()), kind)
    }

    /// Builds a view over fresh storage holding `values`.
    pub fn from_slice<T: ElementType>(values: &[T]) -> Self {
        let mut writer = Writer::with_alloc_size(values.len() * T::KIND.width());
        for value in values {
            value.write(&mut writer);
        }
        Self::over(Backing::from_vec(writer.flush()), T::KIND)
    }

    /// Builds a view of `kind` from tagged elements.
    pub fn from_elements(kind: ElementKind, values: &[Element]) -> Result<Self, BufferError> {
        let mut writer = Writer::with_alloc_size(values.len() * kind.width());
        for value in values {
            if value.kind() != kind {
                return Err(BufferError::KindMismatch {
                    expected: kind,
                    found: value.kind(),
                });
            }
            writer.element(*value);
        }
        Ok(Self::over(Backing::from_vec(writer.flush()), kind))
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn byte_len(&self) -> usize {
        self.element_count * self.kind.width()
    }

    /// Exclusive end offset of this view within its backing.
    pub fn byte_end(&self) -> usize {
        self.byte_offset + self.byte_len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    pub fn backing(&self) -> &Backing {
        &self.backing
    }

    pub fn backing_id(&self) -> BackingId {
        self.backing.id()
    }

    /// Returns the bytes visible through this view, materializing deferred
    /// storage first.
    pub fn bytes(&self) -> &[u8] {
        &self.backing.bytes()[self.byte_offset..self.byte_end()]
    }

    pub fn get(&self, index: usize) -> Option<Element> {
        if index >= self.element_count {
            return None;
        }
        let width = self.kind.width();
        let bytes = &self.bytes()[index * width..(index + 1) * width];
        Reader::new(bytes).try_element(self.kind).ok()
    }

    /// Decodes every element in order.
    pub fn elements(&self) -> Vec<Element> {
        let mut reader = Reader::new(self.bytes());
        (0..self.element_count)
            .map(|_| reader.element(self.kind))
            .collect()
    }

    /// Decodes every element as `T`, which must match the view's kind.
    pub fn to_vec<T: ElementType>(&self) -> Result<Vec<T>, BufferError> {
        if T::KIND != self.kind {
            return Err(BufferError::KindMismatch {
                expected: T::KIND,
                found: self.kind,
            });
        }
        let mut reader = Reader::new(self.bytes());
        Ok((0..self.element_count).map(|_| T::read(&mut reader)).collect())
    }

    /// A view of elements `start..end` sharing this view's backing.
    pub fn subarray(&self, start: usize, end: usize) -> Result<Self, BufferError> {
        let width = self.kind.width();
        if start > end || end > self.element_count {
            return Err(BufferError::OutOfBounds {
                byte_offset: self.byte_offset.saturating_add(start.saturating_mul(width)),
                byte_len: end.saturating_sub(start) as u128 * width as u128,
                backing_len: self.byte_end(),
            });
        }
        Ok(Self {
            backing: self.backing.clone(),
            kind: self.kind,
            byte_offset: self.byte_offset + start * width,
            element_count: end - start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_bounds() {
        let backing = Backing::from_vec(vec![0; 8]);
        assert!(TypedView::new(backing.clone(), ElementKind::Uint32, 4, 1).is_ok());
        assert_eq!(
            TypedView::new(backing.clone(), ElementKind::Uint32, 4, 2).unwrap_err(),
            BufferError::OutOfBounds {
                byte_offset: 4,
                byte_len: 8,
                backing_len: 8,
            }
        );
        assert!(TypedView::new(backing, ElementKind::Uint8, 8, 0).is_ok());
    }

    #[test]
    fn test_new_checks_alignment() {
        let backing = Backing::from_vec(vec![0; 8]);
        assert_eq!(
            TypedView::new(backing, ElementKind::Int16, 3, 1).unwrap_err(),
            BufferError::Misaligned {
                byte_offset: 3,
                kind: ElementKind::Int16,
                width: 2,
            }
        );
    }

    #[test]
    fn test_new_huge_count_does_not_wrap() {
        let backing = Backing::from_vec(vec![0; 8]);
        let err = TypedView::new(backing, ElementKind::Float64, 0, usize::MAX).unwrap_err();
        assert!(matches!(err, BufferError::OutOfBounds { .. }));
    }

    #[test]
    fn test_bytes_window() {
        let backing = Backing::from_vec(vec![0, 1, 2, 3, 4, 5]);
        let view = TypedView::new(backing, ElementKind::Uint8, 2, 3).unwrap();
        assert_eq!(view.bytes(), &[2, 3, 4]);
        assert_eq!(view.byte_end(), 5);
    }

    #[test]
    fn test_get() {
        let view = TypedView::from_slice(&[-1i32, 7]);
        assert_eq!(view.get(0), Some(Element::I32(-1)));
        assert_eq!(view.get(1), Some(Element::I32(7)));
        assert_eq!(view.get(2), None);
    }

    #[test]
    fn test_to_vec_kind_mismatch() {
        let view = TypedView::from_slice(&[1.0f32]);
        assert_eq!(
            view.to_vec::<u32>().unwrap_err(),
            BufferError::KindMismatch {
                expected: ElementKind::Uint32,
                found: ElementKind::Float32,
            }
        );
        assert_eq!(view.to_vec::<f32>().unwrap(), vec![1.0]);
    }

    #[test]
    fn test_from_elements() {
        let view =
            TypedView::from_elements(ElementKind::Uint16, &[Element::U16(1), Element::U16(2)])
                .unwrap();
        assert_eq!(view.elements(), vec![Element::U16(1), Element::U16(2)]);
        assert!(TypedView::from_elements(ElementKind::Uint16, &[Element::U8(1)]).is_err());
    }

    #[test]
    fn test_subarray_shares_backing() {
        let view = TypedView::from_slice(&[10u64, 20, 30, 40]);
        let sub = view.subarray(1, 3).unwrap();
        assert_eq!(sub.backing_id(), view.backing_id());
        assert_eq!(sub.byte_offset(), 8);
        assert_eq!(sub.to_vec::<u64>().unwrap(), vec![20, 30]);
        assert!(view.subarray(3, 5).is_err());
        assert!(view.subarray(2, 1).is_err());
        assert!(view.subarray(4, 4).unwrap().is_empty());
    }

    #[test]
    fn test_subarray_huge_start_is_an_error() {
        let view = TypedView::from_slice(&[1u32, 2, 3]);
        assert_eq!(
            view.subarray(usize::MAX, usize::MAX).unwrap_err(),
            BufferError::OutOfBounds {
                byte_offset: usize::MAX,
                byte_len: 0,
                backing_len: 12,
            }
        );
        assert_eq!(
            view.subarray(usize::MAX, 0).unwrap_err(),
            BufferError::OutOfBounds {
                byte_offset: usize::MAX,
                byte_len: 0,
                backing_len: 12,
            }
        );
    }

    #[test]
    fn test_over_drops_partial_tail() {
        let view = TypedView::over(Backing::from_vec(vec![0; 7]), ElementKind::Uint32);
        assert_eq!(view.element_count(), 1);
    }

    #[test]
    fn test_empty() {
        let view = TypedView::empty(ElementKind::Float64);
        assert!(view.is_empty());
        assert_eq!(view.kind(), ElementKind::Float64);
        assert!(view.bytes().is_empty());
    }
}
