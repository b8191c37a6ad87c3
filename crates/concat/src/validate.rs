//! Input validation and planning.

use typed_concat_buffers::{ElementKind, TypedView};

use crate::ConcatError;

/// Kind used for an empty request when the caller supplies none.
pub const DEFAULT_EMPTY_KIND: ElementKind = ElementKind::Uint8;

/// One input view and where its bytes land in the destination.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// Position of the view in the original request.
    pub index: usize,
    pub view: &'a TypedView,
    pub dest_byte_offset: usize,
}

/// The validated shape of a concatenation.
///
/// Holds one [`Segment`] per input, zero-length inputs included, so
/// diagnostics can refer to original indices.
#[derive(Debug, Clone)]
pub struct ConcatPlan<'a> {
    output_kind: ElementKind,
    total_element_count: usize,
    segments: Vec<Segment<'a>>,
}

impl<'a> ConcatPlan<'a> {
    pub fn output_kind(&self) -> ElementKind {
        self.output_kind
    }

    pub fn total_element_count(&self) -> usize {
        self.total_element_count
    }

    pub fn total_byte_len(&self) -> usize {
        self.total_element_count * self.output_kind.width()
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Segments that carry at least one element.
    pub fn copy_segments(&self) -> impl Iterator<Item = &Segment<'a>> + '_ {
        self.segments.iter().filter(|segment| !segment.view.is_empty())
    }
}

/// Checks `inputs` for kind agreement and size, and lays out the destination.
///
/// `kind_if_empty` only matters when `inputs` is empty; it falls back to
/// [`DEFAULT_EMPTY_KIND`]. Runs no allocation and touches no input bytes.
pub fn validate<'a>(
    inputs: &'a [TypedView],
    kind_if_empty: Option<ElementKind>,
    max_byte_length: usize,
) -> Result<ConcatPlan<'a>, ConcatError> {
    let output_kind = match inputs.first() {
        Some(first) => first.kind(),
        None => kind_if_empty.unwrap_or(DEFAULT_EMPTY_KIND),
    };
    let width = output_kind.width();

    let mut total_elements: u128 = 0;
    for (index, view) in inputs.iter().enumerate() {
        if view.kind() != output_kind {
            return Err(ConcatError::TypeMismatch {
                index,
                expected: output_kind,
                found: view.kind(),
            });
        }
        total_elements += view.element_count() as u128;
    }
    let required = total_elements * width as u128;
    if required > max_byte_length as u128 {
        return Err(ConcatError::SizeLimit {
            required,
            max: max_byte_length,
        });
    }

    // Every offset below is bounded by `required`, which fits in usize now.
    let mut dest_byte_offset = 0;
    let segments = inputs
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let segment = Segment {
                index,
                view,
                dest_byte_offset,
            };
            dest_byte_offset += view.byte_len();
            segment
        })
        .collect();

    Ok(ConcatPlan {
        output_kind,
        total_element_count: total_elements as usize,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use typed_concat_buffers::Backing;

    use super::*;

    const MAX: usize = isize::MAX as usize;

    #[test]
    fn test_offsets_and_totals() {
        let a = TypedView::from_slice(&[1u16, 2]);
        let b = TypedView::from_slice::<u16>(&[]);
        let c = TypedView::from_slice(&[3u16, 4, 5]);
        let inputs = [a, b, c];
        let plan = validate(&inputs, None, MAX).unwrap();
        assert_eq!(plan.output_kind(), ElementKind::Uint16);
        assert_eq!(plan.total_element_count(), 5);
        assert_eq!(plan.total_byte_len(), 10);
        let offsets: Vec<_> = plan.segments().iter().map(|s| s.dest_byte_offset).collect();
        assert_eq!(offsets, vec![0, 4, 4]);
        let indices: Vec<_> = plan.copy_segments().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_empty_uses_supplied_kind() {
        let plan = validate(&[], Some(ElementKind::Float32), MAX).unwrap();
        assert_eq!(plan.output_kind(), ElementKind::Float32);
        assert_eq!(plan.total_element_count(), 0);
        assert!(plan.segments().is_empty());
    }

    #[test]
    fn test_empty_defaults_to_uint8() {
        let plan = validate(&[], None, MAX).unwrap();
        assert_eq!(plan.output_kind(), DEFAULT_EMPTY_KIND);
    }

    #[test]
    fn test_kind_if_empty_ignored_for_non_empty() {
        let inputs = [TypedView::from_slice(&[1i8])];
        let plan = validate(&inputs, Some(ElementKind::Float64), MAX).unwrap();
        assert_eq!(plan.output_kind(), ElementKind::Int8);
    }

    #[test]
    fn test_first_mismatch_reported() {
        let inputs = [
            TypedView::from_slice(&[1u8]),
            TypedView::from_slice(&[2u8]),
            TypedView::from_slice(&[1.0f32]),
            TypedView::from_slice(&[1i64]),
        ];
        let err = validate(&inputs, None, MAX).unwrap_err();
        assert_eq!(
            err,
            ConcatError::TypeMismatch {
                index: 2,
                expected: ElementKind::Uint8,
                found: ElementKind::Float32,
            }
        );
    }

    #[test]
    fn test_empty_mismatched_view_still_rejected() {
        let inputs = [
            TypedView::from_slice(&[1u8]),
            TypedView::empty(ElementKind::Int16),
        ];
        assert!(matches!(
            validate(&inputs, None, MAX),
            Err(ConcatError::TypeMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_mismatch_wins_over_size_limit() {
        let inputs = [
            TypedView::from_slice(&[0u32; 8]),
            TypedView::from_slice(&[0u8; 1]),
        ];
        assert!(matches!(
            validate(&inputs, None, 4),
            Err(ConcatError::TypeMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_size_limit_reports_full_requirement() {
        let inputs = [
            TypedView::from_slice(&[0u32; 4]),
            TypedView::from_slice(&[0u32; 4]),
            TypedView::from_slice(&[0u32; 4]),
        ];
        let err = validate(&inputs, None, 20).unwrap_err();
        assert_eq!(err, ConcatError::SizeLimit { required: 48, max: 20 });
        assert!(validate(&inputs, None, 48).is_ok());
    }

    #[test]
    fn test_size_limit_without_wraparound() {
        // Never observed, so the fill never runs.
        let backing = Backing::deferred(usize::MAX, Vec::new);
        let view = TypedView::new(backing, ElementKind::Uint8, 0, usize::MAX).unwrap();
        let inputs = vec![view; 3];
        let err = validate(&inputs, None, MAX).unwrap_err();
        assert_eq!(
            err,
            ConcatError::SizeLimit {
                required: usize::MAX as u128 * 3,
                max: MAX,
            }
        );
        assert!(!inputs[0].backing().is_materialized());
    }

    #[test]
    fn test_element_count_times_width_checked() {
        let backing = Backing::deferred(usize::MAX, Vec::new);
        let view = TypedView::new(backing, ElementKind::Float64, 0, usize::MAX / 8).unwrap();
        let inputs = [view.clone(), view];
        let err = validate(&inputs, None, MAX).unwrap_err();
        assert!(matches!(err, ConcatError::SizeLimit { .. }));
    }

    #[test]
    fn test_zero_limit_allows_empty() {
        let inputs = [TypedView::empty(ElementKind::Uint8)];
        let plan = validate(&inputs, None, 0).unwrap();
        assert_eq!(plan.total_byte_len(), 0);
        assert_eq!(plan.segments().len(), 1);
    }
}
