//! Plan execution.

use typed_concat_buffers::{extend_region, Backing, TypedView};

use crate::strategy::is_coalescible;
use crate::{Allocator, ConcatError, ConcatPlan, Strategy};

/// Produces the destination view for `plan` using `strategy`.
///
/// Storage is acquired through `allocator` before anything is copied; if it
/// fails, the error is returned and no destination exists. A
/// [`Strategy::SegmentCoalesce`] request for a plan whose inputs are not
/// adjacent falls back to an eager copy.
pub fn execute(
    plan: &ConcatPlan<'_>,
    strategy: Strategy,
    allocator: &dyn Allocator,
) -> Result<TypedView, ConcatError> {
    match strategy {
        Strategy::EagerCopy => eager_copy(plan, allocator),
        Strategy::SegmentCoalesce => match coalesce(plan) {
            Some(view) => Ok(view),
            None => {
                log::debug!("inputs are not adjacent, falling back to eager copy");
                eager_copy(plan, allocator)
            }
        },
        Strategy::LazyMaterialize => lazy_materialize(plan, allocator),
    }
}

fn eager_copy(plan: &ConcatPlan<'_>, allocator: &dyn Allocator) -> Result<TypedView, ConcatError> {
    let mut buf = allocator.allocate(plan.total_byte_len())?;
    for segment in plan.copy_segments() {
        debug_assert_eq!(buf.len(), segment.dest_byte_offset);
        log::trace!(
            "copy input {} ({} bytes) to offset {}",
            segment.index,
            segment.view.byte_len(),
            segment.dest_byte_offset
        );
        append_view(&mut buf, segment.view);
    }
    Ok(TypedView::over(Backing::from_vec(buf), plan.output_kind()))
}

fn coalesce(plan: &ConcatPlan<'_>) -> Option<TypedView> {
    if !is_coalescible(plan) {
        return None;
    }
    let first = plan.copy_segments().next()?.view;
    TypedView::new(
        first.backing().clone(),
        plan.output_kind(),
        first.byte_offset(),
        plan.total_element_count(),
    )
    .ok()
}

/// The copy closure holds clones of the input views, which keeps their
/// storage alive until the result is first observed.
fn lazy_materialize(
    plan: &ConcatPlan<'_>,
    allocator: &dyn Allocator,
) -> Result<TypedView, ConcatError> {
    let byte_len = plan.total_byte_len();
    let mut buf = allocator.allocate(byte_len)?;
    let sources: Vec<TypedView> = plan.copy_segments().map(|s| s.view.clone()).collect();
    let backing = Backing::deferred(byte_len, move || {
        log::debug!(
            "materializing deferred concat: {byte_len} bytes from {} inputs",
            sources.len()
        );
        for view in &sources {
            append_view(&mut buf, view);
        }
        buf
    });
    Ok(TypedView::over(backing, plan.output_kind()))
}

#[inline]
fn append_view(buf: &mut Vec<u8>, view: &TypedView) {
    extend_region(buf, view.backing().bytes(), view.byte_offset(), view.byte_len());
}
