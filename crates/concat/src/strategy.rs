//! Strategy selection.

use std::fmt;

use crate::{ConcatConfig, ConcatPlan};

/// How a validated plan is turned into a destination view.
///
/// No strategy changes the value of the result, only its cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Allocate the destination and copy every segment immediately.
    EagerCopy,
    /// Return one view over the inputs' shared backing, without copying.
    SegmentCoalesce,
    /// Reserve the destination now and copy on first observation.
    LazyMaterialize,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::EagerCopy => "eager-copy",
            Strategy::SegmentCoalesce => "segment-coalesce",
            Strategy::LazyMaterialize => "lazy-materialize",
        })
    }
}

/// Picks the cheapest strategy `config` permits for `plan`.
pub fn select(plan: &ConcatPlan<'_>, config: &ConcatConfig) -> Strategy {
    let strategy = if config.coalesce && is_coalescible(plan) {
        Strategy::SegmentCoalesce
    } else if config
        .lazy_threshold
        .is_some_and(|threshold| plan.total_byte_len() >= threshold)
    {
        Strategy::LazyMaterialize
    } else {
        Strategy::EagerCopy
    };
    log::debug!(
        "concat plan: {} x {} ({} bytes, {} inputs) -> {strategy}",
        plan.total_element_count(),
        plan.output_kind(),
        plan.total_byte_len(),
        plan.segments().len(),
    );
    strategy
}

/// True when the non-empty segments are ascending, gap-free, non-overlapping
/// slices of one backing. Zero-length segments place no constraint.
pub fn is_coalescible(plan: &ConcatPlan<'_>) -> bool {
    let mut segments = plan.copy_segments();
    let Some(first) = segments.next() else {
        return false;
    };
    let backing = first.view.backing_id();
    let mut cursor = first.view.byte_end();
    for segment in segments {
        let view = segment.view;
        if view.backing_id() != backing || view.byte_offset() != cursor {
            return false;
        }
        cursor = view.byte_end();
    }
    true
}
