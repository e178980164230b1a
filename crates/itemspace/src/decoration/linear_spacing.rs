//! Per-side spacing for single-column and single-row lists.

use super::{DecorationContext, ItemDecoration, Orientation};
use crate::ItemOffsets;

/// Applies fixed left/top/right/bottom spacing to every list item.
///
/// Along the scroll axis, the first item's leading side and the last item's
/// trailing side are only spaced when edges are included. Across the scroll
/// axis, both sides are spaced only when edges are included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearSpacingDecoration {
    spacing: ItemOffsets,
    include_edge: bool,
}

impl LinearSpacingDecoration {
    pub fn new(spacing: ItemOffsets, include_edge: bool) -> Self {
        log::debug!(
            "LinearSpacingDecoration: spacing {:?}, include_edge={}",
            spacing,
            include_edge
        );
        Self {
            spacing,
            include_edge,
        }
    }

    pub fn spacing(&self) -> ItemOffsets {
        self.spacing
    }

    pub fn include_edge(&self) -> bool {
        self.include_edge
    }
}

impl ItemDecoration for LinearSpacingDecoration {
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets {
        let is_first = position == 0;
        let is_last = context.item_count.checked_sub(1) == Some(position);
        let spacing = self.spacing;
        let edge = self.include_edge;

        let leading = |value: u32| if is_first && !edge { 0 } else { value };
        let trailing = |value: u32| if is_last && !edge { 0 } else { value };
        let cross = |value: u32| if edge { value } else { 0 };

        let offsets = match context.orientation {
            Orientation::Vertical => ItemOffsets {
                left: cross(spacing.left),
                top: leading(spacing.top),
                right: cross(spacing.right),
                bottom: trailing(spacing.bottom),
            },
            Orientation::Horizontal => ItemOffsets {
                left: leading(spacing.left),
                top: cross(spacing.top),
                right: trailing(spacing.right),
                bottom: cross(spacing.bottom),
            },
        };

        if context.layout_direction.is_rtl() {
            offsets.mirrored()
        } else {
            offsets
        }
    }
}
