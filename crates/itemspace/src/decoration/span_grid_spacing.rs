//! Per-side spacing for grids whose items may span several columns.

use super::{
    clamped_span_size, DecorationContext, DefaultSpanSizeLookup, ItemDecoration, Orientation,
    SpanSizeLookup,
};
use crate::{ItemOffsets, SpacingConfigError};

/// Where an item sits relative to the outer edges of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct GridEdges {
    first_row: bool,
    last_row: bool,
    first_in_row: bool,
    last_in_row: bool,
}

/// Applies fixed left/top/right/bottom spacing to every grid item.
///
/// When edges are excluded, the sides that face the outside of the grid are
/// left at zero. Rows are derived from the span lookup of the context, so
/// items spanning several columns still land on the right edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanGridSpacingDecoration {
    span_count: usize,
    spacing: ItemOffsets,
    include_edge: bool,
}

impl SpanGridSpacingDecoration {
    pub fn new(
        span_count: usize,
        spacing: ItemOffsets,
        include_edge: bool,
    ) -> Result<Self, SpacingConfigError> {
        if span_count == 0 {
            return Err(SpacingConfigError::ZeroSpanCount);
        }
        log::debug!(
            "SpanGridSpacingDecoration: {} columns, spacing {:?}, include_edge={}",
            span_count,
            spacing,
            include_edge
        );
        Ok(Self {
            span_count,
            spacing,
            include_edge,
        })
    }

    pub fn span_count(&self) -> usize {
        self.span_count
    }

    pub fn spacing(&self) -> ItemOffsets {
        self.spacing
    }

    pub fn include_edge(&self) -> bool {
        self.include_edge
    }

    fn edges(&self, position: usize, context: &DecorationContext<'_>) -> GridEdges {
        let lookup: &dyn SpanSizeLookup = context.span_lookup.unwrap_or(&DefaultSpanSizeLookup);
        let span_count = self.span_count;

        let group = lookup.span_group_index(position, span_count);
        let last_group = context
            .item_count
            .checked_sub(1)
            .map(|last| lookup.span_group_index(last, span_count));
        let span_index = lookup.span_index(position, span_count);
        let span_size = clamped_span_size(lookup, position, span_count);

        GridEdges {
            first_row: group == 0,
            last_row: last_group.is_some_and(|last| group >= last),
            first_in_row: span_index == 0,
            last_in_row: span_index + span_size == span_count,
        }
    }

    fn keep(&self, value: u32, outer: bool) -> u32 {
        if self.include_edge || !outer {
            value
        } else {
            0
        }
    }
}

impl ItemDecoration for SpanGridSpacingDecoration {
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets {
        let edges = self.edges(position, context);
        let spacing = self.spacing;

        let offsets = match context.orientation {
            Orientation::Vertical => ItemOffsets {
                left: self.keep(spacing.left, edges.first_in_row),
                top: self.keep(spacing.top, edges.first_row),
                right: self.keep(spacing.right, edges.last_in_row),
                bottom: self.keep(spacing.bottom, edges.last_row),
            },
            // Rows run along the scroll axis, so "rows" are columns on screen.
            Orientation::Horizontal => ItemOffsets {
                left: self.keep(spacing.left, edges.first_row),
                top: self.keep(spacing.top, edges.first_in_row),
                right: self.keep(spacing.right, edges.last_row),
                bottom: self.keep(spacing.bottom, edges.last_in_row),
            },
        };

        if context.layout_direction.is_rtl() {
            offsets.mirrored()
        } else {
            offsets
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutDirection;

    fn decoration(include_edge: bool) -> SpanGridSpacingDecoration {
        SpanGridSpacingDecoration::new(3, ItemOffsets::from_components(1, 2, 3, 4), include_edge)
            .unwrap()
    }

    #[test]
    fn test_zero_span_count_rejected() {
        assert_eq!(
            SpanGridSpacingDecoration::new(0, ItemOffsets::ZERO, true),
            Err(SpacingConfigError::ZeroSpanCount)
        );
    }

    #[test]
    fn test_include_edge_spaces_every_side() {
        let decoration = decoration(true);
        let context = DecorationContext::new(9);
        for position in 0..9 {
            assert_eq!(
                decoration.item_offsets(position, &context),
                ItemOffsets::from_components(1, 2, 3, 4)
            );
        }
    }

    #[test]
    fn test_excluded_edges_vertical() {
        let decoration = decoration(false);
        let context = DecorationContext::new(9);

        // Top-left corner
        assert_eq!(
            decoration.item_offsets(0, &context),
            ItemOffsets::from_components(0, 0, 3, 4)
        );
        // Centre
        assert_eq!(
            decoration.item_offsets(4, &context),
            ItemOffsets::from_components(1, 2, 3, 4)
        );
        // Bottom-right corner
        assert_eq!(
            decoration.item_offsets(8, &context),
            ItemOffsets::from_components(1, 2, 0, 0)
        );
    }

    #[test]
    fn test_partial_last_row_is_last() {
        let decoration = decoration(false);
        let context = DecorationContext::new(7);

        assert_eq!(decoration.item_offsets(6, &context).bottom, 0);
        assert_eq!(decoration.item_offsets(5, &context).bottom, 4);
    }

    #[test]
    fn test_excluded_edges_horizontal() {
        let decoration = decoration(false);
        let context = DecorationContext::new(9).with_orientation(Orientation::Horizontal);

        assert_eq!(
            decoration.item_offsets(0, &context),
            ItemOffsets::from_components(0, 0, 3, 4)
        );
        assert_eq!(
            decoration.item_offsets(2, &context),
            ItemOffsets::from_components(0, 2, 3, 0)
        );
        assert_eq!(
            decoration.item_offsets(6, &context),
            ItemOffsets::from_components(1, 0, 0, 4)
        );
    }

    #[test]
    fn test_full_width_item_spans_both_outer_sides() {
        let decoration = decoration(false);
        let lookup = |position: usize| -> usize { if position == 3 { 3 } else { 1 } };
        let context = DecorationContext::new(7).with_span_lookup(&lookup);

        let offsets = decoration.item_offsets(3, &context);
        assert_eq!(offsets.left, 0);
        assert_eq!(offsets.right, 0);
        assert_eq!(offsets.top, 2);
    }

    #[test]
    fn test_rtl_mirrors() {
        let decoration = decoration(false);
        let context = DecorationContext::new(9).with_layout_direction(LayoutDirection::Rtl);

        assert_eq!(
            decoration.item_offsets(0, &context),
            ItemOffsets::from_components(3, 0, 0, 4)
        );
    }

    #[test]
    fn test_empty_adapter_has_no_last_row() {
        let decoration = decoration(false);
        let context = DecorationContext::new(0);

        assert_eq!(decoration.item_offsets(4, &context).bottom, 4);
    }
}
