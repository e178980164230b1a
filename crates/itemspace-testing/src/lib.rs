//! Testing utilities and harness for itemspace decorations.
//!
//! [`GridHarness`] asks a decoration for the offsets of every item of an
//! adapter, groups them into rows and reports the gaps a user would see on
//! screen.

use itemspace::{
    DecorationContext, DefaultSpanSizeLookup, ItemDecoration, ItemOffsets, SpanSizeLookup,
};
use smallvec::SmallVec;

/// Offsets of a whole adapter, grouped into rows.
pub struct GridHarness<'a> {
    context: DecorationContext<'a>,
    offsets: Vec<ItemOffsets>,
    rows: Vec<SmallVec<[usize; 8]>>,
}

impl<'a> GridHarness<'a> {
    /// Lays out `context.item_count` items of a grid with `span_count` columns.
    pub fn layout(
        decoration: &dyn ItemDecoration,
        context: DecorationContext<'a>,
        span_count: usize,
    ) -> Self {
        let lookup: &dyn SpanSizeLookup = context.span_lookup.unwrap_or(&DefaultSpanSizeLookup);
        let mut rows: Vec<SmallVec<[usize; 8]>> = Vec::new();
        let mut offsets = Vec::with_capacity(context.item_count);

        for position in 0..context.item_count {
            offsets.push(decoration.item_offsets(position, &context));

            let group = lookup.span_group_index(position, span_count);
            if rows.len() <= group {
                rows.resize_with(group + 1, SmallVec::new);
            }
            rows[group].push(position);
        }

        Self {
            context,
            offsets,
            rows,
        }
    }

    pub fn offsets(&self, position: usize) -> ItemOffsets {
        self.offsets[position]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Adapter positions of `row`, in adapter order.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// Offsets of `row` from the left of the screen to the right.
    pub fn visual_row(&self, row: usize) -> SmallVec<[ItemOffsets; 8]> {
        let mut visual: SmallVec<[ItemOffsets; 8]> =
            self.rows[row].iter().map(|&p| self.offsets[p]).collect();
        if self.context.layout_direction.is_rtl() {
            visual.reverse();
        }
        visual
    }

    /// Space between each pair of horizontally touching items of `row`.
    pub fn touching_gaps(&self, row: usize) -> SmallVec<[u32; 8]> {
        self.visual_row(row)
            .windows(2)
            .map(|pair| pair[0].right + pair[1].left)
            .collect()
    }

    /// Space between the left edge of the grid and the first item of `row`.
    pub fn left_edge(&self, row: usize) -> u32 {
        self.visual_row(row).first().map_or(0, |o| o.left)
    }

    /// Space between the last item of `row` and the right edge of the grid.
    pub fn right_edge(&self, row: usize) -> u32 {
        self.visual_row(row).last().map_or(0, |o| o.right)
    }

    /// Vertical space between `row` and the row below it, measured on the
    /// first item of each.
    pub fn row_gap(&self, row: usize) -> u32 {
        let above = self.offsets[self.rows[row][0]];
        let below = self.offsets[self.rows[row + 1][0]];
        above.bottom + below.top
    }
}
