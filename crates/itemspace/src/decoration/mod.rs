//! Item decorations that contribute spacing around list and grid items.
//!
//! # Architecture
//!
//! The host list view owns scrolling, measurement and drawing. For every item
//! it lays out, it calls [`ItemDecoration::item_offsets`] with the item's
//! adapter position and a [`DecorationContext`] describing the current pass.
//!
//! - [`GridSpacingDecoration`] - evenly distributed column spacing with RTL support
//! - [`SpanGridSpacingDecoration`] - per-side spacing for grids with multi-span items
//! - [`LinearSpacingDecoration`] - per-side spacing for single-column lists
//! - [`divider_decoration`] - picks one of the above for a [`LayoutKind`]
//!
//! # Example
//!
//! ```rust
//! use itemspace::{DecorationContext, GridSpacingDecoration, ItemDecoration};
//!
//! let decoration = GridSpacingDecoration::new(5, 30, 10, false).unwrap();
//! let headers = |position: usize| -> usize { if position == 14 { 5 } else { 1 } };
//! let context = DecorationContext::new(15).with_span_lookup(&headers);
//!
//! assert!(decoration.item_offsets(14, &context).is_zero());
//! ```

mod divider;
mod grid_spacing;
mod linear_spacing;
mod span_grid_spacing;
mod span_lookup;

pub use divider::*;
pub use grid_spacing::*;
pub use linear_spacing::*;
pub use span_grid_spacing::*;
pub use span_lookup::*;

use crate::{ItemOffsets, LayoutDirection};

/// Scroll axis of the host list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Per-pass inputs the host supplies alongside an item position.
#[derive(Clone, Copy)]
pub struct DecorationContext<'a> {
    /// Total number of items in the adapter.
    pub item_count: usize,

    pub orientation: Orientation,

    /// Direction of the active locale, resolved by the caller.
    pub layout_direction: LayoutDirection,

    /// Span sizes of grid items. `None` means every item spans one column.
    pub span_lookup: Option<&'a dyn SpanSizeLookup>,
}

impl<'a> DecorationContext<'a> {
    /// A vertical, left-to-right context without span information.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            orientation: Orientation::Vertical,
            layout_direction: LayoutDirection::Ltr,
            span_lookup: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn with_span_lookup(mut self, span_lookup: &'a dyn SpanSizeLookup) -> Self {
        self.span_lookup = Some(span_lookup);
        self
    }
}

impl std::fmt::Debug for DecorationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationContext")
            .field("item_count", &self.item_count)
            .field("orientation", &self.orientation)
            .field("layout_direction", &self.layout_direction)
            .field("has_span_lookup", &self.span_lookup.is_some())
            .finish()
    }
}

/// Contributes spacing around items laid out by a host list.
///
/// Implementations must be pure: the same position and context always
/// yield the same offsets.
pub trait ItemDecoration {
    /// Returns the spacing to add around the item at `position`.
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets;
}

impl<T: ItemDecoration + ?Sized> ItemDecoration for &T {
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets {
        (**self).item_offsets(position, context)
    }
}

impl<T: ItemDecoration + ?Sized> ItemDecoration for Box<T> {
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets {
        (**self).item_offsets(position, context)
    }
}
