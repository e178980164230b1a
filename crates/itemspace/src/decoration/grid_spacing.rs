//! Evenly distributed spacing for fixed-column grids.
//!
//! Each item gets a share of the horizontal spacing on both sides, chosen so
//! that the touching sides of two neighbours always add up to the full
//! spacing even when it does not divide evenly by the column count.

use smallvec::SmallVec;

use super::{DecorationContext, ItemDecoration, SpanSizeLookup};
use crate::{ItemOffsets, LayoutDirection, SpacingConfigError};

/// Immutable spacing parameters of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSpacingConfig {
    span_count: usize,
    spacing_horizontal: u32,
    spacing_vertical: u32,
    include_edge: bool,
}

impl GridSpacingConfig {
    /// Creates a config, rejecting a grid without columns.
    ///
    /// # Arguments
    /// * `span_count` - Number of columns
    /// * `spacing_horizontal` - Gap between two columns
    /// * `spacing_vertical` - Gap between two rows
    /// * `include_edge` - Whether the outer left, right and top edges are spaced too
    pub fn new(
        span_count: usize,
        spacing_horizontal: u32,
        spacing_vertical: u32,
        include_edge: bool,
    ) -> Result<Self, SpacingConfigError> {
        if span_count == 0 {
            return Err(SpacingConfigError::ZeroSpanCount);
        }
        Ok(Self {
            span_count,
            spacing_horizontal,
            spacing_vertical,
            include_edge,
        })
    }

    pub fn span_count(&self) -> usize {
        self.span_count
    }

    pub fn spacing_horizontal(&self) -> u32 {
        self.spacing_horizontal
    }

    pub fn spacing_vertical(&self) -> u32 {
        self.spacing_vertical
    }

    pub fn include_edge(&self) -> bool {
        self.include_edge
    }

    /// Offsets of every column of `row`, assuming single-span items.
    ///
    /// Empty when the row lies past the last addressable position.
    pub fn row_offsets(
        &self,
        row: usize,
        direction: LayoutDirection,
    ) -> SmallVec<[ItemOffsets; 8]> {
        let Some(first) = row
            .checked_mul(self.span_count)
            .filter(|first| first.checked_add(self.span_count - 1).is_some())
        else {
            return SmallVec::new();
        };
        (0..self.span_count)
            .map(|column| compute_offsets(self, first + column, None, direction))
            .collect()
    }

    /// `column * spacing_horizontal / span_count`, truncated.
    fn share(&self, column: usize) -> u32 {
        let share = column as u128 * u128::from(self.spacing_horizontal) / self.span_count as u128;
        // column <= span_count keeps the share within spacing_horizontal
        share as u32
    }
}

/// Computes the spacing around the item at `position`.
///
/// Items the lookup reports as spanning the whole row are left unspaced.
/// Every other item always gets `spacing_vertical` below it; the first row
/// also gets it above when edges are included. The last row gets no extra
/// allowance below.
pub fn compute_offsets(
    config: &GridSpacingConfig,
    position: usize,
    span_lookup: Option<&dyn SpanSizeLookup>,
    direction: LayoutDirection,
) -> ItemOffsets {
    if let Some(lookup) = span_lookup {
        if lookup.span_size(position) == config.span_count {
            return ItemOffsets::ZERO;
        }
    }

    let spacing = config.spacing_horizontal;
    let column = position % config.span_count;

    let (start, end) = if config.include_edge {
        (spacing - config.share(column), config.share(column + 1))
    } else {
        (config.share(column), spacing - config.share(column + 1))
    };
    let (left, right) = if direction.is_rtl() {
        (end, start)
    } else {
        (start, end)
    };

    let top = if config.include_edge && position < config.span_count {
        config.spacing_vertical
    } else {
        0
    };

    ItemOffsets {
        left,
        top,
        right,
        bottom: config.spacing_vertical,
    }
}

/// Grid spacing applied through the host's decoration callback.
///
/// The span lookup and layout direction come from the [`DecorationContext`]
/// of each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpacingDecoration {
    config: GridSpacingConfig,
}

impl GridSpacingDecoration {
    pub fn new(
        span_count: usize,
        spacing_horizontal: u32,
        spacing_vertical: u32,
        include_edge: bool,
    ) -> Result<Self, SpacingConfigError> {
        GridSpacingConfig::new(span_count, spacing_horizontal, spacing_vertical, include_edge)
            .map(Self::from_config)
    }

    pub fn from_config(config: GridSpacingConfig) -> Self {
        log::debug!(
            "GridSpacingDecoration: {} columns, spacing {}x{}, include_edge={}",
            config.span_count,
            config.spacing_horizontal,
            config.spacing_vertical,
            config.include_edge
        );
        Self { config }
    }

    pub fn config(&self) -> &GridSpacingConfig {
        &self.config
    }
}

impl ItemDecoration for GridSpacingDecoration {
    fn item_offsets(&self, position: usize, context: &DecorationContext<'_>) -> ItemOffsets {
        compute_offsets(
            &self.config,
            position,
            context.span_lookup,
            context.layout_direction,
        )
    }
}
