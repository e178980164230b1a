//! Picks a spacing decoration for the layout a list uses.

use super::{GridSpacingDecoration, ItemDecoration, LinearSpacingDecoration, Orientation};
use crate::{ItemOffsets, SpacingConfigError};

/// Arrangement of items in the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Linear(Orientation),
    Grid { span_count: usize },
    StaggeredGrid { span_count: usize },
}

impl LayoutKind {
    /// Zero or one column is a plain list; more columns make a grid.
    pub fn from_span_count(span_count: usize, staggered: bool, orientation: Orientation) -> Self {
        match span_count {
            0 | 1 => LayoutKind::Linear(orientation),
            _ if staggered => LayoutKind::StaggeredGrid { span_count },
            _ => LayoutKind::Grid { span_count },
        }
    }
}

/// Builds the divider spacing for `kind`.
///
/// Grids get evenly distributed gaps without outer edges. Lists get a
/// trailing gap after every item along their scroll axis, the last one
/// included.
pub fn divider_decoration(
    kind: LayoutKind,
    horizontal_size: u32,
    vertical_size: u32,
) -> Result<Box<dyn ItemDecoration + Send + Sync>, SpacingConfigError> {
    log::debug!(
        "divider_decoration: {:?}, sizes {}x{}",
        kind,
        horizontal_size,
        vertical_size
    );
    let decoration: Box<dyn ItemDecoration + Send + Sync> = match kind {
        LayoutKind::Grid { span_count } | LayoutKind::StaggeredGrid { span_count } => Box::new(
            GridSpacingDecoration::new(span_count, horizontal_size, vertical_size, false)?,
        ),
        LayoutKind::Linear(Orientation::Vertical) => Box::new(LinearSpacingDecoration::new(
            ItemOffsets::from_components(0, 0, 0, vertical_size),
            true,
        )),
        LayoutKind::Linear(Orientation::Horizontal) => Box::new(LinearSpacingDecoration::new(
            ItemOffsets::from_components(0, 0, horizontal_size, 0),
            true,
        )),
    };
    Ok(decoration)
}

/// [`divider_decoration`] with the same size on both axes.
pub fn uniform_divider(
    kind: LayoutKind,
    size: u32,
) -> Result<Box<dyn ItemDecoration + Send + Sync>, SpacingConfigError> {
    divider_decoration(kind, size, size)
}
