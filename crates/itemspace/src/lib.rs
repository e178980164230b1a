//! Item spacing for grid and list layouts.
//!
//! A host list view asks each decoration for the offsets of one item at a
//! time and adds them around the item's bounds. The decorations here are
//! plain values: they never measure, draw or scroll anything.
//!
//! # Example
//!
//! ```rust
//! use itemspace::{compute_offsets, GridSpacingConfig, ItemOffsets, LayoutDirection};
//!
//! let config = GridSpacingConfig::new(3, 30, 10, true).unwrap();
//! let offsets = compute_offsets(&config, 1, None, LayoutDirection::Ltr);
//! assert_eq!(offsets, ItemOffsets::from_components(20, 10, 20, 10));
//! ```

pub mod decoration;
mod error;
mod item_offsets;
mod layout_direction;

pub use decoration::*;
pub use error::SpacingConfigError;
pub use item_offsets::ItemOffsets;
pub use layout_direction::LayoutDirection;
