/// Spacing added around one item's bounds, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemOffsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl ItemOffsets {
    /// No spacing on any side.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn from_components(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn uniform(value: u32) -> Self {
        Self::from_components(value, value, value, value)
    }

    /// Swaps left and right, as a right-to-left layout sees them.
    pub fn mirrored(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..self
        }
    }

    /// `left + right`, widened so two full-range sides cannot overflow.
    pub fn horizontal_sum(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    /// `top + bottom`, widened like [`ItemOffsets::horizontal_sum`].
    pub fn vertical_sum(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert!(ItemOffsets::default().is_zero());
        assert_eq!(ItemOffsets::default(), ItemOffsets::ZERO);
    }

    #[test]
    fn test_mirrored_keeps_vertical_sides() {
        let offsets = ItemOffsets::from_components(1, 2, 3, 4);
        let mirrored = offsets.mirrored();

        assert_eq!(mirrored, ItemOffsets::from_components(3, 2, 1, 4));
        assert_eq!(mirrored.mirrored(), offsets);
    }

    #[test]
    fn test_sums() {
        let offsets = ItemOffsets::from_components(5, 7, 11, 13);
        assert_eq!(offsets.horizontal_sum(), 16);
        assert_eq!(offsets.vertical_sum(), 20);
        assert_eq!(ItemOffsets::uniform(4).horizontal_sum(), 8);
    }

    #[test]
    fn test_sums_of_full_range_sides() {
        let offsets = ItemOffsets::uniform(u32::MAX);
        assert_eq!(offsets.horizontal_sum(), 2 * u64::from(u32::MAX));
        assert_eq!(offsets.vertical_sum(), 2 * u64::from(u32::MAX));
    }
}
