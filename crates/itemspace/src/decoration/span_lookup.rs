//! Span sizes of grid items and the row wrapping they produce.

/// Maps an adapter position to the number of grid columns the item occupies.
///
/// Any `Fn(usize) -> usize` closure is a lookup, so a grid with a header
/// every ten items can be described as `|p| if p % 10 == 0 { span_count } else { 1 }`.
///
/// The index helpers walk every position before the queried one, so they are
/// linear in `position`. [`DefaultSpanSizeLookup`] overrides them with
/// constant-time arithmetic.
pub trait SpanSizeLookup {
    /// Number of columns the item at `position` occupies.
    fn span_size(&self, position: usize) -> usize;

    /// Column in which the item at `position` starts.
    ///
    /// Full-width items always start at column 0. An item that does not fit
    /// in the cells left on its row wraps to the next row and starts at 0.
    fn span_index(&self, position: usize, span_count: usize) -> usize {
        let position_span = clamped_span_size(self, position, span_count);
        if position_span == span_count {
            return 0;
        }

        let mut span = 0;
        for i in 0..position {
            let size = clamped_span_size(self, i, span_count);
            span += size;
            if span == span_count {
                span = 0;
            } else if span > span_count {
                span = size;
            }
        }

        if span + position_span <= span_count {
            span
        } else {
            0
        }
    }

    /// Row in which the item at `position` is placed.
    fn span_group_index(&self, position: usize, span_count: usize) -> usize {
        let position_span = clamped_span_size(self, position, span_count);
        let mut span = 0;
        let mut group = 0;
        for i in 0..position {
            let size = clamped_span_size(self, i, span_count);
            span += size;
            if span == span_count {
                span = 0;
                group += 1;
            } else if span > span_count {
                span = size;
                group += 1;
            }
        }

        if span + position_span > span_count {
            group += 1;
        }
        group
    }
}

impl<F> SpanSizeLookup for F
where
    F: Fn(usize) -> usize,
{
    fn span_size(&self, position: usize) -> usize {
        self(position)
    }
}

/// Every item occupies exactly one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultSpanSizeLookup;

impl SpanSizeLookup for DefaultSpanSizeLookup {
    fn span_size(&self, _position: usize) -> usize {
        1
    }

    fn span_index(&self, position: usize, span_count: usize) -> usize {
        position % span_count.max(1)
    }

    fn span_group_index(&self, position: usize, span_count: usize) -> usize {
        position / span_count.max(1)
    }
}

/// Span size of `position`, forced into `1..=span_count`.
pub fn clamped_span_size<L>(lookup: &L, position: usize, span_count: usize) -> usize
where
    L: SpanSizeLookup + ?Sized,
{
    let span_count = span_count.max(1);
    let size = lookup.span_size(position);
    if size == 0 || size > span_count {
        log::warn!(
            "Span size {} at position {} is outside 1..={}, clamping",
            size,
            position,
            span_count
        );
    }
    size.clamp(1, span_count)
}
