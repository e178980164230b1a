mod table;

use itemspace::{
    divider_decoration, DecorationContext, GridSpacingDecoration, ItemOffsets, LayoutDirection,
    LayoutKind, LinearSpacingDecoration, Orientation, SpanGridSpacingDecoration,
    SpacingConfigError,
};

fn main() -> Result<(), SpacingConfigError> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    let system_direction = LayoutDirection::current();
    log::info!("System layout direction: {:?}", system_direction);

    // Five columns with a full-width banner at position 14, divider 30/10.
    let banner = |position: usize| -> usize { if position == 14 { 5 } else { 1 } };
    let sample = divider_decoration(
        LayoutKind::from_span_count(5, false, Orientation::Vertical),
        30,
        10,
    )?;
    for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
        let context = DecorationContext::new(15)
            .with_span_lookup(&banner)
            .with_layout_direction(direction);
        table::print(
            &format!("Sample grid, 5 columns, banner at 14 ({direction:?})"),
            &sample,
            &context,
        );
    }

    let edged = GridSpacingDecoration::new(3, 30, 10, true)?;
    table::print(
        "Grid with edges, 3 columns",
        &edged,
        &DecorationContext::new(6).with_layout_direction(system_direction),
    );

    let spanned =
        SpanGridSpacingDecoration::new(3, ItemOffsets::from_components(4, 8, 4, 8), false)?;
    let wide_third = |position: usize| -> usize { if position == 2 { 2 } else { 1 } };
    table::print(
        "Span-aware grid, 3 columns, item 2 spans two",
        &spanned,
        &DecorationContext::new(7).with_span_lookup(&wide_third),
    );

    let list = LinearSpacingDecoration::new(ItemOffsets::uniform(16), false);
    table::print("Vertical list without edges", &list, &DecorationContext::new(4));

    Ok(())
}
