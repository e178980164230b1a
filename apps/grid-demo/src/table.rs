use itemspace::{DecorationContext, ItemDecoration};

/// Prints one line per item with its four offsets.
pub fn print(title: &str, decoration: &dyn ItemDecoration, context: &DecorationContext<'_>) {
    println!("{title}");
    println!("{:>8} {:>6} {:>6} {:>6} {:>6}", "position", "left", "top", "right", "bottom");
    for position in 0..context.item_count {
        let offsets = decoration.item_offsets(position, context);
        println!(
            "{:>8} {:>6} {:>6} {:>6} {:>6}",
            position, offsets.left, offsets.top, offsets.right, offsets.bottom
        );
    }
    println!();
}
