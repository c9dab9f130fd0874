//! Passes 3 and 4: stretch lines to an exact cross size, then stretch items to their lines.

use log::debug;

use crate::container::LayoutContext;
use crate::flexing::{FlexSlot, distribute};
use crate::host::measure_child;
use crate::{
    AlignContent, AlignItems, FlexError, FlexHost, FlexItem, FlexItemState, FlexLine, MeasureMode,
    MeasureSpec,
};

/// Sum of line cross sizes plus the cross-axis dividers drawn around them.
pub(crate) fn lines_cross_total(ctx: &LayoutContext, lines: &[FlexLine]) -> i32 {
    let lines_sum: i32 = lines.iter().map(FlexLine::cross_size).sum();
    lines_sum + ctx.cross_divider().total_for(lines.len())
}

/// Resolve line cross sizes when the container's cross size is exact.
///
/// A single line takes the whole available cross size. With several lines and
/// `align-content: stretch`, any surplus is split evenly with carried rounding; lines never
/// shrink along the cross axis.
pub(crate) fn stretch_lines(ctx: &LayoutContext, lines: &mut [FlexLine]) {
    if ctx.cross_spec.mode != MeasureMode::Exactly || lines.is_empty() {
        return;
    }
    let padding = ctx.axes.cross_sum(ctx.padding());
    let dividers = ctx.cross_divider().total_for(lines.len());
    let available = (ctx.cross_spec.size - padding - dividers).max(0);
    if let [only] = lines {
        debug!(
            target: "flexbox::cross",
            "single line cross {} -> {available}",
            only.cross_size
        );
        only.cross_size = available;
        return;
    }
    if ctx.config.align_content != AlignContent::Stretch {
        return;
    }
    let used = lines_cross_total(ctx, lines) - dividers;
    let surplus = available - used;
    if surplus <= 0 {
        return;
    }
    let slots: Vec<FlexSlot> = lines
        .iter()
        .map(|line| FlexSlot::unbounded(line.cross_size, 1.0))
        .collect();
    debug!(
        target: "flexbox::cross",
        "stretching {} lines by {surplus} total",
        lines.len()
    );
    for (line, size) in lines.iter_mut().zip(distribute(&slots, surplus)) {
        line.cross_size = size;
    }
}

/// Re-measure every visible item of a stretch-aligned container at an exact cross size equal
/// to its line's cross size minus its cross margins, keeping its resolved main size.
pub(crate) fn stretch_items<H: FlexHost + ?Sized>(
    ctx: &LayoutContext,
    host: &mut H,
    items: &[FlexItem],
    lines: &[FlexLine],
    states: &mut [FlexItemState],
) -> Result<(), FlexError> {
    if ctx.config.align_items != AlignItems::Stretch {
        return Ok(());
    }
    let axes = ctx.axes;
    for line in lines {
        for &index in &line.indices {
            let (item, state) = ctx.entry(items, states, index)?;
            if !item.visible {
                continue;
            }
            let (min, max) = item.cross_bounds(axes);
            let cross = (line.cross_size - item.cross_margins(axes)).max(0).clamp(min, max);
            let (width_spec, height_spec) = axes.physical_specs(
                MeasureSpec::exactly(axes.main_of(state.measured)),
                MeasureSpec::exactly(cross),
            );
            measure_child(host, index, item, width_spec, height_spec, state)?;
        }
    }
    Ok(())
}
