//! Pass 1: measure children in layout order and pack them into flex lines.

use std::mem;

use log::{debug, trace};

use crate::container::LayoutContext;
use crate::host::measure_child;
use crate::{
    FlexError, FlexHost, FlexItem, FlexItemState, FlexLine, MeasureSpec, child_measure_spec,
};

/// Measure every visible child and break the ordered sequence into lines.
///
/// A wrap happens only when wrapping is enabled, the main constraint is bounded, the current
/// line already holds a visible item, and adding the next item (plus the end divider that
/// would close the line) would exceed the container's main size. Lines without visible items
/// are dropped.
pub(crate) fn partition_lines<H: FlexHost + ?Sized>(
    ctx: &LayoutContext,
    host: &mut H,
    items: &[FlexItem],
    order: &[usize],
    states: &mut [FlexItemState],
) -> Result<Vec<FlexLine>, FlexError> {
    let axes = ctx.axes;
    let padding_main = axes.main_sum(ctx.padding());
    let divider = ctx.main_divider();
    let may_wrap = ctx.may_wrap();
    let mut lines: Vec<FlexLine> = Vec::new();
    let mut line = FlexLine::open(0, padding_main, divider.before_first());

    for (position, &index) in order.iter().enumerate() {
        let (item, state) = ctx.entry(items, states, index)?;
        if !item.visible {
            line.push_gone(index);
            continue;
        }
        let (width_spec, height_spec) = ctx.child_specs(item);
        let measured = measure_child(host, index, item, width_spec, height_spec, state)?;
        let outer_main = axes.main_of(measured) + item.main_margins(axes);

        let mut divider_before = if line.item_count_not_gone() > 0 {
            divider.between()
        } else {
            0
        };
        if may_wrap
            && line.item_count_not_gone() > 0
            && line.main_size + divider_before + outer_main + divider.after_last()
                > ctx.main_spec.size
        {
            let next = FlexLine::open(position, padding_main, divider.before_first());
            close_line(&mut lines, mem::replace(&mut line, next), divider.after_last());
            divider_before = 0;
        }
        trace!(
            target: "flexbox::lines",
            "child {index} at position {position}: outer_main={outer_main} line_main={}",
            line.main_size
        );
        line.push_visible(
            index,
            outer_main,
            divider_before,
            (item.grow_weight(), item.shrink_weight()),
        );
    }
    close_line(&mut lines, line, divider.after_last());

    for flex_line in &mut lines {
        refresh_cross_extent(ctx, items, states, flex_line)?;
    }
    debug!(
        target: "flexbox::lines",
        "partitioned {} children into {} lines (main constraint {:?})",
        order.len(),
        lines.len(),
        ctx.main_spec
    );
    Ok(lines)
}

/// Append `line` unless it holds no visible item.
fn close_line(lines: &mut Vec<FlexLine>, mut line: FlexLine, trailing_divider: i32) {
    if line.item_count_not_gone() == 0 {
        return;
    }
    line.add_trailing_divider(trailing_divider);
    lines.push(line);
}

/// Recompute a line's cross size (and max baseline) from its items' current measurements.
pub(crate) fn refresh_cross_extent(
    ctx: &LayoutContext,
    items: &[FlexItem],
    states: &[FlexItemState],
    line: &mut FlexLine,
) -> Result<(), FlexError> {
    let axes = ctx.axes;
    let baseline_aligned = ctx.baseline_aligned();
    let mut cross_size = 0;
    let mut max_baseline = 0;
    let mut max_descent = 0;
    for &index in &line.indices {
        let (item, state) = ctx.entry_ref(items, states, index)?;
        if !item.visible {
            continue;
        }
        let margins = item.margins.non_negative();
        cross_size = cross_size.max(axes.cross_of(state.measured) + item.cross_margins(axes));
        if baseline_aligned && let Some(baseline) = state.baseline {
            max_baseline = max_baseline.max(baseline + margins.top);
            max_descent = max_descent.max(state.measured.height - baseline + margins.bottom);
        }
    }
    if baseline_aligned {
        cross_size = cross_size.max(max_baseline + max_descent);
    }
    line.cross_size = cross_size;
    line.max_baseline = max_baseline;
    Ok(())
}

/// Constraints for a child re-measured at a fixed main size, keeping the cross constraint it
/// was first measured with.
pub(crate) fn fixed_main_specs(
    ctx: &LayoutContext,
    item: &FlexItem,
    main_size: i32,
) -> (MeasureSpec, MeasureSpec) {
    let axes = ctx.axes;
    let cross = child_measure_spec(
        ctx.cross_spec,
        axes.cross_sum(ctx.padding()) + item.cross_margins(axes),
        item.cross_size_spec(axes),
    );
    axes.physical_specs(MeasureSpec::exactly(main_size), cross)
}
