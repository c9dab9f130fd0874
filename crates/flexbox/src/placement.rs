//! Pass 5: assign every visible child a rectangle and record line bounding boxes.

use log::{debug, trace};

use crate::axis::LogicalBox;
use crate::container::LayoutContext;
use crate::cross::lines_cross_total;
use crate::{
    AlignContent, AlignItems, ContainerSize, FlexError, FlexItem, FlexItemState, FlexLine,
    JustifyContent,
};

/// Start offset and extra spacing between items of one line.
fn justify_offsets(
    justify: JustifyContent,
    container_main: i32,
    line_main: i32,
    visible: usize,
) -> (f32, f32) {
    let remaining = (container_main - line_main) as f32;
    let free = remaining.max(0.0);
    match (justify, visible) {
        (JustifyContent::FlexEnd, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => (0.0, free / (count as f32 - 1.0)),
        (JustifyContent::SpaceAround, count) if count > 0 => {
            let each = free / count as f32;
            (each * 0.5, each)
        }
        _ => (0.0, 0.0),
    }
}

/// Start offset and extra spacing between lines along the cross axis.
fn align_content_offsets(
    align: AlignContent,
    container_cross: i32,
    content_total: i32,
    line_count: usize,
) -> (f32, f32) {
    let remaining = (container_cross - content_total) as f32;
    let free = remaining.max(0.0);
    match (align, line_count) {
        (AlignContent::FlexEnd, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => (0.0, free / (count as f32 - 1.0)),
        (AlignContent::SpaceAround, count) if count > 0 => {
            let each = free / count as f32;
            (each * 0.5, each)
        }
        // FlexStart and Stretch (stretch already grew the lines).
        _ => (0.0, 0.0),
    }
}

/// Offset of an item inside its line along the cross axis, margins included.
fn cross_offset_in_line(
    ctx: &LayoutContext,
    item: &FlexItem,
    state: &FlexItemState,
    line: &FlexLine,
) -> i32 {
    let axes = ctx.axes;
    let margins = item.margins.non_negative();
    let start_margin = axes.cross_start(margins);
    let end_margin = axes.cross_end(margins);
    let cross_size = axes.cross_of(state.measured);
    match ctx.config.align_items {
        AlignItems::FlexEnd => line.cross_size - cross_size - end_margin,
        AlignItems::Center => {
            (line.cross_size - cross_size + start_margin - end_margin) / 2
        }
        AlignItems::Baseline if ctx.baseline_aligned() => match state.baseline {
            Some(baseline) => (line.max_baseline - baseline).max(start_margin),
            None => start_margin,
        },
        AlignItems::FlexStart | AlignItems::Stretch | AlignItems::Baseline => start_margin,
    }
}

/// Walk lines and items in order, advancing a main cursor within each line and a cross cursor
/// across lines, and write each visible item's physical rectangle into `states`.
pub(crate) fn place_items(
    ctx: &LayoutContext,
    items: &[FlexItem],
    lines: &mut [FlexLine],
    states: &mut [FlexItemState],
    container: ContainerSize,
) -> Result<(), FlexError> {
    let axes = ctx.axes;
    let padding = ctx.padding();
    let main_divider = ctx.main_divider();
    let cross_divider = ctx.cross_divider();
    let container_main = container.main.size;
    let container_cross = container.cross.size;
    let physical = container.physical();

    let (lines_start, lines_between) = align_content_offsets(
        ctx.config.align_content,
        container_cross - axes.cross_sum(padding),
        lines_cross_total(ctx, lines),
        lines.len(),
    );
    let mut cross_cursor =
        (axes.cross_start(padding) + cross_divider.before_first()) as f32 + lines_start;
    debug!(
        target: "flexbox::place",
        "placing {} lines in {container_main}x{container_cross} (main x cross)",
        lines.len()
    );

    for (line_index, line) in lines.iter_mut().enumerate() {
        if line_index > 0 {
            cross_cursor += cross_divider.between() as f32 + lines_between;
        }
        let line_cross_pos = cross_cursor.round() as i32;
        let (items_start, items_between) = justify_offsets(
            ctx.config.justify_content,
            container_main,
            line.main_size,
            line.item_count_not_gone(),
        );
        let mut main_cursor =
            (axes.main_start(padding) + main_divider.before_first()) as f32 + items_start;
        let mut placed = 0usize;
        for position in 0..line.indices.len() {
            let Some(&index) = line.indices.get(position) else {
                break;
            };
            let (item, state) = ctx.entry(items, states, index)?;
            if !item.visible {
                continue;
            }
            if placed > 0 {
                main_cursor += main_divider.between() as f32 + items_between;
            }
            let margins = item.margins.non_negative();
            main_cursor += axes.main_start(margins) as f32;
            let logical = LogicalBox {
                main_pos: main_cursor.round() as i32,
                cross_pos: line_cross_pos + cross_offset_in_line(ctx, item, state, line),
                main_size: axes.main_of(state.measured),
                cross_size: axes.cross_of(state.measured),
            };
            let rect = axes.to_physical(logical, physical);
            trace!(target: "flexbox::place", "child {index} -> {rect:?}");
            state.rect = rect;
            line.include(rect.outset(margins));
            main_cursor += (logical.main_size + axes.main_end(margins)) as f32;
            placed += 1;
        }
        cross_cursor += line.cross_size as f32;
    }
    Ok(())
}
