//! Pass 2: grow or shrink each line's items so the line fills the container's main size.

use log::{debug, trace};

use crate::container::LayoutContext;
use crate::host::measure_child;
use crate::partition::{fixed_main_specs, refresh_cross_extent};
use crate::{FlexError, FlexHost, FlexItem, FlexItemState, FlexLine};

/// One participant in a distribution of free space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct FlexSlot {
    /// Size before distribution.
    pub base: i32,
    /// Share of the free space; zero or less never changes size.
    pub weight: f32,
    pub min: i32,
    pub max: i32,
}

impl FlexSlot {
    pub(crate) const fn unbounded(base: i32, weight: f32) -> Self {
        Self {
            base,
            weight,
            min: 0,
            max: i32::MAX,
        }
    }
}

/// Distribute `delta` pixels (positive to grow, negative to shrink) across `slots` in
/// proportion to their weights.
///
/// Each share is rounded to whole pixels with the rounding error carried from slot to slot:
/// once the carried error passes one pixel either way, the current slot absorbs it. The last
/// weighted slot takes whatever error is left, so the rounded sizes add up to
/// `sum(base) + delta` exactly. A slot pushed past its bounds is frozen at the bound and the
/// remaining space is distributed again among the others.
pub(crate) fn distribute(slots: &[FlexSlot], delta: i32) -> Vec<i32> {
    let mut sizes: Vec<i32> = slots.iter().map(|slot| slot.base).collect();
    let mut frozen: Vec<bool> = slots.iter().map(|slot| slot.weight <= 0.0).collect();
    let target: i64 = slots.iter().map(|slot| i64::from(slot.base)).sum::<i64>() + i64::from(delta);

    for _ in 0..=slots.len() {
        let mut settled = 0i64;
        let mut total_weight = 0.0f64;
        for ((slot, size), is_frozen) in slots.iter().zip(&sizes).zip(&frozen) {
            if *is_frozen {
                settled += i64::from(*size);
            } else {
                settled += i64::from(slot.base);
                total_weight += f64::from(slot.weight);
            }
        }
        if total_weight <= 0.0 {
            break;
        }
        let unit = (target - settled) as f64 / total_weight;
        let absorber = frozen.iter().rposition(|is_frozen| !*is_frozen);
        let mut carry = 0.0f64;
        let mut violated = false;
        for (position, ((slot, size), is_frozen)) in slots
            .iter()
            .zip(sizes.iter_mut())
            .zip(frozen.iter_mut())
            .enumerate()
        {
            if *is_frozen {
                continue;
            }
            let raw = f64::from(slot.base) + unit * f64::from(slot.weight);
            let rounded = if absorber == Some(position) {
                (raw + carry).round()
            } else {
                let mut whole = raw.round();
                carry += raw - whole;
                if carry > 1.0 {
                    whole += 1.0;
                    carry -= 1.0;
                } else if carry < -1.0 {
                    whole -= 1.0;
                    carry += 1.0;
                }
                whole
            };
            let rounded = rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
            let bounded = rounded.clamp(slot.min.max(0), slot.max.max(slot.min.max(0)));
            if bounded != rounded {
                *is_frozen = true;
                violated = true;
            }
            *size = bounded;
        }
        if !violated {
            break;
        }
    }
    sizes
}

/// Resolve every line's main size against the container's target main size.
///
/// Lines shorter than the target grow when they carry grow weight; longer lines shrink when
/// they carry shrink weight. Flexed items are re-measured at their new exact main size and
/// the line's cross size is recomputed from the new measurements.
pub(crate) fn resolve_main_sizes<H: FlexHost + ?Sized>(
    ctx: &LayoutContext,
    host: &mut H,
    items: &[FlexItem],
    lines: &mut [FlexLine],
    states: &mut [FlexItemState],
) -> Result<i32, FlexError> {
    let target = ctx.target_main_size(lines);
    for (line_index, line) in lines.iter_mut().enumerate() {
        let grows = line.main_size < target && line.total_flex_grow > 0.0;
        let shrinks = line.main_size > target && line.total_flex_shrink > 0.0;
        if !grows && !shrinks {
            continue;
        }
        debug!(
            target: "flexbox::flex",
            "line {line_index}: {} from {} to {target} (grow={:.3} shrink={:.3})",
            if grows { "growing" } else { "shrinking" },
            line.main_size,
            line.total_flex_grow,
            line.total_flex_shrink
        );
        flex_line(ctx, host, items, line, states, target, grows)?;
    }
    Ok(target)
}

fn flex_line<H: FlexHost + ?Sized>(
    ctx: &LayoutContext,
    host: &mut H,
    items: &[FlexItem],
    line: &mut FlexLine,
    states: &mut [FlexItemState],
    target: i32,
    grows: bool,
) -> Result<(), FlexError> {
    let axes = ctx.axes;
    let mut visible: Vec<usize> = Vec::with_capacity(line.item_count_not_gone());
    let mut slots: Vec<FlexSlot> = Vec::with_capacity(line.item_count_not_gone());
    for &index in &line.indices {
        let (item, state) = ctx.entry_ref(items, states, index)?;
        if !item.visible {
            continue;
        }
        let (min, max) = item.main_bounds(axes);
        let weight = if grows {
            item.grow_weight()
        } else {
            item.shrink_weight()
        };
        visible.push(index);
        slots.push(FlexSlot {
            base: axes.main_of(state.measured),
            weight,
            min,
            max,
        });
    }

    let sizes = distribute(&slots, target - line.main_size);
    let mut main_size = axes.main_sum(ctx.padding()) + line.divider_length_in_main_size;
    for ((&index, slot), new_main) in visible.iter().zip(&slots).zip(sizes) {
        let (item, state) = ctx.entry(items, states, index)?;
        if new_main != slot.base {
            trace!(
                target: "flexbox::flex",
                "child {index}: main {} -> {new_main}",
                slot.base
            );
            let (width_spec, height_spec) = fixed_main_specs(ctx, item, new_main);
            measure_child(host, index, item, width_spec, height_spec, state)?;
        }
        main_size += axes.main_of(state.measured) + item.main_margins(axes);
    }
    line.main_size = main_size;
    refresh_cross_extent(ctx, items, states, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(sizes: &[i32]) -> i32 {
        sizes.iter().sum()
    }

    #[test]
    /// # Panics
    /// Panics if uneven grow shares leak rounding error.
    fn grow_rounding_carries_to_exact_total() {
        let slots = [
            FlexSlot::unbounded(10, 1.0),
            FlexSlot::unbounded(10, 1.0),
            FlexSlot::unbounded(10, 1.0),
        ];
        let sizes = distribute(&slots, 100);
        assert_eq!(total(&sizes), 130);
        for size in &sizes {
            assert!((43..=44).contains(size), "unexpected share {size}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if weights are not honoured proportionally.
    fn weights_split_proportionally() {
        let slots = [
            FlexSlot::unbounded(0, 1.0),
            FlexSlot::unbounded(0, 3.0),
            FlexSlot::unbounded(50, 0.0),
        ];
        assert_eq!(distribute(&slots, 200), vec![50, 150, 50]);
    }

    #[test]
    /// # Panics
    /// Panics if the leftover is not absorbed by the last weighted slot.
    fn last_weighted_slot_absorbs_leftover() {
        let slots = [
            FlexSlot::unbounded(0, 1.0),
            FlexSlot::unbounded(0, 1.0),
            FlexSlot::unbounded(0, 1.0),
            FlexSlot::unbounded(7, 0.0),
        ];
        let sizes = distribute(&slots, 100);
        assert_eq!(total(&sizes), 107);
        assert_eq!(sizes.get(3).copied(), Some(7));
    }

    #[test]
    /// # Panics
    /// Panics if shrinking does not remove exactly the overflow.
    fn shrink_conserves_target() {
        let slots = [
            FlexSlot::unbounded(250, 1.0),
            FlexSlot::unbounded(250, 1.0),
        ];
        assert_eq!(distribute(&slots, -200), vec![150, 150]);
        let odd = [
            FlexSlot::unbounded(100, 1.0),
            FlexSlot::unbounded(100, 2.0),
            FlexSlot::unbounded(100, 4.0),
        ];
        assert_eq!(total(&distribute(&odd, -101)), 199);
    }

    #[test]
    /// # Panics
    /// Panics if a slot hitting its bound is not frozen and the rest redistributed.
    fn bounds_freeze_and_redistribute() {
        let slots = [
            FlexSlot {
                base: 50,
                weight: 1.0,
                min: 0,
                max: 80,
            },
            FlexSlot::unbounded(50, 1.0),
            FlexSlot::unbounded(50, 1.0),
        ];
        let sizes = distribute(&slots, 150);
        assert_eq!(sizes.first().copied(), Some(80));
        assert_eq!(total(&sizes), 300);

        let shrinking = [
            FlexSlot::unbounded(10, 1.0),
            FlexSlot::unbounded(100, 1.0),
        ];
        let shrunk = distribute(&shrinking, -60);
        assert_eq!(shrunk, vec![0, 50]);
    }

    #[test]
    /// # Panics
    /// Panics if a distribution without weight changes any size.
    fn no_weight_leaves_sizes() {
        let slots = [FlexSlot::unbounded(30, 0.0), FlexSlot::unbounded(40, 0.0)];
        assert_eq!(distribute(&slots, 100), vec![30, 40]);
    }
}
