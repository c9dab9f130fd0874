use criterion::{Criterion, criterion_group, criterion_main};
use flexbox_engine::{
    FlexContainer, FlexContainerConfig, FlexError, FlexHost, FlexItem, FlexWrap, MeasureMode,
    MeasureSpec, Rect, Size,
};
use std::hint::black_box;

/// Leaf children with varied widths; every third one grows.
struct BenchHost {
    items: Vec<FlexItem>,
    widths: Vec<i32>,
    rects: Vec<Rect>,
}

impl BenchHost {
    fn new(count: usize) -> Self {
        let items = (0..count)
            .map(|index| {
                let item = FlexItem::default().with_order((index % 7) as i32);
                if index % 3 == 0 { item.with_grow(1.0) } else { item }
            })
            .collect();
        let widths = (0..count).map(|index| 40 + (index % 11) as i32 * 9).collect();
        Self {
            items,
            widths,
            rects: vec![Rect::default(); count],
        }
    }
}

impl FlexHost for BenchHost {
    fn child_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> FlexItem {
        self.items.get(index).copied().unwrap_or_default()
    }

    fn measure(
        &mut self,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError> {
        let intrinsic = self.widths.get(index).copied().unwrap_or(0);
        let resolved_width = match width.mode {
            MeasureMode::Exactly => width.size,
            MeasureMode::AtMost => intrinsic.min(width.size),
            MeasureMode::Unspecified => intrinsic,
        };
        let resolved_height = match height.mode {
            MeasureMode::Exactly => height.size,
            MeasureMode::AtMost | MeasureMode::Unspecified => 24,
        };
        Ok(Size::new(resolved_width, resolved_height))
    }

    fn set_child_rect(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.rects.get_mut(index) {
            *slot = rect;
        }
    }
}

fn bench_wrap_and_grow(criterion: &mut Criterion) {
    let config = FlexContainerConfig::default().with_wrap(FlexWrap::Wrap);
    for count in [64_usize, 1024] {
        let mut host = BenchHost::new(count);
        let mut container = FlexContainer::new(config);
        criterion.bench_function(&format!("wrap_and_grow_{count}"), |bencher| {
            bencher.iter(|| {
                let size = container.layout(
                    &mut host,
                    MeasureSpec::exactly(black_box(800)),
                    MeasureSpec::at_most(100_000),
                );
                black_box(size)
            });
        });
    }
}

criterion_group!(flex_benches, bench_wrap_and_grow);
criterion_main!(flex_benches);
