//! Hand-built view trees: nested measurement, settling and tree construction errors.

use anyhow::{Error, anyhow};
use flexbox_engine::{
    AlignItems, FlexContainerConfig, FlexDirection, FlexError, FlexItem, FlexLine, LayoutDirection,
    MeasureSpec, Rect, Size,
};
use flexbox_headless::ViewTree;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
/// # Panics
/// Panics if a grown nested container is not re-laid out at its final size.
fn nested_container_settles_at_final_size() -> Result<(), Error> {
    init();
    let mut tree = ViewTree::new();
    let leaf = tree.push_leaf(
        Some("x".to_owned()),
        FlexItem::default().with_grow(1.0),
        Size::new(20, 10),
        None,
    );
    let inner = tree.push_container(
        Some("inner".to_owned()),
        FlexItem::default().with_grow(1.0),
        FlexContainerConfig::default(),
        vec![leaf],
    )?;
    let root = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default().with_align_items(AlignItems::FlexStart),
        vec![inner],
    )?;
    tree.set_root(root);

    let size = tree.layout(MeasureSpec::exactly(300), MeasureSpec::exactly(50))?;
    assert_eq!(size, Size::new(300, 50));
    assert_eq!(tree.absolute_rect(inner), Some(Rect::new(0, 0, 300, 10)));
    assert_eq!(tree.absolute_rect(leaf), Some(Rect::new(0, 0, 300, 10)));
    let inner_main = tree
        .flex_lines(inner)
        .and_then(|lines| lines.first().map(FlexLine::main_size));
    assert_eq!(inner_main, Some(300));
    Ok(())
}

#[test]
/// # Panics
/// Panics if absolute rectangles do not accumulate parent offsets in right-to-left rows.
fn rtl_nested_offsets_accumulate() -> Result<(), Error> {
    init();
    let mut tree = ViewTree::new();
    let first = tree.push_leaf(Some("first".to_owned()), FlexItem::fixed(30, 10), Size::new(30, 10), None);
    let second = tree.push_leaf(Some("second".to_owned()), FlexItem::fixed(30, 10), Size::new(30, 10), None);
    let column = tree.push_container(
        Some("column".to_owned()),
        FlexItem::fixed(40, 40),
        FlexContainerConfig::default().with_direction(FlexDirection::Column),
        vec![first, second],
    )?;
    let root = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default().with_layout_direction(LayoutDirection::Rtl),
        vec![column],
    )?;
    tree.set_root(root);
    tree.layout(MeasureSpec::exactly(200), MeasureSpec::exactly(40))?;

    assert_eq!(tree.absolute_rect(column), Some(Rect::new(160, 0, 200, 40)));
    // Stretched across the column's width of 40.
    assert_eq!(tree.absolute_rect(first), Some(Rect::new(160, 0, 200, 10)));
    assert_eq!(tree.absolute_rect(second), Some(Rect::new(160, 10, 200, 20)));
    Ok(())
}

#[test]
/// # Panics
/// Panics if invalid tree construction or a missing root is accepted.
fn construction_errors_are_reported() -> Result<(), Error> {
    init();
    let mut tree = ViewTree::new();
    let leaf = tree.push_leaf(None, FlexItem::default(), Size::new(1, 1), None);
    let duplicate = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default(),
        vec![leaf, leaf],
    );
    assert!(matches!(duplicate, Err(FlexError::Host(_))));

    let missing = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default(),
        vec![leaf, flexbox_headless::NodeId(42)],
    );
    assert!(matches!(missing, Err(FlexError::ChildOutOfRange { index: 42, .. })));

    let unrooted = tree.layout(MeasureSpec::exactly(10), MeasureSpec::exactly(10));
    assert!(matches!(unrooted, Err(FlexError::Host(_))));

    let parent = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default(),
        vec![leaf],
    )?;
    assert!(tree.rect(parent).is_some());
    let stolen = tree.push_container(
        None,
        FlexItem::default(),
        FlexContainerConfig::default(),
        vec![leaf],
    );
    assert!(stolen.is_err());
    assert!(tree.container_mut(leaf).is_none());
    assert!(tree.container_mut(parent).ok_or_else(|| anyhow!("parent is a container"))?.needs_layout());
    Ok(())
}
