//! Arena of leaf views and nested flex containers, laid out through [`FlexHost`].

use std::mem;

use flexbox_engine::{
    FlexContainer, FlexContainerConfig, FlexError, FlexHost, FlexItem, FlexLine, MeasureMode,
    MeasureSpec, Rect, Size,
};
use log::{debug, trace};

/// Index of a node inside a [`ViewTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub usize);

#[derive(Debug)]
enum NodeKind {
    Leaf {
        intrinsic: Size,
        baseline: Option<i32>,
    },
    Container {
        engine: FlexContainer,
        children: Vec<NodeId>,
        /// Constraints of the most recent completed pass.
        last_specs: Option<(MeasureSpec, MeasureSpec)>,
    },
}

#[derive(Debug)]
struct Node {
    name: Option<String>,
    /// Flex parameters this node carries inside its parent.
    item: FlexItem,
    parent: Option<NodeId>,
    /// Rectangle relative to the parent's top-left corner.
    rect: Rect,
    kind: NodeKind,
}

/// A headless view hierarchy: leaves report an intrinsic size, containers run the engine.
#[derive(Debug, Default)]
pub struct ViewTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl ViewTree {
    /// An empty tree without a root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf that wants `intrinsic` and reports `baseline` from its top edge.
    pub fn push_leaf(
        &mut self,
        name: Option<String>,
        item: FlexItem,
        intrinsic: Size,
        baseline: Option<i32>,
    ) -> NodeId {
        self.push(name, item, NodeKind::Leaf { intrinsic, baseline })
    }

    /// Add a flex container adopting `children`, which must exist and have no parent yet.
    ///
    /// # Errors
    /// Returns [`FlexError::ChildOutOfRange`] for an unknown child, or [`FlexError::Host`] when a
    /// child already belongs to another container.
    pub fn push_container(
        &mut self,
        name: Option<String>,
        item: FlexItem,
        config: FlexContainerConfig,
        children: Vec<NodeId>,
    ) -> Result<NodeId, FlexError> {
        let id = NodeId(self.nodes.len());
        for (position, &child) in children.iter().enumerate() {
            let repeated = children
                .get(..position)
                .is_some_and(|earlier| earlier.contains(&child));
            let adopted = self.node(child)?.parent.is_some() || repeated;
            if adopted {
                return Err(FlexError::Host(format!("node {} already has a parent", child.0)));
            }
        }
        for &child in &children {
            self.node_mut(child)?.parent = Some(id);
        }
        Ok(self.push(
            name,
            item,
            NodeKind::Container {
                engine: FlexContainer::new(config),
                children,
                last_specs: None,
            },
        ))
    }

    fn push(&mut self, name: Option<String>, item: FlexItem, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            item,
            parent: None,
            rect: Rect::default(),
            kind,
        });
        id
    }

    /// Choose the node laid out by [`ViewTree::layout`].
    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    /// The node chosen as root, if any.
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node carrying `name`.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name.as_deref() == Some(name))
            .map(NodeId)
    }

    /// Rectangle of `id` relative to its parent, as committed by the last pass.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id.0).map(|node| node.rect)
    }

    /// Rectangle of `id` relative to the root's top-left corner.
    pub fn absolute_rect(&self, id: NodeId) -> Option<Rect> {
        let node = self.nodes.get(id.0)?;
        let mut rect = node.rect;
        let mut parent = node.parent;
        while let Some(ancestor) = parent {
            let ancestor_node = self.nodes.get(ancestor.0)?;
            rect = rect.offset(ancestor_node.rect.left, ancestor_node.rect.top);
            parent = ancestor_node.parent;
        }
        Some(rect)
    }

    /// Lines of the container `id` from its last pass; `None` for leaves.
    pub fn flex_lines(&self, id: NodeId) -> Option<&[FlexLine]> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Container { engine, .. } => Some(engine.flex_lines()),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Mutable access to a container's engine, for reconfiguring it between passes.
    pub fn container_mut(&mut self, id: NodeId) -> Option<&mut FlexContainer> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Container { engine, .. } => Some(engine),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Lay out the whole tree under the given root constraints and return the root's size.
    ///
    /// Nested containers are laid out recursively while their parent measures them, then
    /// laid out once more at their final size if that differs from the last constraints they
    /// saw.
    ///
    /// # Errors
    /// Returns [`FlexError::Host`] when no root is set, or the first error of any pass.
    pub fn layout(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, FlexError> {
        let root = self
            .root
            .ok_or_else(|| FlexError::Host("view tree has no root".to_owned()))?;
        let size = self.measure_node(root, width, height)?;
        self.node_mut(root)?.rect = Rect::new(0, 0, size.width, size.height);
        self.settle_children(root)?;
        debug!(
            target: "headless::tree",
            "laid out {} nodes, root {}x{}",
            self.nodes.len(),
            size.width,
            size.height
        );
        Ok(size)
    }

    fn node(&self, id: NodeId) -> Result<&Node, FlexError> {
        let count = self.nodes.len();
        self.nodes.get(id.0).ok_or(FlexError::ChildOutOfRange { index: id.0, count })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, FlexError> {
        let count = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(FlexError::ChildOutOfRange { index: id.0, count })
    }

    fn measure_node(
        &mut self,
        id: NodeId,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError> {
        let intrinsic = match &self.node(id)?.kind {
            NodeKind::Leaf { intrinsic, .. } => *intrinsic,
            NodeKind::Container { .. } => return self.run_container(id, width, height),
        };
        let size = Size::new(
            constrain(width, intrinsic.width),
            constrain(height, intrinsic.height),
        );
        trace!(target: "headless::tree", "leaf {} measured {size:?}", id.0);
        Ok(size)
    }

    /// Run the engine of container `id` with its children hosted by this tree.
    fn run_container(
        &mut self,
        id: NodeId,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError> {
        let (mut engine, children) = match &mut self.node_mut(id)?.kind {
            NodeKind::Container {
                engine, children, ..
            } => (mem::take(engine), children.clone()),
            NodeKind::Leaf { .. } => return Err(FlexError::Host(format!("node {} is a leaf", id.0))),
        };
        let result = engine.layout(
            &mut ChildHost {
                tree: self,
                children: &children,
            },
            width,
            height,
        );
        if let NodeKind::Container {
            engine: slot,
            last_specs,
            ..
        } = &mut self.node_mut(id)?.kind
        {
            *slot = engine;
            if result.is_ok() {
                *last_specs = Some((width, height));
            }
        }
        Ok(result?.physical())
    }

    /// Re-run nested containers whose final rectangle differs from their last constraints.
    fn settle_children(&mut self, id: NodeId) -> Result<(), FlexError> {
        let children = match &self.node(id)?.kind {
            NodeKind::Container { children, .. } => children.clone(),
            NodeKind::Leaf { .. } => return Ok(()),
        };
        for child in children {
            let node = self.node(child)?;
            if let NodeKind::Container { last_specs, .. } = &node.kind {
                let exact = (
                    MeasureSpec::exactly(node.rect.width()),
                    MeasureSpec::exactly(node.rect.height()),
                );
                if *last_specs != Some(exact) {
                    trace!(target: "headless::tree", "settling container {} at {exact:?}", child.0);
                    self.run_container(child, exact.0, exact.1)?;
                }
                self.settle_children(child)?;
            }
        }
        Ok(())
    }
}

const fn constrain(spec: MeasureSpec, intrinsic: i32) -> i32 {
    match spec.mode {
        MeasureMode::Exactly => spec.size,
        MeasureMode::AtMost => {
            if intrinsic < spec.size {
                intrinsic
            } else {
                spec.size
            }
        }
        MeasureMode::Unspecified => intrinsic,
    }
}

/// The children of one container, seen through the engine's host capability.
struct ChildHost<'tree> {
    tree: &'tree mut ViewTree,
    children: &'tree [NodeId],
}

impl ChildHost<'_> {
    fn child(&self, index: usize) -> Result<NodeId, FlexError> {
        self.children
            .get(index)
            .copied()
            .ok_or(FlexError::ChildOutOfRange {
                index,
                count: self.children.len(),
            })
    }
}

impl FlexHost for ChildHost<'_> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn item(&self, index: usize) -> FlexItem {
        self.child(index)
            .and_then(|id| self.tree.node(id))
            .map_or_else(|_| FlexItem::default(), |node| node.item)
    }

    fn measure(
        &mut self,
        index: usize,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, FlexError> {
        let id = self.child(index)?;
        self.tree.measure_node(id, width, height)
    }

    fn baseline(&self, index: usize) -> Option<i32> {
        let node = self.tree.node(self.child(index).ok()?).ok()?;
        match node.kind {
            NodeKind::Leaf { baseline, .. } => baseline,
            NodeKind::Container { .. } => None,
        }
    }

    fn set_child_rect(&mut self, index: usize, rect: Rect) {
        if let Ok(id) = self.child(index)
            && let Ok(node) = self.tree.node_mut(id)
        {
            node.rect = rect;
        }
    }
}
