//! JSON description of a view tree and the root constraints to lay it out under.

use anyhow::{Context as _, Result, bail};
use flexbox_engine::{FlexContainerConfig, FlexItem, MeasureSpec, Size};
use serde::{Deserialize, Serialize};

use crate::tree::{NodeId, ViewTree};

/// A view tree plus the constraints its root is measured with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default)]
    pub width: MeasureSpec,
    #[serde(default)]
    pub height: MeasureSpec,
    pub root: NodeDescription,
}

/// One node: a leaf when `container` is absent, otherwise a flex container over `children`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeDescription {
    pub name: Option<String>,
    /// Flex parameters inside the parent container.
    pub item: FlexItem,
    pub intrinsic: Size,
    pub baseline: Option<i32>,
    pub container: Option<FlexContainerConfig>,
    pub children: Vec<NodeDescription>,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns an error when the text is not a valid scene description.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing scene description")
    }

    /// Build the view tree this scene describes.
    ///
    /// # Errors
    /// Returns an error when a leaf declares children.
    pub fn build(&self) -> Result<ViewTree> {
        let mut tree = ViewTree::new();
        let root = push_node(&mut tree, &self.root)?;
        tree.set_root(root);
        Ok(tree)
    }

    /// Build the tree and lay it out under the scene's root constraints.
    ///
    /// # Errors
    /// Returns an error when the tree cannot be built or a layout pass fails.
    pub fn layout(&self) -> Result<(ViewTree, Size)> {
        let mut tree = self.build()?;
        let size = tree
            .layout(self.width, self.height)
            .context("laying out scene")?;
        Ok((tree, size))
    }
}

fn push_node(tree: &mut ViewTree, node: &NodeDescription) -> Result<NodeId> {
    let Some(config) = node.container else {
        if !node.children.is_empty() {
            bail!(
                "leaf {} declares {} children but no container",
                node.name.as_deref().unwrap_or("<unnamed>"),
                node.children.len()
            );
        }
        return Ok(tree.push_leaf(node.name.clone(), node.item, node.intrinsic, node.baseline));
    };
    let children = node
        .children
        .iter()
        .map(|child| push_node(tree, child))
        .collect::<Result<Vec<_>>>()?;
    let id = tree.push_container(node.name.clone(), node.item, config, children)?;
    Ok(id)
}
