use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Node storage with parent/child links and world matrix propagation.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the top level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node as the last child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.add_node(child);
        self.attach(handle, parent);
        handle
    }

    /// Moves `child` under `parent`, detaching it from wherever it was.
    /// Ignored when either handle is stale or the move would create a cycle.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("attach: refusing to create a cycle");
            return;
        }

        self.detach(child);
        self.root_nodes.retain(|&h| h != child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    fn detach(&mut self, child: NodeHandle) {
        if let Some(old_parent) = self.nodes[child].parent.take() {
            if let Some(p) = self.nodes.get_mut(old_parent) {
                p.children.retain(|&h| h != child);
            }
            self.root_nodes.push(child);
        }
    }

    fn is_ancestor(&self, ancestor: NodeHandle, mut node: NodeHandle) -> bool {
        while let Some(parent) = self.nodes.get(node).and_then(Node::parent) {
            if parent == ancestor {
                return true;
            }
            node = parent;
        }
        false
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first search by name below (and including) `start`.
    #[must_use]
    pub fn find_node_by_name(&self, start: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut stack = vec![start];
        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle)?;
            if node.name == name {
                return Some(handle);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Recomputes every node's world matrix from the roots down.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A)> = self
            .root_nodes
            .iter()
            .map(|&h| (h, Affine3A::IDENTITY))
            .collect();

        while let Some((handle, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };
            let world = parent_world * node.transform.local_matrix();
            node.transform.world_matrix = world;
            stack.extend(node.children.iter().map(|&c| (c, world)));
        }
    }
}
