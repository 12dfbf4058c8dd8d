use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene graph node.
///
/// Hierarchy links are maintained by [`Scene::attach`](crate::scene::Scene::attach);
/// they are read-only from outside the scene module.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    /// Index of the glTF mesh drawn at this node, if any. The render
    /// surface resolves it against its own copy of the document.
    pub mesh: Option<usize>,
    pub visible: bool,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            mesh: None,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}
