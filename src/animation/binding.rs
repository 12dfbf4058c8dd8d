use crate::scene::NodeHandle;

/// Node property an animation track writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
}

/// Resolved link from track `track_index` of a clip to a node of the scene
/// the mixer drives.
#[derive(Debug, Clone, Copy)]
pub struct PropertyBinding {
    pub track_index: usize,
    pub node: NodeHandle,
    pub target: TargetPath,
}
