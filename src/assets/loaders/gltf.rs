//! glTF 2.0 loader (`.gltf` with external or embedded buffers, or `.glb`).
//!
//! Only what the viewer needs is extracted: the node hierarchy of the default
//! scene and the TRS animation channels. Meshes are referenced by index and
//! left to the render surface.

use std::path::Path;

use glam::{Quat, Vec3};
use gltf::animation::util::ReadOutputs;
use gltf::animation::{Interpolation, Property};

use crate::animation::{
    AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta,
};
use crate::assets::SceneAsset;
use crate::errors::{Result, ViewerError};
use crate::scene::{Node, NodeHandle, Scene, Transform};

pub struct GltfLoader;

impl GltfLoader {
    /// Imports `path` and builds a [`SceneAsset`]. Load failures are fatal
    /// for this asset; the caller decides what to do about them.
    pub fn load(path: impl AsRef<Path>) -> Result<SceneAsset> {
        let path = path.as_ref();
        let display = path.display().to_string();
        log::info!("Loading glTF asset '{display}'");

        let to_error = |source| ViewerError::Gltf {
            path: display.clone(),
            source,
        };
        // Images are the render surface's concern; only buffers are decoded.
        let gltf::Gltf { document, blob } = gltf::Gltf::open(path).map_err(to_error)?;
        let buffers = gltf::import_buffers(&document, path.parent(), blob).map_err(to_error)?;

        let gltf_scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| ViewerError::EmptyAsset(display.clone()))?;

        let name = path
            .file_stem()
            .map_or_else(|| "model".to_string(), |s| s.to_string_lossy().into_owned());

        let mut scene = Scene::new();
        let root = scene.add_node(Node::new(name.clone()));
        for gltf_node in gltf_scene.nodes() {
            Self::load_node(&mut scene, &gltf_node, root);
        }

        let buffer_data: Vec<&[u8]> = buffers.iter().map(|b| b.0.as_slice()).collect();
        let clips = Self::load_animations(&document, &buffer_data);

        log::info!(
            "Loaded '{name}': {} nodes, {} clips [{}]",
            scene.node_count(),
            clips.len(),
            clips.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
        );

        Ok(SceneAsset::from_parts(name, scene, root, clips))
    }

    fn node_name(node: &gltf::Node<'_>) -> String {
        node.name()
            .map_or_else(|| format!("Node_{}", node.index()), str::to_string)
    }

    fn load_node(scene: &mut Scene, gltf_node: &gltf::Node<'_>, parent: NodeHandle) {
        let (translation, rotation, scale) = gltf_node.transform().decomposed();
        let transform = Transform::from_trs(
            Vec3::from_array(translation),
            Quat::from_array(rotation),
            Vec3::from_array(scale),
        );

        let mut node = Node::new(Self::node_name(gltf_node)).with_transform(transform);
        node.mesh = gltf_node.mesh().map(|m| m.index());

        let handle = scene.add_to_parent(node, parent);
        for child in gltf_node.children() {
            Self::load_node(scene, &child, handle);
        }
    }

    fn load_animations(document: &gltf::Document, buffers: &[&[u8]]) -> Vec<AnimationClip> {
        document
            .animations()
            .map(|anim| {
                let name = anim
                    .name()
                    .map_or_else(|| format!("Animation_{}", anim.index()), str::to_string);

                let tracks = anim
                    .channels()
                    .filter_map(|channel| Self::load_channel(&name, &channel, buffers))
                    .collect();

                AnimationClip::new(name, tracks)
            })
            .collect()
    }

    fn load_channel(
        clip_name: &str,
        channel: &gltf::animation::Channel<'_>,
        buffers: &[&[u8]],
    ) -> Option<Track> {
        let reader = channel.reader(|buffer| buffers.get(buffer.index()).copied());
        let target = channel.target();
        let node_name = Self::node_name(&target.node());

        let times: Vec<f32> = reader.read_inputs()?.collect();
        let interpolation = match channel.sampler().interpolation() {
            Interpolation::Linear => InterpolationMode::Linear,
            Interpolation::Step => InterpolationMode::Step,
            Interpolation::CubicSpline => InterpolationMode::CubicSpline,
        };

        let (target_path, data) = match (target.property(), reader.read_outputs()?) {
            (Property::Translation, ReadOutputs::Translations(iter)) => (
                TargetPath::Translation,
                TrackData::Vector3(KeyframeTrack::new(times, iter.map(Vec3::from_array).collect(), interpolation)),
            ),
            (Property::Scale, ReadOutputs::Scales(iter)) => (
                TargetPath::Scale,
                TrackData::Vector3(KeyframeTrack::new(times, iter.map(Vec3::from_array).collect(), interpolation)),
            ),
            (Property::Rotation, ReadOutputs::Rotations(iter)) => (
                TargetPath::Rotation,
                TrackData::Quaternion(KeyframeTrack::new(
                    times,
                    iter.into_f32().map(Quat::from_array).collect(),
                    interpolation,
                )),
            ),
            (property, _) => {
                log::warn!("Clip '{clip_name}': unsupported channel {property:?} on '{node_name}', skipped");
                return None;
            }
        };

        Some(Track {
            meta: TrackMeta {
                node_name,
                target: target_path,
            },
            data,
        })
    }
}
