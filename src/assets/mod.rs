//! Scene asset loading.
//!
//! A [`SceneAsset`] is an opaque model plus its clip set. The glTF loader is
//! behind the default `gltf` feature; procedural assets can be assembled with
//! [`SceneAsset::from_parts`].

#[cfg(feature = "gltf")]
pub mod loaders;
pub mod scene_asset;

#[cfg(feature = "gltf")]
pub use loaders::gltf::GltfLoader;
pub use scene_asset::{AssetId, SceneAsset};
