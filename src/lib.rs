#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod errors;
pub mod scene;
pub mod utils;
pub mod viewer;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, Binder};
pub use app::{HeadlessSurface, PointerEvent, PointerSurface, RenderSurface};
#[cfg(feature = "winit")]
pub use app::winit::{App, AppHandler};
#[cfg(feature = "gltf")]
pub use assets::GltfLoader;
pub use assets::SceneAsset;
pub use errors::{Result, ViewerError};
pub use scene::{Camera, Node, Orientation, Scene};
pub use viewer::{AnimationController, ControlPanel, DragRotateInteractor, PlaybackState, Viewer, ViewerConfig};
