//! Error Types
//!
//! The viewer has very few failure points: loading the model, reading the
//! optional configuration file, and bringing up the window. Everything that
//! runs inside the frame loop or a pointer callback is infallible.
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ViewerError>`.

use thiserror::Error;

/// The error type for the `turntable` crate.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The model could not be imported. Fatal for that asset: there is no
    /// fallback model and no retry.
    #[cfg(feature = "gltf")]
    #[error("glTF error while loading '{path}': {source}")]
    Gltf {
        /// Path that was being loaded
        path: String,
        /// Underlying importer error
        #[source]
        source: gltf::Error,
    },

    /// The document loaded but contains no scene to display.
    #[error("Asset '{0}' contains no scene")]
    EmptyAsset(String),

    // ========================================================================
    // I/O & Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON could not be parsed.
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Windowing Errors
    // ========================================================================
    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[cfg(feature = "winit")]
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
