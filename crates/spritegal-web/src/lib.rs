#![forbid(unsafe_code)]

//! Browser frontend for the sprite-sheet slider gallery.
//!
//! [`SpriteGallery`] is a `wasm-bindgen`-exported struct that mounts a
//! `spritegal_runtime::GalleryModel` into a page element, forwards delegated
//! DOM input to it, and applies the resulting patches in place. The page can
//! also call [`mount_default_gallery`] to mount the built-in catalog into
//! `#interactiveSliderGallery`.

pub mod dom_input;
pub mod error;

pub use error::MountError;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{DEFAULT_CONTAINER_ID, SpriteGallery, mount_default_gallery};

#[cfg(all(target_arch = "wasm32", feature = "console-log"))]
mod console_log;

// Gallery core is used by the wasm module and by native tests.
#[cfg(any(target_arch = "wasm32", test))]
mod gallery_core;
