#![forbid(unsafe_code)]

//! Elm-style runtime for the spritegal gallery.
//!
//! # Role in spritegal
//! `spritegal-runtime` owns widget state and turns host events into DOM work:
//!
//! - [`GalleryModel`]: explicit state (page, per-sample frames, measured box
//!   heights, image readiness) and the message handlers.
//! - [`SurfaceSnapshot`]: the view, a pure function of the model.
//! - [`diff`] / [`DomPatch`]: minimal DOM mutations between two snapshots.
//! - [`render_markup`]: the first full paint.
//! - [`StepRunner`]: event queue + command execution + render bookkeeping,
//!   driven by the web host.
//!
//! Nothing here depends on `web-sys`, so the full behavior is tested natively.

pub mod gallery;
pub mod image_cache;
pub mod markup;
pub mod program;
pub mod step_runner;
pub mod surface;

pub use gallery::{GalleryModel, GalleryMsg};
pub use image_cache::{ImageCache, LoadState};
pub use markup::render_markup;
pub use program::{Cmd, Model};
pub use step_runner::{Effect, RenderedSurface, StepResult, StepRunner};
pub use surface::{DomPatch, NavButton, SampleSurface, SpriteStyle, SurfaceSnapshot, diff, ids};
