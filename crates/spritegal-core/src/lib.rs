#![forbid(unsafe_code)]

//! Core: sample catalog, pagination math, sprite geometry and host events.
//!
//! # Role in spritegal
//! `spritegal-core` is the data layer. It owns the [`Sample`] descriptor, the
//! fixed [`GalleryConfig`], and the arithmetic that the rest of the gallery is
//! built on: splitting samples into pages ([`Pager`]) and positioning one frame
//! of a horizontal sprite sheet inside a frame box ([`SpriteGeometry`]).
//!
//! # How it fits in the system
//! The runtime (`spritegal-runtime`) consumes [`Event`] values and drives the
//! gallery model. The web frontend (`spritegal-web`) translates DOM input into
//! those events. Nothing in this crate touches the DOM, so every rule here is
//! testable natively.

pub mod catalog;
pub mod config;
pub mod event;
pub mod geometry;
pub mod pagination;
pub mod sample;

pub use catalog::{CatalogError, default_catalog, parse_catalog};
pub use config::{Caption, ConfigError, GalleryConfig};
pub use event::{Event, StepDirection};
pub use geometry::{SpriteGeometry, fill_fraction, track_gradient};
pub use pagination::Pager;
pub use sample::{Sample, SampleError};
