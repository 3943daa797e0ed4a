#![forbid(unsafe_code)]

//! Platform-independent gallery core wrapping `StepRunner<GalleryModel>`.
//!
//! This module contains the logic shared between the wasm-bindgen exports
//! and the native test harness. No JS/WASM types here.

use spritegal_core::{Event, Sample, parse_catalog};
use spritegal_runtime::{
    DomPatch, Effect, GalleryModel, StepRunner, render_markup,
};

use crate::error::MountError;

pub struct GalleryCore {
    inner: StepRunner<GalleryModel>,
}

impl GalleryCore {
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            inner: StepRunner::new(GalleryModel::with_samples(samples)),
        }
    }

    /// Build from a JSON array of `{imagePath, prompt, numFrames}`.
    pub fn from_json(json: &str) -> Result<Self, MountError> {
        Ok(Self::new(parse_catalog(json)?))
    }

    /// Initialize the model. Returns the image paths the host must preload.
    pub fn init(&mut self) -> Vec<String> {
        self.inner.init();
        self.image_requests()
    }

    /// Full markup for the container. Resets the diff baseline.
    pub fn initial_markup(&mut self) -> String {
        self.inner.invalidate();
        render_markup(self.inner.force_render().snapshot)
    }

    /// Apply `events` and return the DOM patches they produce.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = Event>) -> Vec<DomPatch> {
        self.inner.push_events(events);
        self.inner.step();
        self.inner
            .render()
            .and_then(|rendered| rendered.patches)
            .unwrap_or_default()
    }

    /// Image paths requested since the last call.
    pub fn image_requests(&mut self) -> Vec<String> {
        self.inner
            .take_effects()
            .into_iter()
            .map(|effect| match effect {
                Effect::LoadImage(path) => path,
            })
            .collect()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.inner.model().samples().len()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.inner.model().current_page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.inner.model().total_pages()
    }

    #[must_use]
    pub fn frame_of(&self, sample: usize) -> Option<u32> {
        self.inner.model().frame(sample)
    }

    /// Drain accumulated log lines.
    pub fn take_logs(&mut self) -> Vec<String> {
        self.inner.drain_logs()
    }
}
