#![forbid(unsafe_code)]

//! The gallery widget model.
//!
//! [`GalleryModel`] holds every piece of widget state explicitly: the current
//! page, each sample's frame index, each frame box's measured height and the
//! load state of every sprite sheet. Navigation and slider input arrive as
//! [`GalleryMsg`]s; out-of-range requests are ignored.
//!
//! Step buttons never write a frame directly. They compute the candidate frame
//! and re-dispatch [`GalleryMsg::SetFrame`], the same message a dragged slider
//! produces, so there is one path that updates a frame.

use spritegal_core::{
    Event, GalleryConfig, Pager, Sample, SpriteGeometry, StepDirection, fill_fraction,
    track_gradient,
};
use tracing::{debug, trace, warn};

use crate::image_cache::ImageCache;
use crate::program::{Cmd, Model};
use crate::surface::{SampleSurface, SpriteStyle, SurfaceSnapshot};

/// Gallery messages.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryMsg {
    GoToPage(i64),
    PrevPage,
    NextPage,
    SetFrame { sample: usize, frame: i64 },
    Step {
        sample: usize,
        direction: StepDirection,
    },
    FrameMeasured { sample: usize, height: f64 },
    ImageLoaded(String),
    ImageFailed(String),
}

impl From<Event> for GalleryMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::PrevPage => Self::PrevPage,
            Event::NextPage => Self::NextPage,
            Event::GoToPage(page) => Self::GoToPage(page),
            Event::SliderInput { sample, value } => Self::SetFrame {
                sample,
                frame: value,
            },
            Event::Step { sample, direction } => Self::Step { sample, direction },
            Event::FrameMeasured { sample, height } => Self::FrameMeasured { sample, height },
            Event::ImageLoaded { path } => Self::ImageLoaded(path),
            Event::ImageFailed { path } => Self::ImageFailed(path),
        }
    }
}

/// Paginated sprite-sheet slider gallery.
#[derive(Debug, Clone)]
pub struct GalleryModel {
    samples: Vec<Sample>,
    config: GalleryConfig,
    pager: Pager,
    current_page: usize,
    frames: Vec<u32>,
    frame_heights: Vec<Option<f64>>,
    images: ImageCache,
}

impl GalleryModel {
    #[must_use]
    pub fn new(samples: Vec<Sample>, config: GalleryConfig) -> Self {
        let pager = Pager::new(samples.len(), config.samples_per_page());
        let count = samples.len();
        Self {
            samples,
            config,
            pager,
            current_page: 0,
            frames: vec![0; count],
            frame_heights: vec![None; count],
            images: ImageCache::new(),
        }
    }

    /// Gallery with the fixed default configuration.
    #[must_use]
    pub fn with_samples(samples: Vec<Sample>) -> Self {
        Self::new(samples, GalleryConfig::default())
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    /// Frame index of `sample`, or `None` for an unknown sample.
    #[must_use]
    pub fn frame(&self, sample: usize) -> Option<u32> {
        self.frames.get(sample).copied()
    }

    #[must_use]
    pub fn frame_height(&self, sample: usize) -> Option<f64> {
        self.frame_heights.get(sample).copied().flatten()
    }

    fn go_to_page(&mut self, page: i64) {
        let Some(page) = usize::try_from(page).ok().filter(|&p| self.pager.contains(p)) else {
            trace!(page, total = self.pager.total_pages(), "page request out of range");
            return;
        };
        if page != self.current_page {
            debug!(from = self.current_page, to = page, "page changed");
        }
        self.current_page = page;
    }

    fn set_frame(&mut self, sample: usize, frame: i64) {
        let Some(descriptor) = self.samples.get(sample) else {
            trace!(sample, "frame request for unknown sample");
            return;
        };
        if !descriptor.contains_frame(frame) {
            trace!(sample, frame, "frame request out of range");
            return;
        }
        let Ok(frame) = u32::try_from(frame) else {
            return;
        };
        debug!(sample, frame, "frame changed");
        self.frames[sample] = frame;
    }

    fn sample_surface(&self, index: usize, sample: &Sample) -> SampleSurface {
        let frame = self.frames[index];
        let num_frames = sample.num_frames();
        let fraction = fill_fraction(frame, num_frames);
        let sprite = self
            .frame_height(index)
            .filter(|_| self.images.is_ready(sample.image_path()))
            .map(|height| {
                let geometry =
                    SpriteGeometry::compute(frame, num_frames, self.config.frame_size, height);
                SpriteStyle::new(sample.image_path(), &geometry)
            });
        SampleSurface {
            prompt: sample.prompt().to_owned(),
            max_frame: sample.max_frame(),
            frame,
            decrement_disabled: frame == 0,
            increment_disabled: frame == sample.max_frame(),
            track_background: track_gradient(
                fraction,
                &self.config.track_fill,
                &self.config.track_rest,
            ),
            sprite,
        }
    }
}

impl Model for GalleryModel {
    type Message = GalleryMsg;

    /// Request every distinct sprite sheet once, in sample order.
    fn init(&mut self) -> Cmd<GalleryMsg> {
        let mut cmds = Vec::new();
        for sample in &self.samples {
            if self.images.request(sample.image_path()) {
                cmds.push(Cmd::load_image(sample.image_path()));
            }
        }
        Cmd::batch(cmds)
    }

    fn update(&mut self, msg: GalleryMsg) -> Cmd<GalleryMsg> {
        match msg {
            GalleryMsg::GoToPage(page) => {
                self.go_to_page(page);
                Cmd::none()
            }
            GalleryMsg::PrevPage => {
                Cmd::msg(GalleryMsg::GoToPage(self.current_page as i64 - 1))
            }
            GalleryMsg::NextPage => {
                Cmd::msg(GalleryMsg::GoToPage(self.current_page as i64 + 1))
            }
            GalleryMsg::SetFrame { sample, frame } => {
                self.set_frame(sample, frame);
                Cmd::none()
            }
            GalleryMsg::Step { sample, direction } => {
                let (Some(current), Some(descriptor)) =
                    (self.frame(sample), self.samples.get(sample))
                else {
                    return Cmd::none();
                };
                let candidate = i64::from(current) + direction.delta();
                if descriptor.contains_frame(candidate) {
                    Cmd::msg(GalleryMsg::SetFrame {
                        sample,
                        frame: candidate,
                    })
                } else {
                    Cmd::none()
                }
            }
            GalleryMsg::FrameMeasured { sample, height } => {
                // A collapsed box (hidden container) counts as unmeasured.
                if sample < self.frame_heights.len() && height.is_finite() {
                    self.frame_heights[sample] = (height > 0.0).then_some(height);
                }
                Cmd::none()
            }
            GalleryMsg::ImageLoaded(path) => {
                debug!(%path, "sprite sheet ready");
                self.images.mark_ready(&path);
                Cmd::none()
            }
            GalleryMsg::ImageFailed(path) => {
                warn!(%path, "sprite sheet failed to load");
                self.images.mark_failed(&path);
                Cmd::log(format!("image failed: {path}"))
            }
        }
    }

    fn view(&self) -> SurfaceSnapshot {
        let total_pages = self.pager.total_pages();
        SurfaceSnapshot {
            current_page: self.current_page,
            total_pages,
            samples_per_page: self.config.samples_per_page(),
            wrapper_transform: Pager::wrapper_transform(self.current_page),
            prev_disabled: self.pager.is_first(self.current_page),
            next_disabled: self.pager.is_last(self.current_page),
            captions: self.config.captions.clone(),
            samples: self
                .samples
                .iter()
                .enumerate()
                .map(|(i, s)| self.sample_surface(i, s))
                .collect(),
        }
    }
}
