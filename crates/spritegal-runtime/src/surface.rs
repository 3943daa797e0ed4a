#![forbid(unsafe_code)]

//! Rendered gallery surface and its incremental patches.
//!
//! [`SurfaceSnapshot`] is the full visual state of the gallery as plain data.
//! The first frame is painted from it as markup (see [`crate::markup`]);
//! later frames are applied as the [`DomPatch`] list returned by [`diff`],
//! so that a slider being dragged is never torn down and rebuilt.

use spritegal_core::{Caption, SpriteGeometry, StepDirection};

/// Element ids of the rendered surface.
pub mod ids {
    use spritegal_core::StepDirection;

    pub const PREV_PAGE: &str = "prevPage";
    pub const NEXT_PAGE: &str = "nextPage";
    pub const WRAPPER: &str = "galleryWrapper";
    pub const PAGINATION: &str = "galleryPagination";

    #[must_use]
    pub fn frame(sample: usize) -> String {
        format!("frame_{sample}")
    }

    #[must_use]
    pub fn slider(sample: usize) -> String {
        format!("slider_{sample}")
    }

    #[must_use]
    pub fn step(direction: StepDirection, sample: usize) -> String {
        format!("{}_{sample}", direction.as_str())
    }

    #[must_use]
    pub fn dot(page: usize) -> String {
        format!("dot_{page}")
    }
}

/// Page navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

impl NavButton {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Prev => ids::PREV_PAGE,
            Self::Next => ids::NEXT_PAGE,
        }
    }
}

/// Background properties that show one sprite frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteStyle {
    /// `background-image` value.
    pub image: String,
    /// `background-position` value.
    pub position: String,
    /// `background-size` value.
    pub size: String,
}

impl SpriteStyle {
    pub const REPEAT: &'static str = "no-repeat";

    #[must_use]
    pub fn new(image_path: &str, geometry: &SpriteGeometry) -> Self {
        Self {
            image: css_url(image_path),
            position: geometry.position_css(),
            size: geometry.size_css(),
        }
    }

    /// `(property, value)` pairs in application order.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 4] {
        [
            ("background-image", self.image.as_str()),
            ("background-position", self.position.as_str()),
            ("background-size", self.size.as_str()),
            ("background-repeat", Self::REPEAT),
        ]
    }

    /// Inline `style` attribute text.
    #[must_use]
    pub fn inline_css(&self) -> String {
        self.properties()
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn css_url(path: &str) -> String {
    let quoted = path.replace('\\', "\\\\").replace('\'', "\\'");
    format!("url('{quoted}')")
}

/// Visual state of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSurface {
    pub prompt: String,
    pub max_frame: u32,
    pub frame: u32,
    pub decrement_disabled: bool,
    pub increment_disabled: bool,
    /// Slider track `background`.
    pub track_background: String,
    /// `None` until the sheet is ready and the frame box has been measured.
    pub sprite: Option<SpriteStyle>,
}

/// Full visual state of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub current_page: usize,
    pub total_pages: usize,
    pub samples_per_page: usize,
    pub wrapper_transform: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub captions: Vec<Caption>,
    pub samples: Vec<SampleSurface>,
}

impl SurfaceSnapshot {
    /// Whether pagination dot `page` is highlighted.
    #[must_use]
    pub fn dot_active(&self, page: usize) -> bool {
        page < self.total_pages && page == self.current_page
    }
}

/// One DOM mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomPatch {
    WrapperTransform(String),
    NavDisabled {
        button: NavButton,
        disabled: bool,
    },
    DotActive {
        page: usize,
        active: bool,
    },
    StepDisabled {
        sample: usize,
        direction: StepDirection,
        disabled: bool,
    },
    TrackBackground {
        sample: usize,
        css: String,
    },
    SliderValue {
        sample: usize,
        value: u32,
    },
    Sprite {
        sample: usize,
        style: SpriteStyle,
    },
}

impl DomPatch {
    /// Id of the element this patch applies to.
    #[must_use]
    pub fn target_id(&self) -> String {
        match self {
            Self::WrapperTransform(_) => ids::WRAPPER.to_owned(),
            Self::NavDisabled { button, .. } => button.id().to_owned(),
            Self::DotActive { page, .. } => ids::dot(*page),
            Self::StepDisabled {
                sample, direction, ..
            } => ids::step(*direction, *sample),
            Self::TrackBackground { sample, .. } | Self::SliderValue { sample, .. } => {
                ids::slider(*sample)
            }
            Self::Sprite { sample, .. } => ids::frame(*sample),
        }
    }
}

/// Patches that turn `prev` into `next`.
///
/// Both snapshots must come from the same model, so they describe the same
/// pages and samples. Per sample the order is: step buttons, track, slider
/// value, sprite.
#[must_use]
pub fn diff(prev: &SurfaceSnapshot, next: &SurfaceSnapshot) -> Vec<DomPatch> {
    let mut patches = Vec::new();

    if prev.wrapper_transform != next.wrapper_transform {
        patches.push(DomPatch::WrapperTransform(next.wrapper_transform.clone()));
    }
    if prev.prev_disabled != next.prev_disabled {
        patches.push(DomPatch::NavDisabled {
            button: NavButton::Prev,
            disabled: next.prev_disabled,
        });
    }
    if prev.next_disabled != next.next_disabled {
        patches.push(DomPatch::NavDisabled {
            button: NavButton::Next,
            disabled: next.next_disabled,
        });
    }
    for page in 0..next.total_pages {
        let active = next.dot_active(page);
        if prev.dot_active(page) != active {
            patches.push(DomPatch::DotActive { page, active });
        }
    }

    for (sample, (old, new)) in prev.samples.iter().zip(&next.samples).enumerate() {
        if old.decrement_disabled != new.decrement_disabled {
            patches.push(DomPatch::StepDisabled {
                sample,
                direction: StepDirection::Decrement,
                disabled: new.decrement_disabled,
            });
        }
        if old.increment_disabled != new.increment_disabled {
            patches.push(DomPatch::StepDisabled {
                sample,
                direction: StepDirection::Increment,
                disabled: new.increment_disabled,
            });
        }
        if old.track_background != new.track_background {
            patches.push(DomPatch::TrackBackground {
                sample,
                css: new.track_background.clone(),
            });
        }
        if old.frame != new.frame {
            patches.push(DomPatch::SliderValue {
                sample,
                value: new.frame,
            });
        }
        if let Some(style) = &new.sprite
            && old.sprite.as_ref() != Some(style)
        {
            patches.push(DomPatch::Sprite {
                sample,
                style: style.clone(),
            });
        }
    }

    patches
}
