#![forbid(unsafe_code)]

//! Fixed gallery configuration.
//!
//! None of these values are exposed to page scripts; the gallery is always
//! built with [`GalleryConfig::default`]. Tests build other shapes through
//! [`GalleryConfig::with_samples_per_page`].

/// Errors from building a [`GalleryConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A page must hold at least one sample.
    ZeroSamplesPerPage,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSamplesPerPage => write!(f, "samples per page must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A heading rendered below the gallery strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// CSS classes of the `<h2>`.
    pub class: String,
    pub text: String,
}

impl Caption {
    fn new(class: &str, text: &str) -> Self {
        Self {
            class: class.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// Layout and styling constants of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    samples_per_page: usize,
    /// Edge length of one square source frame, in sheet pixels.
    pub frame_size: u32,
    /// Slider track color left of the thumb.
    pub track_fill: String,
    /// Slider track color right of the thumb.
    pub track_rest: String,
    pub captions: Vec<Caption>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            samples_per_page: 3,
            frame_size: 512,
            track_fill: "#007bff".to_owned(),
            track_rest: "#e9ecef".to_owned(),
            captions: vec![
                Caption::new(
                    "title is-5",
                    "Explore interactive sliders that control various attributes in both images and videos!",
                ),
                Caption::new(
                    "title is-6",
                    "Please allow a few seconds for video examples to load.",
                ),
            ],
        }
    }
}

impl GalleryConfig {
    /// Default configuration with a different page size.
    pub fn with_samples_per_page(samples_per_page: usize) -> Result<Self, ConfigError> {
        if samples_per_page == 0 {
            return Err(ConfigError::ZeroSamplesPerPage);
        }
        Ok(Self {
            samples_per_page,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn samples_per_page(&self) -> usize {
        self.samples_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let config = GalleryConfig::default();
        assert_eq!(config.samples_per_page(), 3);
        assert_eq!(config.frame_size, 512);
        assert_eq!(config.captions.len(), 2);
    }

    #[test]
    fn zero_page_size_rejected() {
        assert_eq!(
            GalleryConfig::with_samples_per_page(0),
            Err(ConfigError::ZeroSamplesPerPage)
        );
        assert_eq!(
            GalleryConfig::with_samples_per_page(4)
                .unwrap()
                .samples_per_page(),
            4
        );
    }
}
