#![forbid(unsafe_code)]

//! Sprite-sheet sample descriptors.

use serde::{Deserialize, Serialize};

/// Errors from validating a [`Sample`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The image path was empty or whitespace.
    EmptyImagePath,
    /// `numFrames` was zero.
    NoFrames,
}

impl core::fmt::Display for SampleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyImagePath => write!(f, "sample image path is empty"),
            Self::NoFrames => write!(f, "sample must have at least one frame"),
        }
    }
}

impl std::error::Error for SampleError {}

/// One gallery entry: a sprite sheet, its prompt and its frame count.
///
/// The sheet holds `num_frames` square frames laid out left-to-right in
/// increasing frame order. Serialized with the camelCase keys used by page
/// scripts (`imagePath`, `prompt`, `numFrames`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSample")]
pub struct Sample {
    image_path: String,
    prompt: String,
    num_frames: u32,
}

impl Sample {
    /// Build a validated sample.
    pub fn new(
        image_path: impl Into<String>,
        prompt: impl Into<String>,
        num_frames: u32,
    ) -> Result<Self, SampleError> {
        let image_path = image_path.into();
        if image_path.trim().is_empty() {
            return Err(SampleError::EmptyImagePath);
        }
        if num_frames == 0 {
            return Err(SampleError::NoFrames);
        }
        Ok(Self {
            image_path,
            prompt: prompt.into(),
            num_frames,
        })
    }

    #[must_use]
    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    /// Highest valid frame index (`num_frames - 1`).
    #[must_use]
    pub fn max_frame(&self) -> u32 {
        self.num_frames - 1
    }

    /// Whether `frame` addresses a frame of this sheet.
    #[must_use]
    pub fn contains_frame(&self, frame: i64) -> bool {
        frame >= 0 && frame < i64::from(self.num_frames)
    }
}

/// Unvalidated deserialization target.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSample {
    image_path: String,
    #[serde(default)]
    prompt: String,
    num_frames: u32,
}

impl TryFrom<RawSample> for Sample {
    type Error = SampleError;

    fn try_from(raw: RawSample) -> Result<Self, Self::Error> {
        Sample::new(raw.image_path, raw.prompt, raw.num_frames)
    }
}
