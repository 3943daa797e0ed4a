#![forbid(unsafe_code)]

//! Sample catalogs: JSON parsing and the built-in default set.
//!
//! A catalog is a JSON array of `{imagePath, prompt, numFrames}` objects.
//! Entries are validated one by one so that errors can name the offending
//! index.

use serde_json::Value;

use crate::sample::{RawSample, Sample, SampleError};

/// Errors from parsing a sample catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Malformed JSON, or an entry with the wrong shape.
    Json(String),
    /// An entry parsed but failed validation.
    Sample { index: usize, source: SampleError },
}

impl core::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "catalog JSON error: {msg}"),
            Self::Sample { index, source } => write!(f, "sample {index}: {source}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(_) => None,
            Self::Sample { source, .. } => Some(source),
        }
    }
}

/// Parse a JSON array of samples.
pub fn parse_catalog(json: &str) -> Result<Vec<Sample>, CatalogError> {
    let entries: Vec<Value> =
        serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawSample = serde_json::from_value(value)
                .map_err(|e| CatalogError::Json(format!("entry {index}: {e}")))?;
            Sample::try_from(raw).map_err(|source| CatalogError::Sample { index, source })
        })
        .collect()
}

const SAMPLE_DIR: &str = "./static/images/interactive-slider-samples";

const DEFAULT_ENTRIES: &[(&str, &str, u32)] = &[
    ("smile.gif", "smile", 6),
    ("young.gif", "young", 9),
    ("pixar.gif", "pixar", 10),
    ("smile.jpg", "smile", 10),
    ("rustycar.jpg", "rusty", 10),
    ("blonde.jpg", "blonde", 10),
    ("beard.gif", "beard", 10),
    ("tropical.gif", "tropical", 9),
    ("makeup.gif", "makeup", 10),
    ("surprised.jpg", "surprised", 10),
    ("clay.jpg", "clay", 10),
    ("curlyhair.jpg", "curly hair", 10),
    ("age.jpg", "age", 10),
    ("winter.jpg", "winter", 10),
    ("chubby.jpg", "chubby", 10),
];

/// The catalog shipped with the project page.
#[must_use]
pub fn default_catalog() -> Vec<Sample> {
    DEFAULT_ENTRIES
        .iter()
        .filter_map(|&(file, prompt, frames)| {
            Sample::new(format!("{SAMPLE_DIR}/{file}"), prompt, frames).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_catalog_has_fifteen_samples() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog[0].num_frames(), 6);
        assert_eq!(
            catalog[0].image_path(),
            "./static/images/interactive-slider-samples/smile.gif"
        );
        assert_eq!(catalog[11].prompt(), "curly hair");
    }

    #[test]
    fn parse_valid_catalog() {
        let json = r#"[
            {"imagePath": "a.jpg", "prompt": "a", "numFrames": 3},
            {"imagePath": "b.jpg", "prompt": "b", "numFrames": 1}
        ]"#;
        let samples = parse_catalog(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].max_frame(), 0);
    }

    #[test]
    fn parse_empty_catalog() {
        assert_eq!(parse_catalog("[]").unwrap(), Vec::new());
    }

    #[test]
    fn parse_reports_invalid_index() {
        let json = r#"[
            {"imagePath": "a.jpg", "prompt": "a", "numFrames": 3},
            {"imagePath": "b.jpg", "prompt": "b", "numFrames": 0}
        ]"#;
        assert_eq!(
            parse_catalog(json),
            Err(CatalogError::Sample {
                index: 1,
                source: SampleError::NoFrames
            })
        );
    }

    #[test]
    fn parse_reports_shape_errors() {
        let err = parse_catalog(r#"[{"prompt": "a"}]"#).unwrap_err();
        match err {
            CatalogError::Json(msg) => assert!(msg.starts_with("entry 0:")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"imagePath": "a.jpg"}"#),
            Err(CatalogError::Json(_))
        ));
    }
}
