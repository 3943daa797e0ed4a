#![forbid(unsafe_code)]

use spritegal_core::CatalogError;

/// Errors from mounting a gallery into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No element with this id exists.
    ContainerNotFound(String),
    /// The sample list was malformed.
    Catalog(CatalogError),
    /// A browser API was unavailable or threw.
    Dom(String),
}

impl core::fmt::Display for MountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ContainerNotFound(id) => write!(f, "container #{id} not found"),
            Self::Catalog(err) => write!(f, "invalid samples: {err}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for MountError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            MountError::ContainerNotFound("gallery".to_owned()).to_string(),
            "container #gallery not found"
        );
        let err: MountError = CatalogError::Json("eof".to_owned()).into();
        assert_eq!(err.to_string(), "invalid samples: catalog JSON error: eof");
    }
}
