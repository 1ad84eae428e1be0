use lig_canvas2d::Canvas2dError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BrandingError {
    #[error("Canvas error: {0}")]
    Canvas(#[from] Canvas2dError),

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A patch's search text does not occur in the page under strict matching.
    #[error("patch `{patch}` found no match in {page}")]
    MissingAnchor { page: String, patch: String },

    #[error("failed to write page {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Missing required build entry: {0}")]
    MissingEntry(PathBuf),

    /// The output directory would overlap the site sources it is built from.
    #[error("refusing to publish into {path}: it {reason}")]
    UnsafeOutput { path: PathBuf, reason: String },

    #[error("failed to prepare output directory {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any error raised by the build library.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Branding(#[from] BrandingError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}
