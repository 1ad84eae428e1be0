//! Build steps for the Leverage in the Game static site.
//!
//! - [`generate_branding`] renders the icon and logo JPEGs.
//! - [`assemble_site`] turns exported design templates into the final pages.
//! - [`publish_static`] copies the deployable files into a clean directory.
//!
//! The steps share no state and can run in any order, though publishing
//! expects the other two to have produced their files.

pub mod branding;
pub mod config;
pub mod error;
pub mod pages;
pub mod publish;

pub use branding::{compose_icon, compose_logo, generate_branding, BrandingOutput};
pub use config::{BrandingConfig, IconConfig, LogoConfig};
pub use error::{BrandingError, BuildError, ConfigError, PageError, PublishError};
pub use pages::{
    apply_patches, assemble_site, default_site, MatchPolicy, PagePlan, Patch, PatchedPage,
};
pub use publish::{publish_static, DEFAULT_OUTPUT_DIR, DEFAULT_STATIC_ENTRIES};

use std::path::{Path, PathBuf};

/// Everything written by [`build_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub branding: BrandingOutput,
    pub pages: Vec<PathBuf>,
    pub published: PathBuf,
}

/// Run branding, page assembly and publishing in order with the built-in
/// site plan and default static entries.
pub fn build_all(
    root: &Path,
    config: &BrandingConfig,
    policy: MatchPolicy,
    output: &Path,
) -> Result<BuildSummary, BuildError> {
    let branding = generate_branding(root, config)?;
    let pages = assemble_site(root, &default_site(), policy)?;
    let published = publish_static(root, output, DEFAULT_STATIC_ENTRIES)?;
    Ok(BuildSummary {
        branding,
        pages,
        published,
    })
}
