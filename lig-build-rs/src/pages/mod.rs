//! Static page assembly from exported design templates.

mod patch;
mod site;

pub use patch::{apply_patches, MatchPolicy, Patch, PatchedPage};
pub use site::{default_site, script_tags, PagePlan, TEMPLATE_DIR};

use crate::error::PageError;
use std::path::{Path, PathBuf};

/// Build every page in `plans` under `root`.
///
/// All templates are read and patched before anything is written, so a
/// missing template or (under `Strict`) an unmatched patch leaves the
/// existing pages untouched. Returns the written paths in plan order.
pub fn assemble_site(
    root: &Path,
    plans: &[PagePlan],
    policy: MatchPolicy,
) -> Result<Vec<PathBuf>, PageError> {
    let mut pages = Vec::with_capacity(plans.len());
    for plan in plans {
        let template = root.join(&plan.template);
        let html = std::fs::read_to_string(&template).map_err(|source| PageError::Read {
            path: template.clone(),
            source,
        })?;
        let patched = apply_patches(&plan.name(), &html, &plan.patches, policy)?;
        log::debug!(
            "{}: applied {} patches, skipped {}",
            plan.name(),
            patched.applied.len(),
            patched.skipped.len()
        );
        pages.push((root.join(&plan.output), patched.html));
    }

    let mut written = Vec::with_capacity(pages.len());
    for (path, html) in pages {
        std::fs::write(&path, html).map_err(|source| PageError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
