use crate::error::PageError;

/// A named literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: String,
    pub find: String,
    pub replace: String,
}

impl Patch {
    pub fn new(name: impl Into<String>, find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// What to do when a patch's search text is not in the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Fail with [`PageError::MissingAnchor`].
    #[default]
    Strict,
    /// Skip the patch and log a warning.
    Lenient,
}

/// A page after all patches have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedPage {
    pub html: String,
    /// Names of patches that matched at least once, in application order.
    pub applied: Vec<String>,
    /// Names of patches that matched nothing (only under `Lenient`).
    pub skipped: Vec<String>,
}

/// Apply `patches` to `html` in order.
///
/// Each patch replaces every occurrence of its search text in the output of
/// the previous patch, so a later patch can match text an earlier one
/// produced.
pub fn apply_patches(
    page: &str,
    html: &str,
    patches: &[Patch],
    policy: MatchPolicy,
) -> Result<PatchedPage, PageError> {
    let mut html = html.to_string();
    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    for patch in patches {
        if !patch.find.is_empty() && html.contains(&patch.find) {
            html = html.replace(&patch.find, &patch.replace);
            applied.push(patch.name.clone());
            continue;
        }
        match policy {
            MatchPolicy::Strict => {
                return Err(PageError::MissingAnchor {
                    page: page.to_string(),
                    patch: patch.name.clone(),
                })
            }
            MatchPolicy::Lenient => {
                log::warn!("{}: patch `{}` matched nothing, skipping", page, patch.name);
                skipped.push(patch.name.clone());
            }
        }
    }

    Ok(PatchedPage {
        html,
        applied,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patches() -> Vec<Patch> {
        vec![
            Patch::new("button", "<button>Go</button>", "<a href=\"#lead\">Go</a>"),
            Patch::new("anchor", "href=\"#lead\"", "href=\"#form\""),
        ]
    }

    #[test]
    fn test_patches_apply_in_order() {
        let page = apply_patches(
            "index.html",
            "<button>Go</button><button>Go</button>",
            &patches(),
            MatchPolicy::Strict,
        )
        .unwrap();
        assert_eq!(page.html, "<a href=\"#form\">Go</a><a href=\"#form\">Go</a>");
        assert_eq!(page.applied, vec!["button", "anchor"]);
        assert!(page.skipped.is_empty());
    }

    #[test]
    fn test_strict_reports_first_missing_patch() {
        let err = apply_patches("index.html", "<p>nothing</p>", &patches(), MatchPolicy::Strict)
            .unwrap_err();
        match err {
            PageError::MissingAnchor { page, patch } => {
                assert_eq!(page, "index.html");
                assert_eq!(patch, "button");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_leaves_unmatched_input_alone() {
        let input = "<p>nothing</p>";
        let page = apply_patches("index.html", input, &patches(), MatchPolicy::Lenient).unwrap();
        assert_eq!(page.html, input);
        assert!(page.applied.is_empty());
        assert_eq!(page.skipped, vec!["button", "anchor"]);
    }

    #[test]
    fn test_empty_search_text_never_matches() {
        let patch = [Patch::new("empty", "", "x")];
        let page = apply_patches("p", "abc", &patch, MatchPolicy::Lenient).unwrap();
        assert_eq!(page.html, "abc");
        assert!(apply_patches("p", "abc", &patch, MatchPolicy::Strict).is_err());
    }
}
