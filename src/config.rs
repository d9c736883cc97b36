//! Configuration lookup for the changelog file name.
//!
//! The changelog name comes from the `changelog.filename` key in git config,
//! falling back to the literal `CHANGES` when unset. A CLI flag can shadow
//! the configured value via [`OverlayConfig`].

use git2::Repository;

/// Changelog file name used when nothing is configured.
pub const DEFAULT_CHANGELOG: &str = "CHANGES";

/// Synchronous, side-effect-free key lookup.
pub trait ConfigLookup {
    /// Look up `section.key`, returning `None` when unset.
    fn get(&self, section: &str, key: &str) -> Option<String>;
}

/// Lookup backed by the repository's git configuration.
pub struct GitConfig {
    config: git2::Config,
}

impl GitConfig {
    /// Open the configuration of the given repository.
    pub fn open(repo: &Repository) -> Result<Self, git2::Error> {
        Ok(Self {
            config: repo.config()?,
        })
    }
}

impl ConfigLookup for GitConfig {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.config.get_string(&format!("{section}.{key}")).ok()
    }
}

/// Layered lookup: a changelog name supplied on the command line shadows
/// whatever git config says.
pub struct OverlayConfig<'a> {
    inner: &'a dyn ConfigLookup,
    changelog: Option<String>,
}

impl<'a> OverlayConfig<'a> {
    pub fn new(inner: &'a dyn ConfigLookup, changelog: Option<String>) -> Self {
        Self { inner, changelog }
    }
}

impl ConfigLookup for OverlayConfig<'_> {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        if section == "changelog" && key == "filename" {
            if let Some(name) = &self.changelog {
                return Some(name.clone());
            }
        }
        self.inner.get(section, key)
    }
}

/// Resolve the changelog file name, defaulting to [`DEFAULT_CHANGELOG`].
pub fn changelog_filename(config: &dyn ConfigLookup) -> String {
    config
        .get("changelog", "filename")
        .unwrap_or_else(|| DEFAULT_CHANGELOG.to_string())
}
