//! Template container materialization.
//! A container is a named, read-only directory of file templates bundled
//! with plugforge. Materializing one renders every template into the
//! destination collection tree, honoring a per-container overwrite
//! allow-list so incremental re-scaffolding preserves developer edits.

use crate::constants::TEMPLATES_ENV_VAR;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns the bundled template container root.
///
/// Honors the `PLUGFORGE_TEMPLATES` environment variable, otherwise falls
/// back to the `templates/` directory shipped with the crate.
pub fn default_template_root() -> PathBuf {
    std::env::var_os(TEMPLATES_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Checks whether a file name follows the `<name>.<ext>.j2` template
/// convention and should be rendered rather than copied.
pub fn is_template_path(filename: &str) -> bool {
    let parts: Vec<&str> = filename.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&"j2")
}

/// Resolves the destination path for a rendered relative path, stripping
/// the `.j2` suffix from template files.
///
/// # Returns
/// * `(PathBuf, bool)` - the destination path and whether the source is a
///   template that must be rendered
pub fn resolve_target_path(rendered_path: &str, dest_root: &Path) -> (PathBuf, bool) {
    if let Some(filename) = Path::new(rendered_path).file_name().and_then(|n| n.to_str()) {
        if is_template_path(filename) {
            let new_name = filename.strip_suffix(".j2").unwrap_or(filename);
            let target = dest_root.join(Path::new(rendered_path).with_file_name(new_name));
            return (target, true);
        }
    }
    (dest_root.join(rendered_path), false)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Materializes named template containers into a destination tree.
///
/// The template root is an explicit value, not process-wide state; every
/// `materialize` call is independent and idempotent with respect to
/// already-correct destination content.
pub struct Materializer<'a> {
    template_root: PathBuf,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Materializer<'a> {
    pub fn new(template_root: PathBuf, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { template_root, renderer }
    }

    /// Renders every entry of a container into `dest_root`.
    ///
    /// Entries are visited in stable lexicographic order. Relative paths
    /// are themselves templates, so container files may carry expressions
    /// like `{{ network_os }}` in their names. An existing destination file
    /// is overwritten only when its *source-relative* path (the
    /// `.j2`-suffixed path inside the container) is in `allow_overwrite`;
    /// otherwise it is skipped silently.
    ///
    /// # Errors
    /// * `Error::UnknownContainer` if no container with that name is bundled
    /// * `Error::Template` on render failures, including undefined variables
    /// * `Error::Io` on filesystem failures
    pub fn materialize(
        &self,
        container: &str,
        dest_root: &Path,
        context: &serde_json::Value,
        allow_overwrite: &[&str],
    ) -> Result<()> {
        let container_dir = self.template_root.join(container);
        if !container_dir.is_dir() {
            return Err(Error::UnknownContainer { name: container.to_string() });
        }
        debug!("materializing container '{}' into {}", container, dest_root.display());

        for entry in WalkDir::new(&container_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            let path = entry.path();
            let relative = path
                .strip_prefix(&container_dir)
                .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
                .to_str()
                .ok_or_else(|| {
                    Error::Io(std::io::Error::other(format!(
                        "container path is not valid UTF-8: {}",
                        path.display()
                    )))
                })?
                .to_string();
            if relative.is_empty() {
                continue;
            }

            let rendered_relative = self.renderer.render(&relative, context)?;
            if path.is_dir() {
                fs::create_dir_all(dest_root.join(&rendered_relative))?;
                continue;
            }

            let (target, is_template) = resolve_target_path(&rendered_relative, dest_root);
            if target.exists() && !allow_overwrite.contains(&relative.as_str()) {
                debug!("skipping existing file {}", target.display());
                continue;
            }

            let content = fs::read_to_string(path)?;
            let final_content =
                if is_template { self.renderer.render(&content, context)? } else { content };
            write_file(&target, &final_content)?;
            debug!("wrote {}", target.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_template_path() {
        assert!(is_template_path("module.py.j2"));
        assert!(is_template_path("{{ resource }}.py.j2"));
        assert!(!is_template_path("regular.py"));
        assert!(!is_template_path("file.j2txt"));
    }

    #[test]
    fn test_resolve_target_path() {
        let (path, render) = resolve_target_path("plugins/modules/eos_lag.py.j2", Path::new("out"));
        assert_eq!(path, PathBuf::from("out/plugins/modules/eos_lag.py"));
        assert!(render);

        let (path, render) = resolve_target_path("plugins/README.md", Path::new("out"));
        assert_eq!(path, PathBuf::from("out/plugins/README.md"));
        assert!(!render);
    }
}
