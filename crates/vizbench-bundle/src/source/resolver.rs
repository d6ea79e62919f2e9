use std::path::{Path, PathBuf};

use tracing::trace;

/// Maps a bundle file location to a file on disk.
pub trait PathResolver: Send + Sync {
    fn resolve(&self, location: &str) -> Option<PathBuf>;
}

/// Looks a relative location up in an ordered list of roots; the first
/// root holding the file wins. Absolute locations are used as given.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    roots: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl PathResolver for SearchPathResolver {
    fn resolve(&self, location: &str) -> Option<PathBuf> {
        let path = Path::new(location);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        self.roots
            .iter()
            .map(|root| root.join(path))
            .inspect(|candidate| trace!(candidate = %candidate.display(), "bundle lookup"))
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_root_with_the_file_wins() {
        let user = tempfile::tempdir().unwrap();
        let site = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(site.path().join("radar")).unwrap();
        std::fs::write(site.path().join("radar/four.json"), "{}").unwrap();
        std::fs::create_dir_all(user.path().join("radar")).unwrap();
        std::fs::write(user.path().join("radar/four.json"), "{}").unwrap();

        let resolver =
            SearchPathResolver::new(vec![user.path().to_path_buf(), site.path().to_path_buf()]);
        let found = resolver.resolve("radar/four.json").unwrap();
        assert!(found.starts_with(user.path()));
    }

    #[test]
    fn falls_through_to_later_roots() {
        let user = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        std::fs::write(base.path().join("b.json"), "{}").unwrap();

        let resolver =
            SearchPathResolver::new(vec![user.path().to_path_buf(), base.path().to_path_buf()]);
        assert_eq!(resolver.resolve("b.json"), Some(base.path().join("b.json")));
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let root = tempfile::tempdir().unwrap();
        let resolver = SearchPathResolver::new(vec![root.path().to_path_buf()]);
        assert!(resolver.resolve("nope.json").is_none());
    }

    #[test]
    fn absolute_location_bypasses_roots() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("abs.json");
        std::fs::write(&file, "{}").unwrap();

        let resolver = SearchPathResolver::default();
        assert_eq!(resolver.resolve(file.to_str().unwrap()), Some(file));
    }
}
