use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The facade crate re-exporting every `fs_*` crate under its short name.
const FACADE_NAME: &str = "fieldser";
const CRATE_PREFIX: &str = "fs_";

/// The caller's parsed `Cargo.toml`, used to find how a crate is reachable
/// from the code a proc-macro emits.
///
/// # Example
///
/// ```rust
/// # use fs_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fs_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. The requested crate is listed in `dependencies`: `::crate_name`.
/// 2. The requested crate starts with `fs_` and the caller depends on
///    `fieldser`: `::fieldser::short_name` (e.g. `fs_reflect` -> `::fieldser::reflect`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate referring to itself should declare `extern crate self as name;`
/// so that rule 4 also works from inside the crate.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn load(path: &Path, modified_time: SystemTime) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        let manifest = Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()));
        Self {
            manifest,
            modified_time,
        }
    }

    #[inline]
    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{short}")));
        }
        None
    }

    /// Return the [`syn::Path`] of the package `name` as seen from the
    /// caller's `Cargo.toml`. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::lookup(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Run `func` with the caller's [`Manifest`].
    ///
    /// Manifests are cached per path and reloaded when the file's modified
    /// time changes. Call it once per macro invocation and keep the result.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: Mutex<BTreeMap<PathBuf, Manifest>> = Mutex::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .expect("The Cargo.toml should have a modified time.");

        let mut manifests = MANIFESTS.lock().unwrap_or_else(PoisonError::into_inner);

        let stale = manifests
            .get(&path)
            .is_none_or(|cached| cached.modified_time != modified_time);
        if stale {
            let loaded = Self::load(&path, modified_time);
            manifests.insert(path.clone(), loaded);
        }

        func(&manifests[&path])
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::Document;

    use super::Manifest;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nfs_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("fs_reflect")), "::fs_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nfieldser = \"0.0.1\"\n");
        assert_eq!(
            path_string(&m.get_crate_path("fs_reflect")),
            "::fieldser::reflect"
        );
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\nfieldser = \"0.0.1\"\n");
        assert_eq!(
            path_string(&m.get_crate_path("fs_reflect")),
            "::fieldser::reflect"
        );

        let empty = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_string(&empty.get_crate_path("fs_reflect")), "::fs_reflect");
    }
}
