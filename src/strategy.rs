//! Aggregation strategies and the output path scheme that goes with each.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReplaceError;

/// One unit of transformed output.
///
/// `path` is empty for inline content until an output strategy writes it
/// somewhere; after a write it holds the path actually used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FileResult {
    pub path: String,
    pub content: String,
}

impl FileResult {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl<P: Into<String>, C: Into<String>> From<(P, C)> for FileResult {
    fn from((path, content): (P, C)) -> Self {
        FileResult::new(path, content)
    }
}

/// How several sources are combined and where they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Concatenate everything into a single result written to `output`.
    #[default]
    Join,
    /// One result per source, named by its base file name under `output`.
    Flatten,
    /// One result per source, its full path recreated under `output`.
    PreserveStructure,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Join,
        Strategy::Flatten,
        Strategy::PreserveStructure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Join => "join",
            Strategy::Flatten => "flatten",
            Strategy::PreserveStructure => "preserve-structure",
        }
    }

    /// Reshape per-source results. Never touches the file system.
    pub fn aggregate(self, results: Vec<FileResult>, join_string: &str) -> Vec<FileResult> {
        match self {
            Strategy::Join => {
                let mut content = String::new();
                for (i, result) in results.iter().enumerate() {
                    if i > 0 {
                        content.push_str(join_string);
                    }
                    content.push_str(&result.content);
                }
                vec![FileResult::new("", content)]
            }
            Strategy::Flatten => results
                .into_iter()
                .map(|mut result| {
                    result.path = base_name(&result.path).to_string();
                    result
                })
                .collect(),
            Strategy::PreserveStructure => results,
        }
    }

    /// Where an aggregated result with identifier `path` is written when the
    /// output root is `output`.
    pub fn destination(self, output: &Path, path: &str) -> PathBuf {
        match self {
            Strategy::Join => output.to_path_buf(),
            Strategy::Flatten | Strategy::PreserveStructure => nest_under(output, Path::new(path)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ReplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "join" => Ok(Strategy::Join),
            "flatten" => Ok(Strategy::Flatten),
            "preserve-structure" => Ok(Strategy::PreserveStructure),
            _ => Err(ReplaceError::config(
                "unsupported strategy used! Possible values are: \"join\", \"preserve-structure\" or \"flatten\"",
            )),
        }
    }
}

/// Everything after the last path separator, or the whole identifier when it
/// has none.
pub fn base_name(path: &str) -> &str {
    match path.rfind(std::path::is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding normal component where there is one.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        push_component(&mut out, component, true);
    }
    out
}

/// Join `path` onto `root` even when `path` is absolute, then normalize.
fn nest_under(root: &Path, path: &Path) -> PathBuf {
    let mut out = normalize_path(root);
    for component in path.components() {
        push_component(&mut out, component, false);
    }
    out
}

fn push_component(out: &mut PathBuf, component: Component<'_>, keep_root: bool) {
    match component {
        Component::Prefix(_) | Component::RootDir => {
            if keep_root {
                out.push(component.as_os_str());
            }
        }
        Component::CurDir => {}
        Component::ParentDir => {
            let last_is_normal = matches!(out.components().next_back(), Some(Component::Normal(_)));
            if last_is_normal {
                out.pop();
            } else if !out.has_root() {
                out.push("..");
            }
        }
        Component::Normal(part) => out.push(part),
    }
}
