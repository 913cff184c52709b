//! Filesystem capability used by `read` and `connect`.

use std::io;
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;

pub trait FileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Turn a path written in a program into an absolute, normalized path.
    /// Relative paths resolve against `base`.
    fn resolve_path(&self, base: &Path, path: &str) -> PathBuf {
        normalize(&base.join(path))
    }

    /// Directory that relative paths resolve against when no file is
    /// being interpreted.
    fn working_dir(&self) -> PathBuf {
        PathBuf::from("/")
    }
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn resolve_path(&self, base: &Path, path: &str) -> PathBuf {
        let joined = base.join(path);
        let absolute = if joined.is_absolute() {
            joined
        } else {
            std::env::current_dir().map_or(joined.clone(), |cwd| cwd.join(&joined))
        };
        normalize(&absolute)
    }

    fn working_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// In-memory files keyed by normalized absolute path.
#[derive(Clone, Debug, Default)]
pub struct MemoryFileSystem {
    files: FxHashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        MemoryFileSystem::default()
    }

    /// Add a file. Relative paths are placed under `/`.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let path = normalize(&Path::new("/").join(path));
        self.files.insert(path, contents.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such file")
        })
    }
}

/// Resolve `.` and `..` lexically.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
