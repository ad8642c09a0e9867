//! Dataset directory layout.
//!
//! A castlink dataset is a directory holding the pre-built index pair:
//!
//! ```text
//! <data_dir>/
//! ├─ actordata         # actor offset table + records
//! └─ moviedata         # movie offset table + records
//! ```
//!
//! Both files are read-only input. There is no lock file: the dataset is
//! never written, so any number of processes may open it concurrently.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// File name of the actor index inside a dataset directory.
pub const ACTOR_FILE: &str = "actordata";
/// File name of the movie index inside a dataset directory.
pub const MOVIE_FILE: &str = "moviedata";

/// A resolved dataset directory with both index files present.
///
/// # Example
///
/// ```rust,ignore
/// use castlink_core::DatasetDir;
/// use std::path::Path;
///
/// let dir = DatasetDir::open(Path::new("data"))?;
/// println!("actor index: {:?}", dir.actor_path());
/// ```
#[derive(Debug, Clone)]
pub struct DatasetDir {
    path: PathBuf,
}

impl DatasetDir {
    /// Opens a dataset directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or either index
    /// file is missing.
    pub fn open(path: &Path) -> CoreResult<Self> {
        if !path.is_dir() {
            return Err(CoreError::invalid_format(format!(
                "dataset path is not a directory: {}",
                path.display()
            )));
        }
        for file in [ACTOR_FILE, MOVIE_FILE] {
            if !path.join(file).is_file() {
                return Err(CoreError::invalid_format(format!(
                    "dataset is missing {} in {}",
                    file,
                    path.display()
                )));
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns the path to the dataset directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path to the actor index file.
    #[must_use]
    pub fn actor_path(&self) -> PathBuf {
        self.path.join(ACTOR_FILE)
    }

    /// Returns the path to the movie index file.
    #[must_use]
    pub fn movie_path(&self) -> PathBuf {
        self.path.join(MOVIE_FILE)
    }
}
