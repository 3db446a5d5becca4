use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading optional startup resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("icon resource `{}` could not be read: {source}", path.display())]
    Icon { path: PathBuf, source: io::Error },
}
