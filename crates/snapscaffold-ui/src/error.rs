//! Scaffold error types

use thiserror::Error;

/// Errors raised while wiring a snap scaffold to its host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapScaffoldError {
    /// The scrollable container is not one the snap logic can drive.
    #[error(
        "unsupported scrollable source `{type_name}`: expected ScrollState, LazyListState, \
         LazyGridState or LazyStaggeredGridState"
    )]
    UnsupportedScrollSource { type_name: &'static str },
}

/// Result type for scaffold operations
pub type Result<T> = std::result::Result<T, SnapScaffoldError>;
