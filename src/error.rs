//! Errors raised at the host seam.
//!
//! Controllers never propagate these to the page: every failure degrades to
//! the documented default and is logged. The type exists so host
//! implementations can report what went wrong instead of silently guessing.

/// Failures reported by a [`crate::host::PageHost`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// `localStorage` is disabled or not exposed (private browsing, sandboxed iframe).
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// A storage read or write threw.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// A DOM call threw or a required node was missing.
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// A page configuration override could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}
