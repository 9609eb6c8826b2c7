//! Theme, font and parallax preferences for a personal website.
//!
//! Compiled to WebAssembly and loaded by every page. On DOM ready it applies
//! the visitor's theme and font preset to `<body>` and starts the background
//! parallax. All document and storage access goes through [`host::PageHost`],
//! so every controller runs under plain `cargo test` against
//! `memory_host::MemoryHost`; only `browser` needs a real window.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageController`], the single entry point |
//! | [`theme`] | Dark/light theme and the toggle button label |
//! | [`font`] | Font presets, legacy name migration, selector sync |
//! | [`parallax`] | Frame-coalesced `--bg-offset-y` updates |
//! | [`host`] | The injected document/storage interface |
//! | `memory_host` | In-memory host for tests (`testing` feature) |
//! | [`config`] | Element ids, storage keys and factor overrides |
//! | [`consts`] | Shared constants |
//! | [`error`] | Host error type |
//! | `browser` | `web-sys` host and event wiring (`hydrate` feature) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod error;
pub mod font;
pub mod host;
#[cfg(any(test, feature = "testing"))]
pub mod memory_host;
pub mod page;
pub mod parallax;
pub mod theme;
