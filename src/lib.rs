//! Turn raw manuscript text into structured book content and compute the
//! print geometry (margins, gutter, spine, cover) needed to typeset it.
//!
//! ```
//! use quire::manuscript::{self, ContentKind};
//!
//! let blocks = manuscript::structure("CHAPTER ONE\n\nIt was a dark night.");
//! assert_eq!(blocks[0].kind, ContentKind::ChapterHeading);
//!
//! let layout = quire::layout::compute_layout(
//!     "6x9",
//!     "cream_55lb",
//!     &quire::layout::Margins::default(),
//!     300,
//!     false,
//! )?;
//! assert_eq!(layout.spine_width, 0.676);
//! # Ok::<(), quire::QuireError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod manuscript;
pub mod source;

pub use config::BookConfig;
pub use document::{BookDocument, assemble};
pub use error::{QuireError, Result};
pub use manuscript::{ContentBlock, ContentKind, SectionRole};
