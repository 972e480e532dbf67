//! Markdown dialect conversion
//!
//!     This crate converts documents between Markdown dialects: GFM, CommonMark, Kramdown,
//!     Obsidian, Discord, Reddit and MultiMarkdown. They share a core grammar but differ in
//!     extension syntax (wiki-links, callouts, spoilers, attribute lists, metadata blocks,
//!     highlights).
//!
//!     TLDR: For dialect authors:
//!         - Babel never parses Markdown itself. Generic parsing is delegated to a renderer
//!           (Markdown → HTML) and a serializer (HTML → Markdown), see ./formats.
//!         - A dialect is a pair of ordered rule sets: ingest rules rewrite its syntax into the
//!           neutral form before rendering, emit rules rewrite the neutral form back after
//!           serializing.
//!         - Syntax with no neutral equivalent travels as a pass-through marker (see
//!           ./dialects/markers.rs) that both collaborators leave alone.
//!         - Each dialect has unit tests next to its rules and round-trip tests under tests/.
//!
//! Architecture
//!
//!     raw input
//!       → preprocess        newline normalization + source ingest rules   (pipeline.rs)
//!       → render            neutral Markdown → HTML                       (formats/html)
//!       → serialize         HTML → Markdown                               (formats/markdown)
//!       → postprocess       newline normalization + target emit rules     (pipeline.rs)
//!       → reflow            optional paragraph re-wrap                    (common/reflow.rs)
//!       → tighten           optional loose → tight lists                  (common/tighten.rs)
//!       → output
//!
//!     This is a pure lib, that is, it powers the md-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── dialect.rs              # DialectId and the Dialect trait
//!     ├── registry.rs             # DialectRegistry for discovery and selection
//!     ├── rules.rs                # Rule and RuleSet
//!     ├── dialects
//!     │   ├── markers.rs          # Pass-through markers shared by dialects
//!     │   └── <dialect>.rs
//!     ├── formats
//!     │   ├── html                # Markdown → HTML (comrak)
//!     │   └── markdown            # HTML → Markdown (html5ever)
//!     ├── common                  # Line classifier, reflow, tightener
//!     ├── pipeline.rs             # Converter and the stage functions
//!     └── preview.rs              # Display-only projection to HTML
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Reflow
//!
//!     The most delicate part is re-wrapping without changing what the document means. Only
//!     plain paragraph lines are touched, and a wrap is only kept if none of the new lines
//!     would read as structure. That makes reflow stable: running it twice at the same width
//!     gives the same text as running it once.
//!
//! Lossy Conversions
//!
//!     Round-tripping is best-effort:
//!     - Obsidian highlights become bold and callouts become bold labels; neither comes back.
//!     - Obsidian emit turns any link whose target looks like a note name into a wiki-link.
//!     - Blank-line and emphasis-marker choices follow the serializer, not the source.
//!     - Text that would read as Markdown syntax comes back escaped.

pub mod common;
pub mod dialect;
pub mod dialects;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod preview;
pub mod registry;
pub mod rules;

pub use dialect::{Dialect, DialectId};
pub use error::ConvertError;
pub use formats::{
    ComrakRenderer, DomSerializer, HtmlSerializer, MarkdownRenderer, RenderOptions,
    SerializeOptions,
};
pub use pipeline::{
    convert, postprocess, preprocess, ConversionOptions, ConvertRequest, Converter,
    MAX_WRAP_WIDTH, MIN_WRAP_WIDTH,
};
pub use preview::{project, render_preview};
pub use registry::DialectRegistry;
pub use rules::{Direction, Rule, RuleSet};
