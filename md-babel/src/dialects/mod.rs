//! Dialect implementations
//!
//! One module per dialect family. Each dialect owns its ingest and emit rule sets;
//! the markers they share live in [`markers`].

pub mod commonmark;
pub mod kramdown;
pub mod markers;
pub mod multimarkdown;
pub mod obsidian;
pub mod spoiler;

pub use commonmark::{CommonMarkDialect, GfmDialect};
pub use kramdown::KramdownDialect;
pub use multimarkdown::MultiMarkdownDialect;
pub use obsidian::ObsidianDialect;
pub use spoiler::{DiscordDialect, RedditDialect};
