//! HTML → Markdown serialization
//!
//! # Library Choice
//!
//! We use `html5ever` + `markup5ever_rcdom` to parse the rendered HTML into a DOM and walk
//! it ourselves. The parser is browser-grade and forgiving, and owning the walk lets dialect
//! markers (HTML comments, spoiler spans) come out exactly as they went in.
//!
//! # Element Mapping Table
//!
//! | HTML                          | Markdown                              | Notes                                  |
//! |-------------------------------|---------------------------------------|----------------------------------------|
//! | `<p>`                         | paragraph                             | blank line between blocks              |
//! | `<h1>`..`<h6>`                | `# Title`                             | setext for levels 1-2 on request       |
//! | `<em>`, `<i>`                 | `_text_`                              | delimiter configurable                 |
//! | `<strong>`, `<b>`             | `**text**`                            | delimiter configurable                 |
//! | `<del>`, `<s>`                | `~~text~~`                            |                                        |
//! | `<code>`                      | `` `code` ``                          | delimiter grows past inner backticks   |
//! | `<pre><code>`                 | fenced block                          | `language-x` class → info string      |
//! | `<a>`, `<img>`                | `[text](href)`, `![alt](src)`         | titles kept                            |
//! | `<ul>`, `<ol>`, `<li>`        | `- item`, `1. item`                   | nested, `start` honoured, loose kept   |
//! | `<input type=checkbox>`       | `[x] ` / `[ ] `                       | task lists                             |
//! | `<blockquote>`                | `> quoted`                            |                                        |
//! | `<hr>`, `<br>`                | `---`, two trailing spaces            |                                        |
//! | `<table>`                     | GFM pipe table                        | alignment row from `align`             |
//! | `<!-- ... -->`                | kept verbatim                         | carries dialect markers                |
//! | `<span data-spoiler>`         | `\|\|text\|\|`                        | via [`SpoilerRule`]                    |
//!
//! Anything else contributes its content; unknown block elements are separated by blank
//! lines. `<script>`, `<style>` and `<head>` are dropped.

mod rules;
mod serializer;

pub use rules::{default_rules, Element, ElementRule, SpoilerRule};
pub use serializer::DomSerializer;
