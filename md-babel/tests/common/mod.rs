//! Tests for the text-level passes: classifier, reflow, tightener.

mod classify;
mod reflow;
mod tighten;
