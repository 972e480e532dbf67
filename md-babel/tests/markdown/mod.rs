//! HTML → Markdown serializer tests
//!
//! These feed hand-written HTML straight into the serializer, so they pin its output
//! without depending on the renderer.
