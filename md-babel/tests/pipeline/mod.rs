//! End-to-end conversions through the default renderer and serializer.

mod collaborators;
mod errors;
mod passthrough;
mod scenarios;
