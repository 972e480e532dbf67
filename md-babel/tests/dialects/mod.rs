//! Dialect rule sets, on their own and through the registry.

mod passthrough;
mod registry;
mod spoiler;
