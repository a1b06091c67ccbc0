//! Public library API for the host-compatible clipboard text codec.

/// Clipboard grammar writer/parser pairs, value types, and static dispatch.
pub mod clipboard;
