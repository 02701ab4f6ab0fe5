//! Shared utility modules.

pub mod record;
