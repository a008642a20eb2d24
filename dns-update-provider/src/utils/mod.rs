//! Utility modules.

/// Log sanitization utilities to keep record payloads and keys out of logs.
pub mod log_sanitizer;
