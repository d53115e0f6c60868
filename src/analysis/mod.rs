//! Analysis modules for pattern extraction and frequency ranking

/// Sliding-window pattern counting and ranking
pub mod patterns;
