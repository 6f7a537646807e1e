//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (randomness, pointer and element
//! geometry) and pure overlay math from component code.

pub mod overlay;
pub mod palette;
pub mod pointer;
