//! Demo application wiring: scripted landmark scenes fed through the full
//! recognition pipeline, with accepted text surfaced to the caller.

pub mod runtime;
pub mod scripted;
