//! voiceforge: voice cloning demo client.
//!
//! This crate implements the upload-and-generate workflow behind the
//! VoiceForge demo: accept a reference voice sample and target text, submit
//! both to the remote generation service, then play or download the result.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod notify;
pub mod playback;
pub mod workflow;
