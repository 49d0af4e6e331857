//! # Engine View
//!
//! Passive data types describing what the host engine exposes to the script
//! extras: tile positions and facing directions, read-only player and
//! map-event views, map names, and the audio backend boundary. This crate
//! carries no feature logic; it is the vocabulary shared between the host
//! integration layer and `extras_core`.

pub mod audio;
pub mod grid;
pub mod map;

pub use audio::*;
pub use grid::*;
pub use map::*;
