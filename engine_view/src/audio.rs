//! Audio track descriptors and the host audio backend boundary.

use serde::{Deserialize, Serialize};

/// Playback channels exposed by the engine's audio subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Background music, one looping track at a time.
    Bgm,
    /// Background sound, one looping track at a time.
    Bgs,
    /// Music effect, interrupts BGM and plays once.
    Me,
    /// Sound effect, fire and forget.
    Se,
}

impl Channel {
    /// Asset folder for this channel, relative to the game root.
    pub fn asset_dir(&self) -> &'static str {
        match self {
            Channel::Bgm => "Audio/BGM",
            Channel::Bgs => "Audio/BGS",
            Channel::Me => "Audio/ME",
            Channel::Se => "Audio/SE",
        }
    }
}

/// A track as stored in the game data: file name, volume, pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Audio file name without its folder. Empty means silence.
    pub name: String,
    /// Track volume, 0 to 100, before any master scaling.
    pub volume: i32,
    /// Playback pitch percentage, 100 is unchanged.
    pub pitch: i32,
}

impl Track {
    /// Create a new track descriptor.
    pub fn new(name: impl Into<String>, volume: i32, pitch: i32) -> Self {
        Self {
            name: name.into(),
            volume,
            pitch,
        }
    }

    /// A track that plays nothing.
    pub fn silent() -> Self {
        Self::new("", 0, 100)
    }

    /// Whether this track plays nothing.
    pub fn is_silent(&self) -> bool {
        self.name.is_empty()
    }

    /// Path of the audio asset when played on the given channel.
    pub fn asset_path(&self, channel: Channel) -> String {
        format!("{}/{}", channel.asset_dir(), self.name)
    }
}

/// Host audio subsystem boundary.
///
/// Implemented by the integration layer over the engine's audio API. The
/// script extras never touch the audio hardware directly; they compute
/// volumes and forward through this trait.
pub trait AudioBackend {
    /// Start playback on a channel, optionally from a saved position.
    ///
    /// Engines without positional playback may ignore `position`.
    fn play(&mut self, channel: Channel, file: &str, volume: i32, pitch: i32, position: Option<f64>);

    /// Stop playback on a channel.
    fn stop(&mut self, channel: Channel);

    /// Current BGM playback position, if the engine reports one.
    ///
    /// Older engine generations have no positional API and return `None`;
    /// pause/resume degrades gracefully in that case.
    fn bgm_position(&self) -> Option<f64>;
}
