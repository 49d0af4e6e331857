//! Master volume control, indoor volume ducking, and BGM pause/resume.
//!
//! [`AudioState`] is the piece of save data behind all three features: the
//! per-group master volumes, the volumes remembered while ducked, and the
//! memorized BGM for pause/resume. The host integration layer owns one
//! instance, persists it with the rest of the save, and passes its
//! [`AudioBackend`] whenever playback has to change.

use engine_view::{AudioBackend, Channel, Track};
use serde::{Deserialize, Serialize};

/// Channel groups that share a master volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeGroup {
    Bgm,
    Bgs,
    Se,
}

/// Master volume percentages, always clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterVolume {
    bgm: i32,
    bgs: i32,
    se: i32,
}

impl Default for MasterVolume {
    fn default() -> Self {
        Self {
            bgm: 100,
            bgs: 100,
            se: 100,
        }
    }
}

impl MasterVolume {
    /// Current percentage for a group.
    pub fn get(&self, group: VolumeGroup) -> i32 {
        match group {
            VolumeGroup::Bgm => self.bgm,
            VolumeGroup::Bgs => self.bgs,
            VolumeGroup::Se => self.se,
        }
    }

    /// Set a group's percentage, clamping to the valid range.
    pub fn set(&mut self, group: VolumeGroup, value: i32) {
        let value = value.clamp(0, 100);
        match group {
            VolumeGroup::Bgm => self.bgm = value,
            VolumeGroup::Bgs => self.bgs = value,
            VolumeGroup::Se => self.se = value,
        }
    }

    /// Signed increment on a group's percentage, clamped like [`set`].
    ///
    /// [`set`]: MasterVolume::set
    pub fn adjust(&mut self, group: VolumeGroup, delta: i32) {
        self.set(group, self.get(group) + delta);
    }

    /// Scale a track volume by the group's master percentage.
    pub fn effective(&self, group: VolumeGroup, volume: i32) -> i32 {
        volume * self.get(group) / 100
    }
}

/// Audio bookkeeping carried in the save data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AudioState {
    pub master: MasterVolume,
    playing_bgm: Option<Track>,
    playing_bgs: Option<Track>,
    /// BGM master volume before the indoor duck, restored on the way out.
    saved_bgm_vol: Option<i32>,
    saved_bgs_vol: Option<i32>,
    memorized_bgm: Option<Track>,
    memorized_position: Option<f64>,
}

impl AudioState {
    /// Fresh state with full master volumes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The BGM most recently handed to [`play_bgm`], silent tracks included.
    ///
    /// [`play_bgm`]: AudioState::play_bgm
    pub fn playing_bgm(&self) -> Option<&Track> {
        self.playing_bgm.as_ref()
    }

    /// The BGS most recently handed to [`play_bgs`].
    ///
    /// [`play_bgs`]: AudioState::play_bgs
    pub fn playing_bgs(&self) -> Option<&Track> {
        self.playing_bgs.as_ref()
    }

    /// Play a background music track scaled by the master volume.
    ///
    /// A silent track stops the channel instead.
    pub fn play_bgm(&mut self, track: Track, backend: &mut dyn AudioBackend) {
        self.playing_bgm = Some(track.clone());
        if track.is_silent() {
            backend.stop(Channel::Bgm);
        } else {
            let volume = self.master.effective(VolumeGroup::Bgm, track.volume);
            backend.play(
                Channel::Bgm,
                &track.asset_path(Channel::Bgm),
                volume,
                track.pitch,
                None,
            );
        }
    }

    /// Play a background sound track scaled by the master volume.
    pub fn play_bgs(&mut self, track: Track, backend: &mut dyn AudioBackend) {
        self.playing_bgs = Some(track.clone());
        if track.is_silent() {
            backend.stop(Channel::Bgs);
        } else {
            let volume = self.master.effective(VolumeGroup::Bgs, track.volume);
            backend.play(
                Channel::Bgs,
                &track.asset_path(Channel::Bgs),
                volume,
                track.pitch,
                None,
            );
        }
    }

    /// Play a music effect scaled by the sound-effect master volume.
    pub fn play_me(&mut self, track: Track, backend: &mut dyn AudioBackend) {
        if track.is_silent() {
            backend.stop(Channel::Me);
        } else {
            let volume = self.master.effective(VolumeGroup::Se, track.volume);
            backend.play(
                Channel::Me,
                &track.asset_path(Channel::Me),
                volume,
                track.pitch,
                None,
            );
        }
    }

    /// Play a sound effect scaled by the master volume. Silent tracks are
    /// ignored rather than stopping anything.
    pub fn play_se(&mut self, track: Track, backend: &mut dyn AudioBackend) {
        if !track.is_silent() {
            let volume = self.master.effective(VolumeGroup::Se, track.volume);
            backend.play(
                Channel::Se,
                &track.asset_path(Channel::Se),
                volume,
                track.pitch,
                None,
            );
        }
    }

    /// Set a group's master volume and re-apply it to live playback.
    pub fn set_master(&mut self, group: VolumeGroup, value: i32, backend: &mut dyn AudioBackend) {
        self.master.set(group, value);
        self.reapply(group, backend);
    }

    /// Adjust a group's master volume by a signed amount and re-apply it.
    ///
    /// Useful for in-game volume controls that move in steps.
    pub fn adjust_master(&mut self, group: VolumeGroup, delta: i32, backend: &mut dyn AudioBackend) {
        self.master.adjust(group, delta);
        self.reapply(group, backend);
    }

    /// Restart whatever is playing in the group so the new master volume is
    /// audible. Sound effects pick the volume up on their next playback.
    fn reapply(&mut self, group: VolumeGroup, backend: &mut dyn AudioBackend) {
        match group {
            VolumeGroup::Bgm => {
                if let Some(track) = self.playing_bgm.clone() {
                    self.play_bgm(track, backend);
                }
            }
            VolumeGroup::Bgs => {
                if let Some(track) = self.playing_bgs.clone() {
                    self.play_bgs(track, backend);
                }
            }
            VolumeGroup::Se => {}
        }
    }

    /// Memorize the playing BGM and its position for a later resume.
    ///
    /// No-op when nothing has been played. The position stays `None` on
    /// backends without positional playback, and resume degrades to a no-op.
    pub fn save_bgm(&mut self, backend: &dyn AudioBackend) {
        if let Some(track) = &self.playing_bgm {
            self.memorized_bgm = Some(track.clone());
            self.memorized_position = backend.bgm_position();
        }
    }

    /// Resume the memorized BGM from its saved position and clear the memo.
    ///
    /// No-op when there is no memo, no saved position, or the memorized
    /// track is silent.
    pub fn resume_bgm(&mut self, backend: &mut dyn AudioBackend) {
        let Some(track) = self.memorized_bgm.take() else {
            return;
        };
        let Some(position) = self.memorized_position.take() else {
            return;
        };
        if track.is_silent() {
            return;
        }
        let volume = self.master.effective(VolumeGroup::Bgm, track.volume);
        backend.play(
            Channel::Bgm,
            &track.asset_path(Channel::Bgm),
            volume,
            track.pitch,
            Some(position),
        );
        self.playing_bgm = Some(track);
    }

    /// Apply the indoor volume adjustment after a map transfer.
    ///
    /// Entering an indoor map saves the BGM/BGS master volumes once and
    /// lowers both by `duck_percent`; the saved-volume guard keeps repeated
    /// indoor transfers from ducking twice. Leaving restores the saved
    /// values exactly once. `ducking_disabled` mirrors the host switch that
    /// suppresses the whole adjustment, for cutscenes that drive the volume
    /// themselves.
    pub fn apply_map_transfer(
        &mut self,
        indoor: bool,
        ducking_disabled: bool,
        duck_percent: i32,
        backend: &mut dyn AudioBackend,
    ) {
        if ducking_disabled {
            return;
        }
        if indoor {
            if self.saved_bgm_vol.is_none() {
                self.saved_bgm_vol = Some(self.master.get(VolumeGroup::Bgm));
                self.adjust_master(VolumeGroup::Bgm, -duck_percent, backend);
            }
            if self.saved_bgs_vol.is_none() {
                self.saved_bgs_vol = Some(self.master.get(VolumeGroup::Bgs));
                self.adjust_master(VolumeGroup::Bgs, -duck_percent, backend);
            }
            log::debug!(
                "ducked indoor volume to bgm={} bgs={}",
                self.master.get(VolumeGroup::Bgm),
                self.master.get(VolumeGroup::Bgs)
            );
        } else {
            if let Some(volume) = self.saved_bgm_vol.take() {
                self.set_master(VolumeGroup::Bgm, volume, backend);
            }
            if let Some(volume) = self.saved_bgs_vol.take() {
                self.set_master(VolumeGroup::Bgs, volume, backend);
            }
        }
    }
}
