//! Audio cue dispatch
//!
//! The game never mixes or plays sound itself; it emits cues with an
//! effective volume and an `AudioSink` decides what to do with them.

use serde::{Deserialize, Serialize};

use crate::settings::AudioSettings;

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Plane flapped
    Jump,
    /// Start the looping soundtrack (once, at start-up)
    BackgroundMusicLoop,
}

impl AudioCue {
    pub fn is_music(&self) -> bool {
        matches!(self, AudioCue::BackgroundMusicLoop)
    }
}

/// Consumer of audio cues (owned by the presentation layer)
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue, volume: f32);
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        (**self).play(cue, volume);
    }
}

/// Sink that only logs cues
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        log::debug!("Audio cue {:?} at volume {:.2}", cue, volume);
    }
}

/// Sink that records cues, for tests and replays
#[derive(Debug, Default)]
pub struct MemoryAudioSink {
    pub played: Vec<(AudioCue, f32)>,
}

impl AudioSink for MemoryAudioSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        self.played.push((cue, volume));
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &AudioSettings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume for a cue
    fn effective_volume(&self, cue: AudioCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if cue.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Forward a cue to the sink; silent cues are dropped
    pub fn play(&mut self, cue: AudioCue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        self.sink.play(cue, vol);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_scale_by_master() {
        let settings = AudioSettings {
            master_volume: 0.5,
            sfx_volume: 0.3,
            music_volume: 1.0,
            muted: false,
        };
        let mut audio = AudioManager::new(MemoryAudioSink::default(), &settings);
        audio.play(AudioCue::Jump);
        audio.play(AudioCue::BackgroundMusicLoop);
        let played = &audio.sink().played;
        assert_eq!(played[0].0, AudioCue::Jump);
        assert!((played[0].1 - 0.15).abs() < 1e-6);
        assert_eq!(played[1], (AudioCue::BackgroundMusicLoop, 0.5));
    }

    #[test]
    fn test_muted_drops_cues() {
        let mut audio = AudioManager::new(MemoryAudioSink::default(), &AudioSettings::default());
        audio.set_muted(true);
        audio.play(AudioCue::Jump);
        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_volumes_are_clamped() {
        let mut audio = AudioManager::new(MemoryAudioSink::default(), &AudioSettings::default());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(AudioCue::Jump);
        audio.play(AudioCue::BackgroundMusicLoop);
        assert_eq!(audio.sink().played, vec![(AudioCue::BackgroundMusicLoop, 1.0)]);
    }
}
