use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::severity::SeverityBand;

/// Clip file for each severity band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaLibrary {
    pub low: PathBuf,
    pub mid: PathBuf,
    pub high: PathBuf,
}

impl MediaLibrary {
    pub fn clip_for(&self, band: SeverityBand) -> &Path {
        match band {
            SeverityBand::Low => &self.low,
            SeverityBand::Mid => &self.mid,
            SeverityBand::High => &self.high,
        }
    }
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self {
            low: PathBuf::from("low.mp4"),
            mid: PathBuf::from("mid.mp4"),
            high: PathBuf::from("high.mp4"),
        }
    }
}

/// Target surface and pacing of the video loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub display_width: u32,
    pub display_height: u32,
    pub frame_delay: Duration,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            display_width: 800,
            display_height: 300,
            frame_delay: Duration::from_millis(25),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeismographConfig {
    pub media: MediaLibrary,
    pub background_image: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub playback: PlaybackSettings,
    pub ffmpeg_program: String,
    pub ffprobe_program: String,
}

impl Default for SeismographConfig {
    fn default() -> Self {
        Self {
            media: MediaLibrary::default(),
            background_image: PathBuf::from("bg.jpg"),
            window_width: 850,
            window_height: 650,
            playback: PlaybackSettings::default(),
            ffmpeg_program: "ffmpeg".to_string(),
            ffprobe_program: "ffprobe".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_per_band() {
        let library = MediaLibrary::default();
        assert_eq!(library.clip_for(SeverityBand::Low), Path::new("low.mp4"));
        assert_eq!(library.clip_for(SeverityBand::Mid), Path::new("mid.mp4"));
        assert_eq!(library.clip_for(SeverityBand::High), Path::new("high.mp4"));
    }

    #[test]
    fn default_assets_and_surface() {
        let config = SeismographConfig::default();
        assert_eq!(config.media.high, Path::new("high.mp4"));
        assert_eq!(config.background_image, Path::new("bg.jpg"));
        assert_eq!((config.window_width, config.window_height), (850, 650));
        assert_eq!(config.playback.frame_delay, Duration::from_millis(25));
        assert_eq!(
            (config.playback.display_width, config.playback.display_height),
            (800, 300)
        );
    }
}
