//! Core of the seismograph teaching tool: a fuzzy soil-weighted magnitude
//! formula, random earthquake amplitudes and the severity clip player.
//!
//! Nothing here depends on a GUI toolkit; the desktop app drives
//! [`Seismograph`] and drains frames from a [`FrameSlot`].

pub mod amplitude;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod magnitude;
pub mod media;
pub mod outcome;
pub mod playback;
pub mod severity;

pub use amplitude::{Amplitude, AmplitudeGenerator, MAX_AMPLITUDE, MIN_AMPLITUDE};
pub use config::{MediaLibrary, PlaybackSettings, SeismographConfig};
pub use controller::{MagnitudeReport, Seismograph, SoilSelection};
pub use error::{CalculateError, MagnitudeError, MediaError};
pub use frame::{ChannelOrder, Frame};
pub use magnitude::{
    approximate_log10, calculate_magnitude, fuzzy_k, SoilType, SoilWeights, REFINEMENT_ROUNDS,
};
pub use media::{FfmpegBackend, FrameSource, MediaBackend};
pub use outcome::Outcome;
pub use playback::{
    play_clip, run_playback, stop_signal, FrameSink, FrameSlot, PlaybackOutcome, PlaybackSession, Player,
    StopHandle, StopSignal,
};
pub use severity::SeverityBand;
