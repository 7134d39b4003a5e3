//! Severity clip playback on a background thread.
//!
//! At most one [`PlaybackSession`] is alive per [`Player`]. Restarting stops the
//! running session and joins its thread before the next one is spawned, so two
//! sessions never write to the same [`FrameSink`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, info, info_span, warn};

use crate::amplitude::Amplitude;
use crate::config::{MediaLibrary, PlaybackSettings};
use crate::error::MediaError;
use crate::frame::Frame;
use crate::media::{FrameSource, MediaBackend};
use crate::severity::SeverityBand;

/// Create a linked stop handle / stop signal pair.
///
/// Nothing is ever sent on the channel: dropping the sender disconnects it, which
/// every clone of the signal observes.
pub fn stop_signal() -> (StopHandle, StopSignal) {
    let (tx, rx) = channel::bounded(0);
    (StopHandle { tx: Some(tx) }, StopSignal { rx })
}

/// Caller side of the cancellation pair.
#[derive(Debug)]
pub struct StopHandle {
    tx: Option<Sender<()>>,
}

impl StopHandle {
    pub fn stop(&mut self) {
        self.tx.take();
    }

    pub fn is_stopped(&self) -> bool {
        self.tx.is_none()
    }
}

/// Worker side of the cancellation pair.
#[derive(Clone, Debug)]
pub struct StopSignal {
    rx: Receiver<()>,
}

impl StopSignal {
    pub fn is_stopped(&self) -> bool {
        !matches!(self.rx.try_recv(), Err(TryRecvError::Empty))
    }

    /// Sleep for `delay`, waking early if a stop arrives.
    pub fn pace(&self, delay: Duration) {
        let _ = self.rx.recv_timeout(delay);
    }
}

/// Consumer of display-ready frames.
pub trait FrameSink: Send + Sync {
    fn present(&self, frame: Frame);

    /// Discard anything buffered from a previous session.
    fn reset(&self) {}
}

/// Single-slot buffer holding the most recent frame.
///
/// The playback thread overwrites the slot; the UI drains it once per repaint.
#[derive(Clone, Default)]
pub struct FrameSlot {
    latest: Arc<Mutex<Option<Frame>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Frame> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Frame>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrameSink for FrameSlot {
    fn present(&self, frame: Frame) {
        *self.lock() = Some(frame);
    }

    fn reset(&self) {
        self.lock().take();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The clip ran out of frames.
    Completed { frames: usize },
    /// Stopped by the owner.
    Cancelled { frames: usize },
    /// The clip could not be opened or decoded.
    Failed { frames: usize },
}

/// Pump frames from `source` into `sink` until the clip ends or `signal` stops.
///
/// The stop signal is checked at the top of every iteration; each presented
/// frame is followed by a best-effort `frame_delay` pause.
pub fn run_playback(
    source: &mut dyn FrameSource,
    sink: &dyn FrameSink,
    signal: &StopSignal,
    settings: &PlaybackSettings,
) -> PlaybackOutcome {
    let mut frames = 0;
    loop {
        if signal.is_stopped() {
            return PlaybackOutcome::Cancelled { frames };
        }

        let frame = match source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => return PlaybackOutcome::Completed { frames },
            Err(e) => {
                warn!("{e}");
                return PlaybackOutcome::Failed { frames };
            }
        };

        match frame.resize(settings.display_width, settings.display_height) {
            Ok(frame) => sink.present(frame),
            Err(e) => {
                warn!("{e}");
                return PlaybackOutcome::Failed { frames };
            }
        }
        frames += 1;

        signal.pace(settings.frame_delay);
    }
}

/// Open `clip` and play it through [`run_playback`], releasing the source before
/// returning. A stop that arrives before the open skips it.
pub fn play_clip(
    backend: &dyn MediaBackend,
    clip: &Path,
    sink: &dyn FrameSink,
    signal: &StopSignal,
    settings: &PlaybackSettings,
) -> PlaybackOutcome {
    if signal.is_stopped() {
        debug!(clip = %clip.display(), "stopped before open");
        return PlaybackOutcome::Cancelled { frames: 0 };
    }
    let mut source = match backend.open(clip) {
        Ok(source) => source,
        Err(e) => {
            warn!("{e}");
            return PlaybackOutcome::Failed { frames: 0 };
        }
    };
    info!(clip = %clip.display(), "playback started");
    let outcome = run_playback(source.as_mut(), sink, signal, settings);
    drop(source);
    info!(?outcome, "playback ended");
    outcome
}

/// One clip playing on its own thread.
pub struct PlaybackSession {
    id: u64,
    band: SeverityBand,
    stop: StopHandle,
    worker: Option<JoinHandle<PlaybackOutcome>>,
}

impl PlaybackSession {
    /// Spawn a thread that opens `clip` and plays it into `sink`.
    ///
    /// # Errors
    ///
    /// Only thread creation can fail here; open and decode failures are logged
    /// by the worker and reported through [`PlaybackSession::stop`].
    pub fn spawn(
        id: u64,
        band: SeverityBand,
        clip: PathBuf,
        backend: Arc<dyn MediaBackend>,
        sink: Arc<dyn FrameSink>,
        settings: PlaybackSettings,
    ) -> Result<Self, MediaError> {
        let (stop, signal) = stop_signal();
        let worker = thread::Builder::new()
            .name(format!("playback-{id}"))
            .spawn(move || {
                let _span = info_span!("playback", session = id, band = band.name()).entered();
                play_clip(backend.as_ref(), &clip, sink.as_ref(), &signal, &settings)
            })
            .map_err(MediaError::Spawn)?;

        Ok(Self {
            id,
            band,
            stop,
            worker: Some(worker),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signal the worker and wait for it to exit.
    pub fn stop(mut self) -> Option<PlaybackOutcome> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<PlaybackOutcome> {
        self.stop.stop();
        let worker = self.worker.take()?;
        match worker.join() {
            Ok(outcome) => Some(outcome),
            Err(_) => {
                warn!(session = self.id, "playback thread panicked");
                None
            }
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Owns the single active playback session.
pub struct Player {
    backend: Arc<dyn MediaBackend>,
    library: MediaLibrary,
    sink: Arc<dyn FrameSink>,
    settings: PlaybackSettings,
    current: Option<PlaybackSession>,
    next_id: u64,
}

impl Player {
    pub fn new(
        backend: Arc<dyn MediaBackend>,
        library: MediaLibrary,
        sink: Arc<dyn FrameSink>,
        settings: PlaybackSettings,
    ) -> Self {
        Self {
            backend,
            library,
            sink,
            settings,
            current: None,
            next_id: 0,
        }
    }

    /// Stop whatever is playing, then start the clip for `amplitude`.
    ///
    /// # Errors
    ///
    /// [`MediaError::Spawn`] if the playback thread cannot be created.
    pub fn restart(&mut self, amplitude: Amplitude) -> Result<SeverityBand, MediaError> {
        self.stop();

        let band = SeverityBand::for_amplitude(amplitude.value());
        let clip = self.library.clip_for(band).to_path_buf();
        self.next_id += 1;
        debug!(session = self.next_id, %amplitude, band = band.name(), "starting playback");
        let session = PlaybackSession::spawn(
            self.next_id,
            band,
            clip,
            Arc::clone(&self.backend),
            Arc::clone(&self.sink),
            self.settings,
        )?;
        self.current = Some(session);
        Ok(band)
    }

    /// Stop and join the current session, if any.
    pub fn stop(&mut self) -> Option<PlaybackOutcome> {
        let outcome = self.current.take().and_then(PlaybackSession::stop);
        self.sink.reset();
        outcome
    }

    pub fn is_playing(&self) -> bool {
        self.current.as_ref().is_some_and(|s| !s.is_finished())
    }

    pub fn current_band(&self) -> Option<SeverityBand> {
        self.current.as_ref().map(|session| session.band)
    }
}
