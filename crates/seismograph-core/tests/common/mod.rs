#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use seismograph_core::{
    ChannelOrder, Frame, FrameSink, FrameSource, MediaBackend, MediaError, MediaLibrary,
    PlaybackSettings, Player,
};

pub const WIDTH: u32 = 4;
pub const HEIGHT: u32 = 2;

/// In-memory clips. Every frame of the n-th opened clip is filled with byte `n`.
#[derive(Default)]
pub struct FakeBackend {
    pub frames_per_clip: Option<usize>,
    pub missing: Vec<PathBuf>,
    pub opens: AtomicUsize,
    pub active: Arc<AtomicUsize>,
    pub opened: Mutex<Vec<PathBuf>>,
}

impl FakeBackend {
    pub fn endless() -> Self {
        Self::default()
    }

    pub fn with_frames(count: usize) -> Self {
        Self {
            frames_per_clip: Some(count),
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl MediaBackend for FakeBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn FrameSource>, MediaError> {
        if self.missing.iter().any(|m| m == path) {
            return Err(MediaError::Open {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            });
        }
        let serial = self.opens.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.fetch_add(1, Ordering::SeqCst);
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(Box::new(FakeSource {
            serial: serial as u8,
            remaining: self.frames_per_clip,
            active: Arc::clone(&self.active),
        }))
    }
}

struct FakeSource {
    serial: u8,
    remaining: Option<usize>,
    active: Arc<AtomicUsize>,
}

impl FrameSource for FakeSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, MediaError> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Ok(None);
            }
            *remaining -= 1;
        }
        let pixels = vec![self.serial; (WIDTH * HEIGHT * 3) as usize];
        Frame::new(WIDTH, HEIGHT, ChannelOrder::Rgb, pixels).map(Some)
    }
}

impl Drop for FakeSource {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Records the clip serial of every presented frame and flags any frame that
/// arrives while more than one clip is open.
pub struct RecordingSink {
    pub seen: Mutex<Vec<u8>>,
    pub active: Arc<AtomicUsize>,
    pub overlap: AtomicBool,
}

impl RecordingSink {
    pub fn new(backend: &FakeBackend) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            active: Arc::clone(&backend.active),
            overlap: AtomicBool::new(false),
        }
    }

    pub fn seen(&self) -> Vec<u8> {
        self.seen.lock().unwrap().clone()
    }
}

impl FrameSink for RecordingSink {
    fn present(&self, frame: Frame) {
        if self.active.load(Ordering::SeqCst) != 1 {
            self.overlap.store(true, Ordering::SeqCst);
        }
        self.seen.lock().unwrap().push(frame.pixels()[0]);
    }
}

pub fn settings() -> PlaybackSettings {
    PlaybackSettings {
        display_width: WIDTH,
        display_height: HEIGHT,
        frame_delay: Duration::from_millis(1),
    }
}

pub fn player(backend: &Arc<FakeBackend>, sink: &Arc<RecordingSink>) -> Player {
    Player::new(
        Arc::clone(backend) as Arc<dyn MediaBackend>,
        MediaLibrary::default(),
        Arc::clone(sink) as Arc<dyn FrameSink>,
        settings(),
    )
}

/// Poll `condition` for up to five seconds.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    condition()
}
