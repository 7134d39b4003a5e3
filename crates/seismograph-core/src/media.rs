//! Clip decoding.
//!
//! [`FfmpegBackend`] shells out to `ffprobe` for the stream dimensions and to
//! `ffmpeg` for raw `rgb24` frames on stdout. Anything else that can produce
//! [`Frame`]s (tests use in-memory sources) plugs in through [`MediaBackend`].

use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::{debug, warn};

use crate::error::MediaError;
use crate::frame::{frame_len, ChannelOrder, Frame};

/// A stream of decoded frames. Dropping the source releases it.
pub trait FrameSource: Send {
    /// Next frame, or `None` once the clip is exhausted.
    fn next_frame(&mut self) -> Result<Option<Frame>, MediaError>;
}

pub trait MediaBackend: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn FrameSource>, MediaError>;
}

#[derive(Clone, Debug)]
pub struct FfmpegBackend {
    ffmpeg: String,
    ffprobe: String,
}

impl Default for FfmpegBackend {
    fn default() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }
}

impl FfmpegBackend {
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), MediaError> {
        let output = Command::new(&self.ffprobe)
            .arg("-v")
            .arg("error")
            .arg("-select_streams")
            .arg("v:0")
            .arg("-show_entries")
            .arg("stream=width,height")
            .arg("-of")
            .arg("csv=p=0:s=x")
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| open_error(path, format!("failed to run {}: {e}", self.ffprobe)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(open_error(path, stderr.trim().to_string()));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_dimensions(&stdout)
            .ok_or_else(|| open_error(path, format!("no video stream ({})", stdout.trim())))
    }
}

impl MediaBackend for FfmpegBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn FrameSource>, MediaError> {
        if !path.is_file() {
            return Err(open_error(path, "no such file".to_string()));
        }
        let (width, height) = self.probe_dimensions(path)?;

        let mut child = Command::new(&self.ffmpeg)
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            // Keep the output size equal to the probed stream size.
            .arg("-noautorotate")
            .arg("-i")
            .arg(path)
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg("rgb24")
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| open_error(path, format!("failed to run {}: {e}", self.ffmpeg)))?;

        let Some(stdout) = child.stdout.take() else {
            reap(&mut child);
            return Err(open_error(path, "decoder stdout unavailable".to_string()));
        };

        debug!(path = %path.display(), width, height, "opened clip");
        Ok(Box::new(FfmpegSource {
            path: path.to_path_buf(),
            child,
            stdout: BufReader::new(stdout),
            width,
            height,
        }))
    }
}

struct FfmpegSource {
    path: PathBuf,
    child: Child,
    stdout: BufReader<ChildStdout>,
    width: u32,
    height: u32,
}

impl FrameSource for FfmpegSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, MediaError> {
        let mut pixels = vec![0u8; frame_len(self.width, self.height)];
        match self.stdout.read_exact(&mut pixels) {
            Ok(()) => Frame::new(self.width, self.height, ChannelOrder::Rgb, pixels).map(Some),
            // A short trailing read means the decoder has finished.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(MediaError::Decode {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        reap(&mut self.child);
    }
}

fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        // Already exited; nothing to kill.
        if e.kind() != io::ErrorKind::InvalidInput {
            warn!("failed to stop decoder: {e}");
        }
    }
    if let Err(e) = child.wait() {
        warn!("failed to reap decoder: {e}");
    }
}

fn open_error(path: &Path, reason: String) -> MediaError {
    MediaError::Open {
        path: path.to_path_buf(),
        reason,
    }
}

/// Parse ffprobe's `WIDTHxHEIGHT` line.
fn parse_dimensions(output: &str) -> Option<(u32, u32)> {
    let line = output.lines().map(str::trim).find(|l| !l.is_empty())?;
    let (w, h) = line.split_once('x')?;
    let width = w.trim().parse().ok()?;
    let height = h.trim().trim_end_matches('x').parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}
