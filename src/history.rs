//! Bounded undo/redo log of canvas snapshots.
//!
//! The log is a linear sequence of PNG-encoded snapshots plus a cursor into
//! it. Recording while the cursor is not at the tail discards everything
//! after it (classic linear undo semantics), and the sequence is capped at
//! [`HISTORY_CAP`] entries with oldest-first eviction.

use thiserror::Error;

/// Maximum number of snapshots retained. Recording past this evicts the
/// oldest snapshot, making it unreachable via undo.
pub const HISTORY_CAP: usize = 20;

/// Errors that can occur while decoding a snapshot back into pixels.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to decode snapshot: {0}")]
    Decode(String),

    #[error("snapshot decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A full raster capture of the canvas at one point in time, PNG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    bytes: Vec<u8>,
}

/// Decoded snapshot pixels, ready to be painted back onto a canvas.
///
/// Rows are in cairo's native image format so the canvas can reconstruct a
/// surface from them without conversion. Unlike cairo surfaces this struct is
/// `Send`, which is what lets the decode run on the blocking pool.
#[derive(Debug)]
pub struct DecodedImage {
    pub(crate) format: cairo::Format,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) stride: i32,
    pub(crate) data: Vec<u8>,
}

impl DecodedImage {
    /// Image width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Snapshot {
    /// Wraps already-encoded PNG bytes as a snapshot.
    pub fn from_png(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The encoded PNG bytes of this snapshot.
    pub fn png_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the snapshot into raw pixel rows.
    ///
    /// Decoding runs on the blocking pool; the caller must await the result
    /// before clearing and repainting the canvas. Until the future resolves
    /// the canvas has not been visually updated.
    pub async fn load(&self) -> Result<DecodedImage, HistoryError> {
        let bytes = self.bytes.clone();

        tokio::task::spawn_blocking(move || {
            let mut reader = std::io::Cursor::new(bytes);
            let mut surface = cairo::ImageSurface::create_from_png(&mut reader)
                .map_err(|e| HistoryError::Decode(e.to_string()))?;

            let format = surface.format();
            let width = surface.width();
            let height = surface.height();
            let stride = surface.stride();
            surface.flush();
            let data = surface
                .data()
                .map_err(|e| HistoryError::Decode(e.to_string()))?
                .to_vec();

            Ok(DecodedImage {
                format,
                width,
                height,
                stride,
                data,
            })
        })
        .await?
    }
}

/// Linear undo/redo log with a cursor marking the currently displayed state.
///
/// Invariant: the log always holds at least one snapshot (the initial blank
/// canvas) and the cursor is always a valid index into it.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Creates a history seeded with the initial canvas state.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// Records a new snapshot as the latest state.
    ///
    /// If the cursor is not at the tail, every later snapshot is discarded
    /// first, so redoing past a new stroke is impossible. When the log would
    /// exceed [`HISTORY_CAP`] the oldest snapshot is evicted and the cursor
    /// shifted down so it keeps pointing at the same logical state.
    pub fn record(&mut self, snapshot: Snapshot) {
        if self.index + 1 < self.snapshots.len() {
            self.snapshots.truncate(self.index + 1);
        }

        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;

        if self.snapshots.len() > HISTORY_CAP {
            self.snapshots.remove(0);
            self.index -= 1;
        }
    }

    /// Steps the cursor back and returns the snapshot to restore, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.snapshots[self.index].clone())
    }

    /// Steps the cursor forward and returns the snapshot to restore, or
    /// `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.snapshots[self.index].clone())
    }

    /// The snapshot at the cursor (the currently displayed state).
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.index]
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of snapshots currently retained.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept so `len` satisfies the usual pairing.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }
}
