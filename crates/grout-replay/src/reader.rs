//! Replay playback reader.
//!
//! [`ReplayReader`] reads frames from any `Read` source, decoding the
//! binary replay format. The header is validated on construction.

use std::io::Read;

use crate::codec::{decode_frame, decode_header};
use crate::error::ReplayError;
use crate::types::{Frame, InitDescriptor};

/// Reads replay data from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct ReplayReader<R: Read> {
    reader: R,
    init: InitDescriptor,
    frames_read: u64,
}

impl<R: Read> ReplayReader<R> {
    /// Open a replay stream, reading and validating the header.
    pub fn open(mut reader: R) -> Result<Self, ReplayError> {
        let init = decode_header(&mut reader)?;
        Ok(Self {
            reader,
            init,
            frames_read: 0,
        })
    }

    /// Initialization descriptor from the replay header.
    pub fn init_descriptor(&self) -> &InitDescriptor {
        &self.init
    }

    /// Read the next frame, or `None` if the stream is exhausted.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, ReplayError> {
        let frame = decode_frame(&mut self.reader)?;
        if frame.is_some() {
            self.frames_read += 1;
        }
        Ok(frame)
    }

    /// Number of frames read so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Convert into a frame iterator.
    pub fn frames(self) -> FrameIter<R> {
        FrameIter {
            reader: self.reader,
            done: false,
        }
    }
}

/// Iterator adapter over replay frames.
///
/// Yields at most one error, then stops.
pub struct FrameIter<R: Read> {
    reader: R,
    done: bool,
}

impl<R: Read> Iterator for FrameIter<R> {
    type Item = Result<Frame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_frame(&mut self.reader) {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
