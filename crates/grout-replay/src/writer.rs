//! Replay recording writer.
//!
//! [`ReplayWriter`] streams frames to any `Write` sink, encoding the
//! binary replay format. The header is written immediately on construction.

use std::io::Write;

use grout_engine::{DragReport, MoveReport, StepRecord};

use crate::codec::{encode_frame, encode_header};
use crate::error::ReplayError;
use crate::types::{Frame, InitDescriptor};

/// Writes replay data to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use grout_core::UnitId;
/// use grout_engine::{Puzzle, PuzzleConfig};
/// use grout_replay::{InitDescriptor, ReplayReader, ReplayWriter};
///
/// let mut puzzle = Puzzle::with_layout(PuzzleConfig::default(), &[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
///
/// let mut buf = Vec::new();
/// let mut writer = ReplayWriter::new(&mut buf, &InitDescriptor::of(&puzzle)).unwrap();
/// writer.record(&puzzle.try_move(UnitId(1), -1)).unwrap();
/// writer.record(&puzzle.try_move(UnitId(1), 1)).unwrap();
/// assert_eq!(writer.frames_written(), 2);
/// drop(writer);
///
/// let mut reader = ReplayReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.init_descriptor().rows, 3);
/// let first = reader.next_frame().unwrap().unwrap();
/// assert!(!first.accepted);
/// let second = reader.next_frame().unwrap().unwrap();
/// assert_eq!(second.move_index, 1);
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct ReplayWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> ReplayWriter<W> {
    /// Create a new replay writer, immediately writing the header.
    pub fn new(mut writer: W, init: &InitDescriptor) -> Result<Self, ReplayError> {
        encode_header(&mut writer, init)?;
        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Record a single move.
    pub fn record(&mut self, report: &MoveReport<'_>) -> Result<(), ReplayError> {
        let frame = Frame {
            move_index: self.frames_written,
            unit: report.command.unit,
            delta: report.command.delta,
            accepted: report.outcome.is_accepted(),
            event: report.event,
            state_hash: report.state_hash,
        };
        self.write_raw_frame(&frame)
    }

    /// Record one step of a drag.
    pub fn record_step(&mut self, step: &StepRecord) -> Result<(), ReplayError> {
        let frame = Frame {
            move_index: self.frames_written,
            unit: step.command.unit,
            delta: step.command.delta,
            accepted: step.outcome.is_accepted(),
            event: step.event,
            state_hash: step.state_hash,
        };
        self.write_raw_frame(&frame)
    }

    /// Record every step of a drag, one frame per step.
    pub fn record_drag(&mut self, report: &DragReport<'_>) -> Result<(), ReplayError> {
        for step in &report.steps {
            self.record_step(step)?;
        }
        Ok(())
    }

    /// Write a pre-built frame directly (useful for testing).
    pub fn write_raw_frame(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        encode_frame(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReplayError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
