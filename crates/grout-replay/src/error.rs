//! Error types for the replay system.

use std::fmt;
use std::io;

use grout_engine::ConfigError;

/// Errors that can occur during replay recording, playback, or comparison.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file does not start with the expected `b"GRUT"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// A header or frame could not be decoded (truncated or corrupt data).
    MalformedFrame {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A tag byte is not recognized.
    UnknownTag {
        /// Which field the tag belongs to.
        field: &'static str,
        /// The unrecognized tag.
        tag: u8,
    },
    /// The header does not describe a valid puzzle.
    Config(ConfigError),
    /// A state hash does not match between recorded and replayed state.
    SnapshotMismatch {
        /// The move at which the mismatch was detected.
        move_index: u64,
        /// Hash from the replay file.
        recorded: u64,
        /// Hash computed from the replayed puzzle.
        replayed: u64,
    },
    /// The replayed move was accepted or rejected differently, or
    /// emitted a different event, than the recording.
    OutcomeMismatch {
        /// The move at which the mismatch was detected.
        move_index: u64,
        /// Human-readable description of the difference.
        detail: String,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"GRUT\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedFrame { detail } => write!(f, "malformed frame: {detail}"),
            Self::UnknownTag { field, tag } => write!(f, "unknown {field} tag {tag}"),
            Self::Config(e) => write!(f, "invalid puzzle in header: {e}"),
            Self::SnapshotMismatch {
                move_index,
                recorded,
                replayed,
            } => {
                write!(
                    f,
                    "state mismatch at move {move_index}: \
                     recorded={recorded:#018x}, replayed={replayed:#018x}"
                )
            }
            Self::OutcomeMismatch { move_index, detail } => {
                write!(f, "outcome mismatch at move {move_index}: {detail}")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for ReplayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
