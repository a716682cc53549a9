//! Binary encode/decode for the replay format.
//!
//! All integers are little-endian. The format is intentionally simple:
//! no compression, no alignment padding, no self-describing schema.
//!
//! Header:
//!
//! ```text
//! magic        [u8; 4]   b"GRUT"
//! version      u8        FORMAT_VERSION
//! rows         u32
//! cols         u32
//! placement    u8        0 = extreme, 1 = order-preserving
//! count        u32       rows * cols
//! positions    u32 x count   cell of piece i
//! checksum     u64       FNV-1a of the positions
//! ```
//!
//! Frame (34 bytes):
//!
//! ```text
//! move_index   u64
//! unit         u64
//! delta        i64
//! accepted     u8        0 or 1
//! event        u8        0 = none, 1 = error, 2 = merge, 3 = complete
//! state_hash   u64       hash of the state after the move
//! ```

use std::io::{Read, Write};

use grout_core::{MoveEvent, UnitId};
use grout_engine::hash::layout_hash;
use grout_engine::ObstaclePlacement;

use crate::error::ReplayError;
use crate::types::{Frame, InitDescriptor};
use crate::{FORMAT_VERSION, MAGIC};

/// Upper bound on positions reserved before any are read.
const MAX_PREALLOC: usize = 4096;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ReplayError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i64.
pub fn write_i64_le(w: &mut dyn Write, v: i64) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ReplayError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, ReplayError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, ReplayError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian i64.
pub fn read_i64_le(r: &mut dyn Read) -> Result<i64, ReplayError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}

/// Map a short read inside a frame to `MalformedFrame`.
fn truncated(what: &str) -> impl FnOnce(ReplayError) -> ReplayError + '_ {
    move |e| match e {
        ReplayError::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            ReplayError::MalformedFrame {
                detail: format!("truncated {what}"),
            }
        }
        other => other,
    }
}

// ── Tags ────────────────────────────────────────────────────────

/// Encode an optional event as one byte: 0 none, 1 error, 2 merge, 3 complete.
pub fn event_tag(event: Option<MoveEvent>) -> u8 {
    match event {
        None => 0,
        Some(MoveEvent::Error) => 1,
        Some(MoveEvent::Merge) => 2,
        Some(MoveEvent::Complete) => 3,
    }
}

/// Inverse of [`event_tag`].
pub fn event_from_tag(tag: u8) -> Result<Option<MoveEvent>, ReplayError> {
    match tag {
        0 => Ok(None),
        1 => Ok(Some(MoveEvent::Error)),
        2 => Ok(Some(MoveEvent::Merge)),
        3 => Ok(Some(MoveEvent::Complete)),
        _ => Err(ReplayError::UnknownTag {
            field: "event",
            tag,
        }),
    }
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode the replay file header (magic, version, init descriptor).
pub fn encode_header(w: &mut dyn Write, init: &InitDescriptor) -> Result<(), ReplayError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;

    write_u32_le(w, init.rows)?;
    write_u32_le(w, init.cols)?;
    write_u8(w, init.placement.tag())?;
    write_u32_le(w, init.positions.len() as u32)?;
    for &pos in &init.positions {
        write_u32_le(w, pos as u32)?;
    }
    write_u64_le(w, layout_hash(&init.positions))?;
    Ok(())
}

/// Decode and validate the replay file header.
pub fn decode_header(r: &mut dyn Read) -> Result<InitDescriptor, ReplayError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(ReplayError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: version });
    }

    let rows = read_u32_le(r).map_err(truncated("header"))?;
    let cols = read_u32_le(r).map_err(truncated("header"))?;
    let tag = read_u8(r).map_err(truncated("header"))?;
    let placement = ObstaclePlacement::from_tag(tag).ok_or(ReplayError::UnknownTag {
        field: "placement",
        tag,
    })?;

    let count = read_u32_le(r).map_err(truncated("header"))? as usize;
    let expected = (rows as usize).saturating_mul(cols as usize);
    if count != expected {
        return Err(ReplayError::MalformedFrame {
            detail: format!("layout lists {count} pieces for a {rows}x{cols} grid"),
        });
    }
    // The count is untrusted; reserve a bounded amount and grow as read.
    let mut positions = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        positions.push(read_u32_le(r).map_err(truncated("layout"))? as usize);
    }
    let checksum = read_u64_le(r).map_err(truncated("layout"))?;
    if checksum != layout_hash(&positions) {
        return Err(ReplayError::MalformedFrame {
            detail: "layout checksum mismatch".into(),
        });
    }

    Ok(InitDescriptor {
        rows,
        cols,
        placement,
        positions,
    })
}

// ── Frame encode/decode ─────────────────────────────────────────

/// Encode a single replay frame.
pub fn encode_frame(w: &mut dyn Write, frame: &Frame) -> Result<(), ReplayError> {
    write_u64_le(w, frame.move_index)?;
    write_u64_le(w, frame.unit.0)?;
    write_i64_le(w, frame.delta)?;
    write_u8(w, u8::from(frame.accepted))?;
    write_u8(w, event_tag(frame.event))?;
    write_u64_le(w, frame.state_hash)?;
    Ok(())
}

/// Decode a single replay frame.
///
/// Returns `Ok(None)` on clean EOF (no bytes available), `Ok(Some(frame))`
/// on success, or an error on truncated/corrupt data.
pub fn decode_frame(r: &mut dyn Read) -> Result<Option<Frame>, ReplayError> {
    // Read the move index byte-by-byte to distinguish clean EOF
    // (zero bytes available) from truncation (1-7 bytes before EOF).
    let mut index_buf = [0u8; 8];
    let mut filled = 0;
    while filled < 8 {
        match r.read(&mut index_buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(ReplayError::MalformedFrame {
                    detail: format!(
                        "truncated frame header: got {filled} of 8 bytes for move_index"
                    ),
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReplayError::Io(e)),
        }
    }
    let move_index = u64::from_le_bytes(index_buf);

    let unit = UnitId(read_u64_le(r).map_err(truncated("frame"))?);
    let delta = read_i64_le(r).map_err(truncated("frame"))?;
    let accepted = match read_u8(r).map_err(truncated("frame"))? {
        0 => false,
        1 => true,
        tag => {
            return Err(ReplayError::UnknownTag {
                field: "accepted",
                tag,
            })
        }
    };
    let event = event_from_tag(read_u8(r).map_err(truncated("frame"))?)?;
    let state_hash = read_u64_le(r).map_err(truncated("frame"))?;

    Ok(Some(Frame {
        move_index,
        unit,
        delta,
        accepted,
        event,
        state_hash,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() -> InitDescriptor {
        InitDescriptor {
            rows: 2,
            cols: 3,
            placement: ObstaclePlacement::OrderPreserving,
            positions: vec![5, 4, 3, 2, 1, 0],
        }
    }

    fn frame() -> Frame {
        Frame {
            move_index: 7,
            unit: UnitId(12),
            delta: -3,
            accepted: true,
            event: Some(MoveEvent::Merge),
            state_hash: 0xDEAD_BEEF,
        }
    }

    #[test]
    fn header_roundtrip() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &init()).unwrap();
        assert_eq!(&buf[..4], b"GRUT");
        assert_eq!(buf[4], FORMAT_VERSION);
        let decoded = decode_header(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, init());
    }

    #[test]
    fn frame_roundtrip_and_clean_eof() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &frame()).unwrap();
        assert_eq!(buf.len(), 8 + 8 + 8 + 1 + 1 + 8);
        let mut r = buf.as_slice();
        assert_eq!(decode_frame(&mut r).unwrap(), Some(frame()));
        assert_eq!(decode_frame(&mut r).unwrap(), None);
    }

    #[test]
    fn bad_magic_rejected() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &init()).unwrap();
        buf[0] = b'M';
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::InvalidMagic)
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &init()).unwrap();
        buf[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn unknown_placement_tag_rejected() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &init()).unwrap();
        buf[13] = 9;
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::UnknownTag {
                field: "placement",
                tag: 9
            })
        ));
    }

    #[test]
    fn corrupted_layout_fails_checksum() {
        let mut buf = Vec::new();
        encode_header(&mut buf, &init()).unwrap();
        // first position byte follows magic, version, dims, tag, count
        buf[18] ^= 1;
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::MalformedFrame { .. })
        ));
    }

    #[test]
    fn truncated_frames_are_malformed() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &frame()).unwrap();
        for cut in [3, 8, 20, buf.len() - 1] {
            let result = decode_frame(&mut &buf[..cut]);
            assert!(
                matches!(result, Err(ReplayError::MalformedFrame { .. })),
                "cut at {cut}: {result:?}"
            );
        }
    }

    #[test]
    fn unknown_event_tag_rejected() {
        let mut buf = Vec::new();
        encode_frame(&mut buf, &frame()).unwrap();
        buf[25] = 7;
        assert!(matches!(
            decode_frame(&mut buf.as_slice()),
            Err(ReplayError::UnknownTag {
                field: "event",
                tag: 7
            })
        ));
    }

    #[test]
    fn huge_layout_count_in_short_stream_is_malformed() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&65535u32.to_le_bytes());
        buf.extend_from_slice(&65535u32.to_le_bytes());
        buf.push(0);
        buf.extend_from_slice(&(65535u32 * 65535).to_le_bytes());
        assert_eq!(buf.len(), 22);
        assert!(matches!(
            decode_header(&mut buf.as_slice()),
            Err(ReplayError::MalformedFrame { .. })
        ));
    }
}
