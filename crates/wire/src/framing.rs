// Stop-byte framing for serial links.
//
// Devices talk over byte streams (Bluetooth RFCOMM, pipes) with no length
// prefix: each wire message is followed by a single STOP_BYTE. Both functions
// work on raw bytes and any `Read`/`Write`, so the transport stays outside this
// crate. Wrap slow readers in a `BufReader`; `read_frame` pulls one byte at a
// time.
//
// STOP_BYTE is not escaped, so a message containing it cannot be framed.
// `write_frame` refuses such payloads instead of sending a frame the other
// side would split in two. STOP_BYTE is ASCII `}`: fixed device messages only
// hit it with a field value of 125, but a stats dump hits it with any score
// byte of 125 or any `}` in a player name. Stats dumps belong on a transport
// with its own message boundaries (datagrams, length-prefixed streams), not
// on stop-byte framing.

use std::io::{self, Read, Write};

/// Terminator appended to every frame.
pub const STOP_BYTE: u8 = 125;

/// Largest accepted frame payload. Device messages are a handful of bytes;
/// stats dumps for a full match stay well below this.
pub const MAX_FRAME_SIZE: usize = 4096;

/// Write one frame: payload, then `STOP_BYTE`.
pub fn write_frame<W: Write>(writer: &mut W, msg: &[u8]) -> io::Result<()> {
    if msg.len() > MAX_FRAME_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("frame too large: {} bytes (max {MAX_FRAME_SIZE})", msg.len()),
        ));
    }
    if let Some(pos) = msg.iter().position(|&b| b == STOP_BYTE) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("payload contains stop byte at offset {pos}"),
        ));
    }
    writer.write_all(msg)?;
    writer.write_all(&[STOP_BYTE])?;
    writer.flush()?;
    Ok(())
}

/// Read the next non-empty frame.
///
/// Returns `Ok(None)` if the stream ends cleanly between frames,
/// `UnexpectedEof` if it ends mid-frame, and `InvalidData` if a frame grows
/// past `MAX_FRAME_SIZE`. Consecutive stop bytes are skipped.
pub fn read_frame<R: Read>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut frame = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) if frame.is_empty() => return Ok(None),
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("stream closed after {} bytes of an unterminated frame", frame.len()),
                ));
            }
            Ok(_) if byte[0] == STOP_BYTE => {
                if !frame.is_empty() {
                    return Ok(Some(frame));
                }
            }
            Ok(_) => {
                if frame.len() == MAX_FRAME_SIZE {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("frame exceeds {MAX_FRAME_SIZE} bytes without a stop byte"),
                    ));
                }
                frame.push(byte[0]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
