//! Binary codec for decoding the turtle command stream.
//!
//! Wire format:
//! ```text
//! [opcode:i32 big-endian][argument:i32 big-endian]   for opcodes 1-4
//! [opcode:i32 big-endian]                            for opcodes 0, 5, 6
//! ```
//! The protocol is receive-only; nothing is ever encoded or written back.
//!
//! An opcode outside the 0-6 table is still consumed (exactly 4 bytes) and
//! surfaced as [`Frame::Unknown`] so the caller can skip it and resume at the
//! next frame boundary. This matches the fixed wire contract: an unknown
//! opcode is a pass-through no-op, not an error.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::protocol::command::{opcode, Command};

/// Errors that can occur while decoding the next frame from the link.
///
/// Every variant ends the current session; none of them are recoverable
/// within a session because the stream position is no longer trustworthy.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The link failed or the stream ended while reading an opcode. A clean
    /// end-of-stream at a frame boundary lands here as `UnexpectedEof`.
    #[error("link read failed: {0}")]
    Read(#[from] std::io::Error),

    /// The stream ended inside a frame that still owed its argument.
    #[error("truncated frame: opcode {opcode} is missing its 4-byte argument")]
    TruncatedFrame { opcode: i32 },
}

/// One decoded protocol unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// A recognised command, ready for dispatch.
    Command(Command),
    /// An opcode outside the 0-6 table, already consumed from the stream.
    /// Dispatches to no action and produces no status update.
    Unknown(i32),
}

/// Decodes the next frame from `reader`.
///
/// Blocks (asynchronously) until a full frame is available. Exactly 4 bytes
/// are consumed for argument-less and unknown opcodes, exactly 8 for the
/// movement opcodes 1-4.
///
/// # Errors
///
/// Returns [`DecodeError`] when the stream ends or fails mid-frame; the
/// caller must treat the session as over.
pub async fn decode_next<R>(reader: &mut R) -> Result<Frame, DecodeError>
where
    R: AsyncRead + Unpin,
{
    let op = reader.read_i32().await?;

    let frame = match op {
        opcode::QUIT => Frame::Command(Command::Quit),
        opcode::FORWARD => Frame::Command(Command::Forward(read_argument(reader, op).await?)),
        opcode::BACKWARD => Frame::Command(Command::Backward(read_argument(reader, op).await?)),
        opcode::TURN_LEFT => Frame::Command(Command::TurnLeft(read_argument(reader, op).await?)),
        opcode::TURN_RIGHT => Frame::Command(Command::TurnRight(read_argument(reader, op).await?)),
        opcode::PEN_UP => Frame::Command(Command::PenUp),
        opcode::PEN_DOWN => Frame::Command(Command::PenDown),
        other => Frame::Unknown(other),
    };
    Ok(frame)
}

/// Reads the 4-byte argument owed by `op`. End-of-stream here is a
/// truncated frame, not a clean link close.
async fn read_argument<R>(reader: &mut R, op: i32) -> Result<i32, DecodeError>
where
    R: AsyncRead + Unpin,
{
    match reader.read_i32().await {
        Ok(value) => Ok(value),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            Err(DecodeError::TruncatedFrame { opcode: op })
        }
        Err(e) => Err(DecodeError::Read(e)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a wire stream from a list of big-endian i32 values.
    fn stream_of(values: &[i32]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(values.len() * 4);
        for v in values {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        bytes
    }

    #[tokio::test]
    async fn test_decode_quit_consumes_four_bytes() {
        let bytes = stream_of(&[0]);
        let mut reader = &bytes[..];

        let frame = decode_next(&mut reader).await.unwrap();

        assert_eq!(frame, Frame::Command(Command::Quit));
        assert!(reader.is_empty(), "quit is a 4-byte frame");
    }

    #[tokio::test]
    async fn test_decode_forward_reads_opcode_and_argument() {
        let bytes = stream_of(&[1, 3]);
        let mut reader = &bytes[..];

        let frame = decode_next(&mut reader).await.unwrap();

        assert_eq!(frame, Frame::Command(Command::Forward(3)));
        assert!(reader.is_empty(), "forward is an 8-byte frame");
    }

    #[tokio::test]
    async fn test_decode_all_movement_commands() {
        let bytes = stream_of(&[1, 10, 2, 20, 3, 30, 4, 40]);
        let mut reader = &bytes[..];

        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::Forward(10))
        );
        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::Backward(20))
        );
        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::TurnLeft(30))
        );
        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::TurnRight(40))
        );
    }

    #[tokio::test]
    async fn test_decode_pen_commands_take_no_argument() {
        let bytes = stream_of(&[5, 6]);
        let mut reader = &bytes[..];

        assert_eq!(decode_next(&mut reader).await.unwrap(), Frame::Command(Command::PenUp));
        assert_eq!(decode_next(&mut reader).await.unwrap(), Frame::Command(Command::PenDown));
        assert!(reader.is_empty());
    }

    #[tokio::test]
    async fn test_decode_negative_argument() {
        let bytes = stream_of(&[1, -7]);
        let mut reader = &bytes[..];

        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::Forward(-7))
        );
    }

    #[tokio::test]
    async fn test_unknown_opcode_consumes_exactly_four_bytes_and_resumes() {
        // Unknown opcode 99, then a valid Forward(2) frame.
        let bytes = stream_of(&[99, 1, 2]);
        let mut reader = &bytes[..];

        assert_eq!(decode_next(&mut reader).await.unwrap(), Frame::Unknown(99));
        assert_eq!(
            decode_next(&mut reader).await.unwrap(),
            Frame::Command(Command::Forward(2))
        );
        assert!(reader.is_empty());
    }

    #[tokio::test]
    async fn test_negative_opcode_is_unknown() {
        let bytes = stream_of(&[-1]);
        let mut reader = &bytes[..];

        assert_eq!(decode_next(&mut reader).await.unwrap(), Frame::Unknown(-1));
    }

    #[tokio::test]
    async fn test_end_of_stream_at_frame_boundary_is_read_error() {
        let mut reader: &[u8] = &[];

        let result = decode_next(&mut reader).await;

        assert!(matches!(result, Err(DecodeError::Read(_))));
    }

    #[tokio::test]
    async fn test_truncated_opcode_is_read_error() {
        // Only 2 of the 4 opcode bytes arrive.
        let mut reader: &[u8] = &[0x00, 0x00];

        let result = decode_next(&mut reader).await;

        assert!(matches!(result, Err(DecodeError::Read(_))));
    }

    #[tokio::test]
    async fn test_truncated_argument_is_truncated_frame_error() {
        // Forward opcode followed by only half its argument.
        let mut bytes = stream_of(&[1]);
        bytes.extend_from_slice(&[0x00, 0x00]);
        let mut reader = &bytes[..];

        let result = decode_next(&mut reader).await;

        assert!(matches!(result, Err(DecodeError::TruncatedFrame { opcode: 1 })));
    }

    #[tokio::test]
    async fn test_missing_argument_is_truncated_frame_error() {
        // TurnRight opcode with no argument bytes at all.
        let bytes = stream_of(&[4]);
        let mut reader = &bytes[..];

        let result = decode_next(&mut reader).await;

        assert!(matches!(result, Err(DecodeError::TruncatedFrame { opcode: 4 })));
    }

    #[tokio::test]
    async fn test_io_error_while_reading_argument_is_read_error() {
        // Script a clean opcode read followed by a hard I/O failure.
        let mut reader = tokio_test::io::Builder::new()
            .read(&1i32.to_be_bytes())
            .read_error(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "link dropped"))
            .build();

        let result = decode_next(&mut reader).await;

        assert!(matches!(result, Err(DecodeError::Read(_))));
    }
}
