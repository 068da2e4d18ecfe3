//! Protocol module containing the command types and the binary codec.

pub mod codec;
pub mod command;

pub use codec::{decode_next, DecodeError, Frame};
pub use command::Command;
