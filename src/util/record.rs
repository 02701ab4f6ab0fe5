//! Versioned binary state records.
//!
//! A record is a big-endian `i32` version tag followed by one boolean byte.
//! This is the persisted form of a sequence cleaner's `mark_deletions` flag;
//! the accept pattern is configured separately (see [`crate::config`]).

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::warn;

use crate::error::{Result, SieveError};

/// Version tag written by this crate.
pub const STATE_VERSION: i32 = 0;

/// Encoded length of a record in bytes.
pub const STATE_LEN: usize = 5;

/// Write a state record to `writer`.
pub fn write_state<W: Write>(writer: &mut W, mark_deletions: bool) -> Result<()> {
    writer.write_i32::<BigEndian>(STATE_VERSION)?;
    writer.write_u8(mark_deletions as u8)?;
    Ok(())
}

/// Read a state record from `reader`.
///
/// Fails with [`SieveError::VersionMismatch`] before reading the flag if the
/// version tag is not [`STATE_VERSION`].
pub fn read_state<R: Read>(reader: &mut R) -> Result<bool> {
    let version = reader.read_i32::<BigEndian>()?;
    if version != STATE_VERSION {
        warn!("Refusing cleaner state record with version {version}");
        return Err(SieveError::version_mismatch(version, STATE_VERSION));
    }

    Ok(reader.read_u8()? != 0)
}

/// Encode a state record into a new buffer.
pub fn encode_state(mark_deletions: bool) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(STATE_LEN);
    write_state(&mut buf, mark_deletions)?;
    Ok(buf)
}

/// Decode a state record from the start of `bytes`. Trailing bytes are ignored.
pub fn decode_state(mut bytes: &[u8]) -> Result<bool> {
    read_state(&mut bytes)
}
