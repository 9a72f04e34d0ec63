//! Type tag reading and the header check shared by every Remote-ID variant.
//!
//! The Cisco type tag is the only little-endian field in the sub-option; everything after it
//! is in network byte order.

use crate::error::Error;
use crate::field;
use byteorder::{ByteOrder, LittleEndian};

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Reads the 2-byte little-endian Remote-ID type tag at `offset`.
///
/// # Returns
///
/// * `Ok(u16)` - The type tag
/// * `Err(Error::BufferTooShort)` - Fewer than 2 bytes remain from `offset`
pub fn read_type_tag(buffer: &[u8], offset: usize) -> Result<u16> {
    let bytes = offset
        .checked_add(field::header::HEADER_LEN)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(Error::BufferTooShort)?;
    Ok(LittleEndian::read_u16(bytes))
}

/// Writes a type tag in little-endian order into the first two bytes of `buffer`.
///
/// The caller guarantees `buffer` holds at least 2 bytes.
pub(crate) fn write_type_tag(buffer: &mut [u8], type_tag: u16) {
    LittleEndian::write_u16(&mut buffer[field::header::TYPE], type_tag);
}

/// Runs the first step of every variant decode.
///
/// Fails with `MissingLength` when no explicit `length` was supplied, then with
/// `TypeMismatch` when the tag at `offset` is not `expected`.
///
/// # Returns
///
/// The number of bytes consumed so far (always 2).
pub fn validate_header(
    buffer: &[u8],
    offset: usize,
    length: Option<usize>,
    expected: u16,
) -> Result<usize> {
    if length.is_none() {
        return Err(Error::MissingLength);
    }

    let found = read_type_tag(buffer, offset)?;
    if found != expected {
        return Err(Error::TypeMismatch { expected, found });
    }

    Ok(field::header::HEADER_LEN)
}

/// Returns the `length` bytes starting at `offset`, the only bytes a decoder may look at.
///
/// The buffer may carry trailing data belonging to an enclosing structure, so the window is
/// never inferred from the buffer size.
pub(crate) fn window(buffer: &[u8], offset: usize, length: Option<usize>) -> Result<&[u8]> {
    let length = length.ok_or(Error::MissingLength)?;
    offset
        .checked_add(length)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(Error::BufferTooShort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_type_tag_little_endian() {
        assert_eq!(read_type_tag(&[0x02, 0x00], 0), Ok(0x0002));
        assert_eq!(read_type_tag(&[0x00, 0x02], 0), Ok(0x0200));
        assert_eq!(read_type_tag(&[0xAA, 0x34, 0x12], 1), Ok(0x1234));
    }

    #[test]
    fn test_read_type_tag_too_short() {
        assert_eq!(read_type_tag(&[], 0), Err(Error::BufferTooShort));
        assert_eq!(read_type_tag(&[0x02], 0), Err(Error::BufferTooShort));
        assert_eq!(read_type_tag(&[0x02, 0x00], 1), Err(Error::BufferTooShort));
        assert_eq!(read_type_tag(&[0x02, 0x00], usize::MAX), Err(Error::BufferTooShort));
    }

    #[test]
    fn test_write_type_tag() {
        let mut buffer = [0u8; 2];
        write_type_tag(&mut buffer, 0x1234);
        assert_eq!(buffer, [0x34, 0x12]);
    }

    #[test]
    fn test_validate_header() {
        let buffer = [0x02, 0x00, 0xFF];
        assert_eq!(validate_header(&buffer, 0, Some(3), 2), Ok(2));
        assert_eq!(
            validate_header(&buffer, 0, Some(3), 3),
            Err(Error::TypeMismatch { expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_validate_header_requires_length() {
        // Enough bytes and the right tag, but no explicit length.
        let buffer = [0x02, 0x00, 0x00, 0x00];
        assert_eq!(validate_header(&buffer, 0, None, 2), Err(Error::MissingLength));
    }

    #[test]
    fn test_window() {
        let buffer = [1, 2, 3, 4, 5];
        assert_eq!(window(&buffer, 1, Some(3)), Ok(&buffer[1..4]));
        assert_eq!(window(&buffer, 5, Some(0)), Ok(&buffer[5..5]));
        assert_eq!(window(&buffer, 2, Some(4)), Err(Error::BufferTooShort));
        assert_eq!(window(&buffer, usize::MAX, Some(2)), Err(Error::BufferTooShort));
        assert_eq!(window(&buffer, 0, None), Err(Error::MissingLength));
    }
}
