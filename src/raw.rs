//! Raw fallback for Remote-ID types without a dedicated decoder.

use crate::error::Error;
use crate::field;
use crate::header;
use crate::hex::HexOrAscii;
use crate::remote_id::RemoteIdVariant;
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// A Remote-ID kept as its type tag plus uninterpreted payload.
///
/// Accepts any type tag. Encoding a decoded value reproduces its input byte for byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RawRemoteId<'a> {
    /// Type tag as read from the wire.
    pub type_tag: u16,
    /// Everything after the type tag.
    pub payload: &'a [u8],
}

impl<'a> RawRemoteId<'a> {
    /// Creates a new raw Remote-ID.
    pub fn new(type_tag: u16, payload: &'a [u8]) -> Self {
        RawRemoteId { type_tag, payload }
    }
}

impl<'a> RemoteIdVariant<'a> for RawRemoteId<'a> {
    fn decode(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<(usize, Self)> {
        let data = header::window(buffer, offset, length)?;
        let type_tag = header::read_type_tag(data, 0)?;
        let payload = &data[field::raw::PAYLOAD(data.len() - field::header::HEADER_LEN)];

        Ok((data.len(), RawRemoteId { type_tag, payload }))
    }

    fn type_tag(&self) -> u16 {
        self.type_tag
    }

    fn buffer_len(&self) -> usize {
        field::raw::PAYLOAD(self.payload.len()).end
    }

    fn encode(&self, buffer: &mut [u8]) -> Result<usize> {
        let len = self.buffer_len();
        if buffer.len() < len {
            return Err(Error::BufferTooSmall);
        }

        header::write_type_tag(buffer, self.type_tag);
        buffer[field::raw::PAYLOAD(self.payload.len())].copy_from_slice(self.payload);

        Ok(len)
    }
}

impl fmt::Display for RawRemoteId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cisco Remote-ID: type={}, data={}",
            self.type_tag,
            HexOrAscii(self.payload)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_unknown_type() {
        let buffer = [0xFF, 0xFF, 0x01, 0x02, 0x03, 0x04, 0x05];
        let (consumed, remote_id) = RawRemoteId::decode(&buffer, 0, Some(buffer.len())).unwrap();

        assert_eq!(consumed, 7);
        assert_eq!(remote_id.type_tag, 0xFFFF);
        assert_eq!(remote_id.payload, &buffer[2..]);

        let mut out = [0u8; 7];
        assert_eq!(remote_id.encode(&mut out), Ok(7));
        assert_eq!(out, buffer);
    }

    #[test]
    fn test_decode_accepts_any_tag() {
        // Even the Ethernet tag: the fallback never interprets the payload.
        let buffer = [0x02, 0x00, 0xAA];
        let (_, remote_id) = RawRemoteId::decode(&buffer, 0, Some(3)).unwrap();
        assert_eq!(remote_id, RawRemoteId::new(2, &[0xAA]));
    }

    #[test]
    fn test_decode_respects_length() {
        let buffer = [0x00, 0x34, 0x12, 0x01, 0x02, 0x99, 0x99];
        let (consumed, remote_id) = RawRemoteId::decode(&buffer, 1, Some(4)).unwrap();

        assert_eq!(consumed, 4);
        assert_eq!(remote_id, RawRemoteId::new(0x1234, &[0x01, 0x02]));
    }

    #[test]
    fn test_decode_empty_payload() {
        let buffer = [0x07, 0x00];
        let (consumed, remote_id) = RawRemoteId::decode(&buffer, 0, Some(2)).unwrap();
        assert_eq!(consumed, 2);
        assert!(remote_id.payload.is_empty());
    }

    #[test]
    fn test_decode_errors() {
        let buffer = [0xFF, 0xFF, 0x01];
        assert_eq!(RawRemoteId::decode(&buffer, 0, None), Err(Error::MissingLength));
        assert_eq!(RawRemoteId::decode(&buffer, 0, Some(4)), Err(Error::BufferTooShort));
        assert_eq!(RawRemoteId::decode(&buffer, 0, Some(1)), Err(Error::BufferTooShort));
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let remote_id = RawRemoteId::new(9, b"abc");
        let mut buffer = [0u8; 4];
        assert_eq!(remote_id.encode(&mut buffer), Err(Error::BufferTooSmall));
        assert_eq!(remote_id.buffer_len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", RawRemoteId::new(1, b"Gi1/0/1")),
            "Cisco Remote-ID: type=1, data=\"Gi1/0/1\""
        );
        assert_eq!(
            format!("{}", RawRemoteId::new(0xFFFF, &[0x00, 0xff])),
            "Cisco Remote-ID: type=65535, data=00:ff"
        );
    }
}
