//! DHCPv6 Remote-ID option body (RFC 4649).
//!
//! The relay agent inserts `OPTION_REMOTE_ID` into Relay-Forward messages. Its body is the
//! vendor's enterprise number followed by a vendor-defined remote-id; for Cisco that
//! remote-id is one of the sub-options decoded by this crate.

use crate::error::Error;
use crate::field;
use crate::hex::HexOrAscii;
use crate::remote_id::{RemoteId, RemoteIdVariant};
use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// DHCPv6 option code of the Relay Agent Remote-ID option.
pub const OPTION_REMOTE_ID: u16 = 37;

/// IANA private enterprise number of Cisco Systems.
pub const CISCO_ENTERPRISE_NUMBER: u32 = 9;

/// A read/write wrapper around a Remote-ID option body (option code and length excluded).
///
/// Wire format:
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                       enterprise-number                       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// .                           remote-id                           .
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RemoteIdOption<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> RemoteIdOption<T> {
    /// Creates a new unchecked `RemoteIdOption`.
    pub const fn new_unchecked(buffer: T) -> RemoteIdOption<T> {
        RemoteIdOption { buffer }
    }

    /// Creates a new checked `RemoteIdOption`.
    pub fn new_checked(buffer: T) -> Result<RemoteIdOption<T>> {
        let option = Self::new_unchecked(buffer);
        option.check_len()?;
        Ok(option)
    }

    /// Checks that the buffer holds at least the enterprise number.
    pub fn check_len(&self) -> Result<()> {
        if self.buffer.as_ref().len() < field::remote_id_option::MIN_LEN {
            return Err(Error::BufferTooShort);
        }
        Ok(())
    }

    /// Returns the enterprise number.
    pub fn enterprise_number(&self) -> u32 {
        NetworkEndian::read_u32(&self.buffer.as_ref()[field::remote_id_option::ENTERPRISE_NUMBER])
    }

    /// Returns the remote-id, everything after the enterprise number.
    pub fn remote_id(&self) -> &[u8] {
        &self.buffer.as_ref()[field::remote_id_option::ENTERPRISE_NUMBER.end..]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> RemoteIdOption<T> {
    /// Sets the enterprise number.
    pub fn set_enterprise_number(&mut self, value: u32) {
        NetworkEndian::write_u32(
            &mut self.buffer.as_mut()[field::remote_id_option::ENTERPRISE_NUMBER],
            value,
        );
    }

    /// Returns a mutable slice covering the remote-id.
    pub fn remote_id_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[field::remote_id_option::ENTERPRISE_NUMBER.end..]
    }
}

/// A high-level representation of a Remote-ID option body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RemoteIdOptionRepr<'a> {
    /// Enterprise number of the relay vendor.
    pub enterprise_number: u32,
    /// Vendor-defined remote-id.
    pub remote_id: &'a [u8],
}

impl<'a> RemoteIdOptionRepr<'a> {
    /// Parses a Remote-ID option body.
    pub fn parse<T>(option: &'a RemoteIdOption<T>) -> Result<RemoteIdOptionRepr<'a>>
    where
        T: AsRef<[u8]>,
    {
        option.check_len()?;
        Ok(RemoteIdOptionRepr {
            enterprise_number: option.enterprise_number(),
            remote_id: option.remote_id(),
        })
    }

    /// Returns true if the remote-id was inserted by a Cisco relay.
    pub fn is_cisco(&self) -> bool {
        self.enterprise_number == CISCO_ENTERPRISE_NUMBER
    }

    /// Decodes the Cisco remote-id through the default registry.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The option was not inserted by a Cisco relay
    /// * `Ok(Some(remote_id))` - The decoded Cisco Remote-ID
    /// * `Err(_)` - A Cisco remote-id that failed to decode
    pub fn cisco_remote_id(&self) -> Result<Option<RemoteId<'a>>> {
        if !self.is_cisco() {
            net_trace!(
                "remote-id option from enterprise {} is not a cisco remote-id",
                self.enterprise_number
            );
            return Ok(None);
        }

        let (_, remote_id) = RemoteId::decode(self.remote_id, 0, Some(self.remote_id.len()))?;
        Ok(Some(remote_id))
    }

    /// Returns the option body length.
    pub fn buffer_len(&self) -> usize {
        field::remote_id_option::REMOTE_ID(self.remote_id.len()).end
    }

    /// Emits the option body into `option`, which must be exactly `buffer_len()` bytes long.
    pub fn emit<T>(&self, option: &mut RemoteIdOption<&mut T>)
    where
        T: AsRef<[u8]> + AsMut<[u8]> + ?Sized,
    {
        option.set_enterprise_number(self.enterprise_number);
        option.remote_id_mut().copy_from_slice(self.remote_id);
    }
}

impl fmt::Display for RemoteIdOptionRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Remote-ID option: enterprise={}, remote_id={}",
            self.enterprise_number,
            HexOrAscii(self.remote_id)
        )
    }
}
