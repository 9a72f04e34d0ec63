//! Cisco Ethernet Remote-ID (type 2).
//!
//! This module provides a zero-copy wrapper around the sub-option buffer and a high-level
//! representation that validates the length fields against each other.

use crate::duid::Duid;
use crate::error::{Error, FieldName};
use crate::field;
use crate::header;
use crate::interface::Interface;
use crate::remote_id::RemoteIdVariant;
use byteorder::{ByteOrder, LittleEndian, NetworkEndian};
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// A read/write wrapper around a Cisco Ethernet Remote-ID buffer.
///
/// Wire format:
/// ```text
/// 0               1               2               3
/// 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7 0 1 2 3 4 5 6 7
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |      Type (little-endian)     |  s s s s m p p p S S S S M P P P|
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |             VLAN              |       Identifier Length       |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     Identifier (DUID) ...                     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EthernetPacket<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> EthernetPacket<T> {
    /// Creates a new unchecked `EthernetPacket`.
    pub const fn new_unchecked(buffer: T) -> EthernetPacket<T> {
        EthernetPacket { buffer }
    }

    /// Creates a new checked `EthernetPacket`.
    ///
    /// # Returns
    ///
    /// * `Ok(EthernetPacket)` if the buffer holds the fixed header and the declared identifier
    /// * `Err(Error::BufferTooShort)` otherwise
    pub fn new_checked(buffer: T) -> Result<EthernetPacket<T>> {
        let packet = Self::new_unchecked(buffer);
        packet.check_len()?;
        Ok(packet)
    }

    /// Checks that the buffer holds the fixed header and the declared identifier.
    pub fn check_len(&self) -> Result<()> {
        let len = self.buffer.as_ref().len();
        if len < field::ethernet::HEADER_LEN {
            return Err(Error::BufferTooShort);
        }
        let identifier_len = self.identifier_length() as usize;
        if len < field::ethernet::IDENTIFIER(identifier_len).end {
            return Err(Error::BufferTooShort);
        }
        Ok(())
    }

    /// Returns the inner buffer.
    pub fn into_inner(self) -> T {
        self.buffer
    }

    /// Returns the type tag (little-endian on the wire).
    pub fn type_tag(&self) -> u16 {
        LittleEndian::read_u16(&self.buffer.as_ref()[field::header::TYPE])
    }

    /// Returns the raw interleaved interface bytes.
    pub fn interface_bytes(&self) -> [u8; 2] {
        let bytes = &self.buffer.as_ref()[field::ethernet::INTERFACE];
        [bytes[0], bytes[1]]
    }

    /// Returns the de-interleaved interface.
    pub fn interface(&self) -> Interface {
        Interface::from_bytes(self.interface_bytes())
    }

    /// Returns the VLAN field, all 16 bits.
    pub fn vlan(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::ethernet::VLAN])
    }

    /// Returns the declared identifier length.
    pub fn identifier_length(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[field::ethernet::IDENTIFIER_LENGTH])
    }

    /// Returns the identifier bytes.
    pub fn identifier(&self) -> &[u8] {
        let len = self.identifier_length() as usize;
        &self.buffer.as_ref()[field::ethernet::IDENTIFIER(len)]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> EthernetPacket<T> {
    /// Sets the type tag.
    pub fn set_type_tag(&mut self, value: u16) {
        header::write_type_tag(self.buffer.as_mut(), value);
    }

    /// Interleaves and stores the interface.
    pub fn set_interface(&mut self, interface: Interface) {
        self.buffer.as_mut()[field::ethernet::INTERFACE].copy_from_slice(&interface.to_bytes());
    }

    /// Sets the VLAN field.
    pub fn set_vlan(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::ethernet::VLAN], value);
    }

    /// Sets the identifier length field.
    pub fn set_identifier_length(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[field::ethernet::IDENTIFIER_LENGTH], value);
    }

    /// Returns a mutable slice covering the identifier.
    ///
    /// The identifier length field must be set first.
    pub fn identifier_mut(&mut self) -> &mut [u8] {
        let len = self.identifier_length() as usize;
        &mut self.buffer.as_mut()[field::ethernet::IDENTIFIER(len)]
    }
}

impl<T: AsRef<[u8]>> fmt::Display for EthernetPacket<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cisco Ethernet Remote-ID: type={}, interface={}, vlan={}, identifier_len={}",
            self.type_tag(),
            self.interface(),
            self.vlan(),
            self.identifier_length()
        )
    }
}

/// A high-level representation of a Cisco Ethernet Remote-ID.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct EthernetRemoteId<'a> {
    /// Line card slot (8 bits).
    pub slot: u8,
    /// Module within the slot (2 bits).
    pub module: u8,
    /// Port within the module (6 bits).
    pub port: u8,
    /// VLAN ID (12 bits; decode keeps all 16 wire bits).
    pub vlan: u16,
    /// DUID of the relaying switch.
    pub duid: Duid<'a>,
}

impl<'a> EthernetRemoteId<'a> {
    /// Type tag of the Ethernet variant.
    pub const TYPE_TAG: u16 = 2;

    /// Largest VLAN ID.
    pub const MAX_VLAN: u16 = 0x0FFF;

    /// Creates a new Ethernet Remote-ID.
    pub fn new(interface: Interface, vlan: u16, duid: Duid<'a>) -> Self {
        EthernetRemoteId {
            slot: interface.slot,
            module: interface.module,
            port: interface.port,
            vlan,
            duid,
        }
    }

    /// Returns slot, module and port as an [`Interface`].
    pub fn interface(&self) -> Interface {
        Interface::new(self.slot, self.module, self.port)
    }

    /// Checks that every field fits its wire width and the DUID is well formed.
    ///
    /// Neither decode nor encode call this; encode silently drops excess bits.
    pub fn validate(&self) -> Result<()> {
        self.interface().check()?;
        if self.vlan > Self::MAX_VLAN {
            return Err(Error::FieldOutOfRange {
                field: FieldName::Vlan,
                value: self.vlan,
                bound: Self::MAX_VLAN,
            });
        }
        self.duid.check()
    }
}

impl<'a> RemoteIdVariant<'a> for EthernetRemoteId<'a> {
    fn decode(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<(usize, Self)> {
        let mut cursor = header::validate_header(buffer, offset, length, Self::TYPE_TAG)?;
        let length = length.ok_or(Error::MissingLength)?;

        // The fixed fields are read even when `length` cannot cover them, so a bad outer
        // length is reported as a mismatch rather than as truncation.
        let fixed = header::window(buffer, offset, Some(field::ethernet::HEADER_LEN))?;
        let packet = EthernetPacket::new_unchecked(fixed);

        let interface = packet.interface();
        cursor += field::ethernet::INTERFACE.len();

        // Kept unmasked: values above 4095 do show up on the wire.
        let vlan = packet.vlan();
        cursor += field::ethernet::VLAN.len();

        let identifier_len = packet.identifier_length() as usize;
        cursor += field::ethernet::IDENTIFIER_LENGTH.len();

        if length != identifier_len + cursor {
            return Err(Error::LengthMismatch {
                declared: length,
                computed: identifier_len + cursor,
            });
        }

        let data = header::window(buffer, offset, Some(length))?;
        let (consumed, duid) = Duid::parse(data, cursor, identifier_len)?;
        if consumed != identifier_len {
            return Err(Error::IdentifierLengthMismatch {
                declared: identifier_len,
                consumed,
            });
        }
        cursor += consumed;

        Ok((cursor, EthernetRemoteId::new(interface, vlan, duid)))
    }

    fn type_tag(&self) -> u16 {
        Self::TYPE_TAG
    }

    fn buffer_len(&self) -> usize {
        field::ethernet::IDENTIFIER(self.duid.buffer_len()).end
    }

    fn encode(&self, buffer: &mut [u8]) -> Result<usize> {
        let identifier_len =
            u16::try_from(self.duid.buffer_len()).map_err(|_| Error::LengthOverflow)?;
        let len = self.buffer_len();
        if buffer.len() < len {
            return Err(Error::BufferTooSmall);
        }

        let mut packet = EthernetPacket::new_unchecked(&mut buffer[..len]);
        packet.set_type_tag(Self::TYPE_TAG);
        packet.set_interface(self.interface());
        packet.set_vlan(self.vlan);
        packet.set_identifier_length(identifier_len);
        self.duid.emit(packet.identifier_mut())?;

        Ok(len)
    }
}

impl fmt::Display for EthernetRemoteId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cisco Ethernet Remote-ID: interface={}, vlan={}, duid={}",
            self.interface(),
            self.vlan,
            self.duid
        )
    }
}
