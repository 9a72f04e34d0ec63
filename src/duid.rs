//! DHCP Unique Identifiers (RFC 8415 section 11).
//!
//! The Ethernet Remote-ID embeds the relaying switch's DUID. Cisco switches use DUID-LL
//! built from the base MAC address, but any DUID type may appear on the wire.

use crate::error::Error;
use crate::field;
use crate::hex::Hex;
use byteorder::{ByteOrder, NetworkEndian};
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

enum_with_unknown! {
    /// DUID type codes.
    pub enum DuidType(u16) {
        /// Link-layer address plus time (1).
        LinkLayerTime = 1,
        /// Vendor-assigned unique ID based on enterprise number (2).
        EnterpriseNumber = 2,
        /// Link-layer address (3).
        LinkLayer = 3,
        /// Universally unique identifier (4).
        Uuid = 4,
    }
}

/// A DHCP Unique Identifier, borrowing its variable-length parts from the wire buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duid<'a> {
    /// DUID-LLT.
    LinkLayerTime {
        /// IANA hardware type (1 for Ethernet).
        hardware_type: u16,
        /// Seconds since midnight 2000-01-01 UTC, modulo 2^32.
        time: u32,
        /// Link-layer address.
        link_layer_address: &'a [u8],
    },
    /// DUID-EN.
    EnterpriseNumber {
        /// IANA private enterprise number.
        enterprise_number: u32,
        /// Vendor-assigned identifier.
        identifier: &'a [u8],
    },
    /// DUID-LL.
    LinkLayer {
        /// IANA hardware type (1 for Ethernet).
        hardware_type: u16,
        /// Link-layer address.
        link_layer_address: &'a [u8],
    },
    /// DUID-UUID.
    Uuid([u8; 16]),
    /// Any DUID type without a dedicated representation.
    Unknown {
        /// DUID type code.
        duid_type: u16,
        /// Everything after the type code.
        data: &'a [u8],
    },
}

impl<'a> Duid<'a> {
    /// Parses a DUID of `length` bytes starting at `offset`.
    ///
    /// All types consume the whole `length` except DUID-UUID, which always consumes exactly
    /// 18 bytes; callers comparing the consumed length with `length` detect trailing garbage.
    ///
    /// # Returns
    ///
    /// * `Ok((consumed, duid))` on success
    /// * `Err(Error::BufferTooShort)` if the window exceeds the buffer or is shorter than the
    ///   fixed part of the DUID type
    pub fn parse(buffer: &'a [u8], offset: usize, length: usize) -> Result<(usize, Duid<'a>)> {
        let data = offset
            .checked_add(length)
            .and_then(|end| buffer.get(offset..end))
            .ok_or(Error::BufferTooShort)?;
        if data.len() < field::duid::TYPE.end {
            return Err(Error::BufferTooShort);
        }

        let duid_type = NetworkEndian::read_u16(&data[field::duid::TYPE]);
        match DuidType::from(duid_type) {
            DuidType::LinkLayerTime => {
                if data.len() < field::duid::LLT_HEADER_LEN {
                    return Err(Error::BufferTooShort);
                }
                let duid = Duid::LinkLayerTime {
                    hardware_type: NetworkEndian::read_u16(&data[field::duid::HARDWARE_TYPE]),
                    time: NetworkEndian::read_u32(&data[field::duid::TIME]),
                    link_layer_address: &data[field::duid::LLT_HEADER_LEN..],
                };
                Ok((data.len(), duid))
            }
            DuidType::EnterpriseNumber => {
                if data.len() < field::duid::EN_HEADER_LEN {
                    return Err(Error::BufferTooShort);
                }
                let duid = Duid::EnterpriseNumber {
                    enterprise_number: NetworkEndian::read_u32(
                        &data[field::duid::ENTERPRISE_NUMBER],
                    ),
                    identifier: &data[field::duid::EN_HEADER_LEN..],
                };
                Ok((data.len(), duid))
            }
            DuidType::LinkLayer => {
                if data.len() < field::duid::LL_HEADER_LEN {
                    return Err(Error::BufferTooShort);
                }
                let duid = Duid::LinkLayer {
                    hardware_type: NetworkEndian::read_u16(&data[field::duid::HARDWARE_TYPE]),
                    link_layer_address: &data[field::duid::LL_HEADER_LEN..],
                };
                Ok((data.len(), duid))
            }
            DuidType::Uuid => {
                if data.len() < field::duid::UUID.end {
                    return Err(Error::BufferTooShort);
                }
                let mut uuid = [0u8; 16];
                uuid.copy_from_slice(&data[field::duid::UUID]);
                Ok((field::duid::UUID.end, Duid::Uuid(uuid)))
            }
            DuidType::Unknown(duid_type) => {
                let duid = Duid::Unknown {
                    duid_type,
                    data: &data[field::duid::TYPE.end..],
                };
                Ok((data.len(), duid))
            }
        }
    }

    /// Returns the DUID type.
    pub fn duid_type(&self) -> DuidType {
        match self {
            Duid::LinkLayerTime { .. } => DuidType::LinkLayerTime,
            Duid::EnterpriseNumber { .. } => DuidType::EnterpriseNumber,
            Duid::LinkLayer { .. } => DuidType::LinkLayer,
            Duid::Uuid(_) => DuidType::Uuid,
            Duid::Unknown { duid_type, .. } => DuidType::from(*duid_type),
        }
    }

    /// Returns the wire length of this DUID, type code included.
    pub fn buffer_len(&self) -> usize {
        match self {
            Duid::LinkLayerTime { link_layer_address, .. } => {
                field::duid::LLT_HEADER_LEN + link_layer_address.len()
            }
            Duid::EnterpriseNumber { identifier, .. } => {
                field::duid::EN_HEADER_LEN + identifier.len()
            }
            Duid::LinkLayer { link_layer_address, .. } => {
                field::duid::LL_HEADER_LEN + link_layer_address.len()
            }
            Duid::Uuid(_) => field::duid::UUID.end,
            Duid::Unknown { data, .. } => field::duid::TYPE.end + data.len(),
        }
    }

    /// Checks that the DUID is well formed.
    ///
    /// Rejects DUIDs longer than 130 bytes, empty link-layer addresses and enterprise
    /// identifiers, and `Unknown` values carrying a type code that has its own variant
    /// (those would parse back as a different variant).
    pub fn check(&self) -> Result<()> {
        if self.buffer_len() > field::duid::MAX_LEN {
            return Err(Error::InvalidDuid);
        }
        match self {
            Duid::LinkLayerTime { link_layer_address, .. }
            | Duid::LinkLayer { link_layer_address, .. }
                if link_layer_address.is_empty() =>
            {
                Err(Error::InvalidDuid)
            }
            Duid::EnterpriseNumber { identifier, .. } if identifier.is_empty() => {
                Err(Error::InvalidDuid)
            }
            Duid::Unknown { duid_type, .. }
                if !matches!(DuidType::from(*duid_type), DuidType::Unknown(_)) =>
            {
                Err(Error::InvalidDuid)
            }
            _ => Ok(()),
        }
    }

    /// Emits the DUID into the start of `buffer`.
    ///
    /// # Returns
    ///
    /// * `Ok(written)` - Number of bytes written
    /// * `Err(Error::BufferTooSmall)` - `buffer` is shorter than [`Duid::buffer_len`]
    pub fn emit(&self, buffer: &mut [u8]) -> Result<usize> {
        let len = self.buffer_len();
        if buffer.len() < len {
            return Err(Error::BufferTooSmall);
        }
        let buffer = &mut buffer[..len];

        NetworkEndian::write_u16(&mut buffer[field::duid::TYPE], self.duid_type().into());
        match *self {
            Duid::LinkLayerTime { hardware_type, time, link_layer_address } => {
                NetworkEndian::write_u16(&mut buffer[field::duid::HARDWARE_TYPE], hardware_type);
                NetworkEndian::write_u32(&mut buffer[field::duid::TIME], time);
                buffer[field::duid::LLT_HEADER_LEN..].copy_from_slice(link_layer_address);
            }
            Duid::EnterpriseNumber { enterprise_number, identifier } => {
                NetworkEndian::write_u32(
                    &mut buffer[field::duid::ENTERPRISE_NUMBER],
                    enterprise_number,
                );
                buffer[field::duid::EN_HEADER_LEN..].copy_from_slice(identifier);
            }
            Duid::LinkLayer { hardware_type, link_layer_address } => {
                NetworkEndian::write_u16(&mut buffer[field::duid::HARDWARE_TYPE], hardware_type);
                buffer[field::duid::LL_HEADER_LEN..].copy_from_slice(link_layer_address);
            }
            Duid::Uuid(uuid) => {
                buffer[field::duid::UUID].copy_from_slice(&uuid);
            }
            Duid::Unknown { data, .. } => {
                buffer[field::duid::TYPE.end..].copy_from_slice(data);
            }
        }

        Ok(len)
    }
}

impl fmt::Display for Duid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Duid::LinkLayerTime { hardware_type, time, link_layer_address } => write!(
                f,
                "llt(hw={}, time={}, {})",
                hardware_type,
                time,
                Hex(link_layer_address)
            ),
            Duid::EnterpriseNumber { enterprise_number, identifier } => {
                write!(f, "en({}, {})", enterprise_number, Hex(identifier))
            }
            Duid::LinkLayer { hardware_type, link_layer_address } => {
                write!(f, "ll(hw={}, {})", hardware_type, Hex(link_layer_address))
            }
            Duid::Uuid(uuid) => write!(f, "uuid({})", Hex(uuid)),
            Duid::Unknown { duid_type, data } => {
                write!(f, "unknown(type={}, {})", duid_type, Hex(data))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MAC: [u8; 6] = [0xc4, 0x7d, 0x4f, 0x73, 0xa0, 0xbf];

    #[test]
    fn test_parse_link_layer() {
        let buffer = [0x00, 0x03, 0x00, 0x01, 0xc4, 0x7d, 0x4f, 0x73, 0xa0, 0xbf];
        let (consumed, duid) = Duid::parse(&buffer, 0, buffer.len()).unwrap();

        assert_eq!(consumed, 10);
        assert_eq!(
            duid,
            Duid::LinkLayer { hardware_type: 1, link_layer_address: &MAC }
        );
        assert_eq!(duid.duid_type(), DuidType::LinkLayer);
        assert_eq!(format!("{}", duid), "ll(hw=1, c4:7d:4f:73:a0:bf)");
    }

    #[test]
    fn test_parse_link_layer_time() {
        let buffer = [
            0x00, 0x01, 0x00, 0x01, 0x1c, 0x39, 0xcf, 0x88, 0x08, 0x00, 0x27, 0xfe, 0x8f, 0x95,
        ];
        let (consumed, duid) = Duid::parse(&buffer, 0, buffer.len()).unwrap();

        assert_eq!(consumed, 14);
        assert_eq!(
            duid,
            Duid::LinkLayerTime {
                hardware_type: 1,
                time: 0x1c39cf88,
                link_layer_address: &[0x08, 0x00, 0x27, 0xfe, 0x8f, 0x95],
            }
        );
    }

    #[test]
    fn test_parse_enterprise_number() {
        let buffer = [0x00, 0x02, 0x00, 0x00, 0x00, 0x09, 0x0c, 0xc0, 0x84, 0xd3];
        let (consumed, duid) = Duid::parse(&buffer, 0, buffer.len()).unwrap();

        assert_eq!(consumed, 10);
        assert_eq!(
            duid,
            Duid::EnterpriseNumber { enterprise_number: 9, identifier: &[0x0c, 0xc0, 0x84, 0xd3] }
        );
    }

    #[test]
    fn test_parse_uuid_consumes_fixed_length() {
        let mut buffer = [0u8; 20];
        buffer[1] = 0x04;
        for (i, byte) in buffer[2..18].iter_mut().enumerate() {
            *byte = i as u8;
        }

        let (consumed, duid) = Duid::parse(&buffer, 0, 20).unwrap();
        assert_eq!(consumed, 18);
        assert_eq!(duid.duid_type(), DuidType::Uuid);

        assert_eq!(Duid::parse(&buffer, 0, 17), Err(Error::BufferTooShort));
    }

    #[test]
    fn test_parse_unknown() {
        let buffer = [0xAA, 0x00, 0x2a, 0x01, 0x02];
        let (consumed, duid) = Duid::parse(&buffer, 1, 4).unwrap();

        assert_eq!(consumed, 4);
        assert_eq!(duid, Duid::Unknown { duid_type: 0x2a, data: &[0x01, 0x02] });
        assert_eq!(duid.duid_type(), DuidType::Unknown(0x2a));
    }

    #[test]
    fn test_parse_too_short() {
        let buffer = [0x00, 0x03, 0x00];
        assert_eq!(Duid::parse(&buffer, 0, 3), Err(Error::BufferTooShort));
        assert_eq!(Duid::parse(&buffer, 0, 1), Err(Error::BufferTooShort));
        assert_eq!(Duid::parse(&buffer, 2, 4), Err(Error::BufferTooShort));
        assert_eq!(Duid::parse(&buffer, 0, usize::MAX), Err(Error::BufferTooShort));
    }

    #[test]
    fn test_emit() {
        let duid = Duid::LinkLayerTime {
            hardware_type: 1,
            time: 0x01020304,
            link_layer_address: &MAC,
        };
        let mut buffer = [0u8; 16];
        assert_eq!(duid.emit(&mut buffer), Ok(14));
        assert_eq!(
            buffer[..14],
            [0x00, 0x01, 0x00, 0x01, 0x01, 0x02, 0x03, 0x04, 0xc4, 0x7d, 0x4f, 0x73, 0xa0, 0xbf]
        );

        let mut small = [0u8; 13];
        assert_eq!(duid.emit(&mut small), Err(Error::BufferTooSmall));
    }

    #[test]
    fn test_emit_parse_each_type() {
        let uuid = [0x5a; 16];
        let duids = [
            Duid::LinkLayerTime { hardware_type: 1, time: 7, link_layer_address: &MAC },
            Duid::EnterpriseNumber { enterprise_number: 9, identifier: b"switch" },
            Duid::LinkLayer { hardware_type: 6, link_layer_address: &MAC },
            Duid::Uuid(uuid),
            Duid::Unknown { duid_type: 0xff00, data: &[1, 2, 3] },
        ];

        for duid in duids {
            let mut buffer = [0u8; 32];
            let written = duid.emit(&mut buffer).unwrap();
            assert_eq!(written, duid.buffer_len());
            assert_eq!(Duid::parse(&buffer, 0, written), Ok((written, duid)));
        }
    }

    #[test]
    fn test_check() {
        assert!(Duid::LinkLayer { hardware_type: 1, link_layer_address: &MAC }.check().is_ok());
        assert_eq!(
            Duid::LinkLayer { hardware_type: 1, link_layer_address: &[] }.check(),
            Err(Error::InvalidDuid)
        );
        assert_eq!(
            Duid::EnterpriseNumber { enterprise_number: 9, identifier: &[] }.check(),
            Err(Error::InvalidDuid)
        );
        assert_eq!(
            Duid::Unknown { duid_type: 3, data: &MAC }.check(),
            Err(Error::InvalidDuid)
        );

        let long = [0u8; 129];
        assert_eq!(
            Duid::Unknown { duid_type: 0xff00, data: &long }.check(),
            Err(Error::InvalidDuid)
        );
        assert!(Duid::Unknown { duid_type: 0xff00, data: &long[..128] }.check().is_ok());
    }
}
