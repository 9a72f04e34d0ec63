/// Error type for Remote-ID decoding, validation and encoding operations.
///
/// Every failure is local and synchronous: malformed input is rejected, never retried or
/// repaired.
///
/// # Examples
///
/// ```
/// use cisco_remote_id_wire::error::Error;
/// use cisco_remote_id_wire::header::read_type_tag;
///
/// let buffer = [0x02u8]; // Not enough bytes for a type tag
/// assert_eq!(read_type_tag(&buffer, 0), Err(Error::BufferTooShort));
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Error {
    /// The caller did not supply an explicit sub-option length.
    ///
    /// Remote-ID sub-options have no self-terminating marker, so the length always comes
    /// from the enclosing option. This is a caller contract violation, not bad wire data.
    MissingLength,

    /// Buffer is too short for the expected data structure.
    ///
    /// This occurs when:
    /// - Fewer than 2 bytes remain for the type tag
    /// - The declared length window extends past the end of the buffer
    /// - Fewer than 8 bytes remain for the fixed Ethernet fields
    /// - A DUID is shorter than the fixed part of its type
    BufferTooShort,

    /// Output buffer is too small to encode the value into.
    BufferTooSmall,

    /// A variant decoder was invoked on a buffer carrying a different type tag.
    TypeMismatch {
        /// Type tag the decoder handles.
        expected: u16,
        /// Type tag found on the wire.
        found: u16,
    },

    /// The outer declared length disagrees with the fixed fields plus the identifier length.
    LengthMismatch {
        /// Length supplied by the enclosing option.
        declared: usize,
        /// Fixed header length plus the embedded identifier length.
        computed: usize,
    },

    /// The DUID codec consumed a different number of bytes than the length prefix declared.
    IdentifierLengthMismatch {
        /// Identifier length from the wire.
        declared: usize,
        /// Bytes actually consumed by the DUID codec.
        consumed: usize,
    },

    /// A field value does not fit its wire width. Raised only by explicit validation.
    FieldOutOfRange {
        /// The offending field.
        field: FieldName,
        /// The value found.
        value: u16,
        /// Largest value the field can carry.
        bound: u16,
    },

    /// A length does not fit the 16-bit length field it must be encoded into.
    LengthOverflow,

    /// The embedded DUID is not well formed.
    InvalidDuid,
}

/// Names of the range-checked Ethernet Remote-ID fields.
///
/// The slot is a full byte on the wire, so it never fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// Module within the slot, 2 bits.
    Module,
    /// Port within the module, 6 bits.
    Port,
    /// VLAN ID, 12 bits.
    Vlan,
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldName::Module => write!(f, "module"),
            FieldName::Port => write!(f, "port"),
            FieldName::Vlan => write!(f, "vlan"),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MissingLength => write!(f, "remote-id length must be provided explicitly"),
            Error::BufferTooShort => write!(f, "buffer too short for expected structure"),
            Error::BufferTooSmall => write!(f, "output buffer too small"),
            Error::TypeMismatch { expected, found } => write!(
                f,
                "remote-id type mismatch: expected 0x{:04x}, found 0x{:04x}",
                expected, found
            ),
            Error::LengthMismatch { declared, computed } => write!(
                f,
                "remote-id length incorrect: declared {}, computed {}",
                declared, computed
            ),
            Error::IdentifierLengthMismatch { declared, consumed } => write!(
                f,
                "remote-id duid length incorrect: declared {}, consumed {}",
                declared, consumed
            ),
            Error::FieldOutOfRange { field, value, bound } => {
                write!(f, "{} {} out of range (max {})", field, value, bound)
            }
            Error::LengthOverflow => write!(f, "length field overflow"),
            Error::InvalidDuid => write!(f, "invalid duid"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Error::MissingLength),
            "remote-id length must be provided explicitly"
        );
        assert_eq!(format!("{}", Error::BufferTooShort), "buffer too short for expected structure");
        assert_eq!(
            format!("{}", Error::TypeMismatch { expected: 2, found: 0xFFFF }),
            "remote-id type mismatch: expected 0x0002, found 0xffff"
        );
        assert_eq!(
            format!("{}", Error::LengthMismatch { declared: 18, computed: 17 }),
            "remote-id length incorrect: declared 18, computed 17"
        );
        assert_eq!(
            format!("{}", Error::IdentifierLengthMismatch { declared: 20, consumed: 18 }),
            "remote-id duid length incorrect: declared 20, consumed 18"
        );
        assert_eq!(format!("{}", Error::LengthOverflow), "length field overflow");
    }

    #[test]
    fn test_field_out_of_range_display() {
        let err = Error::FieldOutOfRange {
            field: FieldName::Vlan,
            value: 4096,
            bound: 4095,
        };
        assert_eq!(format!("{}", err), "vlan 4096 out of range (max 4095)");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::BufferTooShort, Error::BufferTooShort);
        assert_ne!(Error::BufferTooShort, Error::BufferTooSmall);
        assert_eq!(
            Error::TypeMismatch { expected: 2, found: 3 },
            Error::TypeMismatch { expected: 2, found: 3 }
        );
        assert_ne!(
            Error::TypeMismatch { expected: 2, found: 3 },
            Error::TypeMismatch { expected: 2, found: 4 }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&Error::InvalidDuid);
    }
}
