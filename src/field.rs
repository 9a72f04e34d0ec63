//! Field offset definitions for Cisco Remote-ID wire format structures.
//!
//! All offsets are const ranges or const functions, relative to the start of the structure
//! they describe.
//!
//! # Wire Format Structure
//!
//! Cisco Ethernet Remote-ID:
//! ```text
//! +--------------------------------+--------------------------------+
//! | TYPE (2 bytes, little-endian)  | INTERFACE (2 bytes, bit-packed)|
//! +--------------------------------+--------------------------------+
//! | VLAN (2 bytes)                 | IDENTIFIER_LENGTH (2 bytes)    |
//! +--------------------------------+--------------------------------+
//! | IDENTIFIER (DUID, variable)                                     |
//! +-----------------------------------------------------------------+
//! ```

#![allow(non_snake_case)]

/// Type alias for a byte range (slice index range).
pub type Field = ::core::ops::Range<usize>;

/// Header shared by every Remote-ID variant.
pub mod header {
    use crate::field::Field;

    /// Remote-ID type tag (2 bytes at offset 0, little-endian).
    pub const TYPE: Field = 0..2;

    /// Header length in bytes.
    pub const HEADER_LEN: usize = TYPE.end;
}

/// Cisco Ethernet Remote-ID field offsets.
pub mod ethernet {
    use crate::field::Field;

    /// Interleaved slot/module/port (2 bytes at offset 2).
    pub const INTERFACE: Field = 2..4;

    /// VLAN ID (2 bytes at offset 4, network byte order).
    pub const VLAN: Field = 4..6;

    /// Length of the embedded DUID (2 bytes at offset 6, network byte order).
    pub const IDENTIFIER_LENGTH: Field = 6..8;

    /// Embedded DUID (variable length starting at offset 8).
    ///
    /// # Parameters
    ///
    /// * `length` - The DUID length in bytes (from IDENTIFIER_LENGTH)
    pub const fn IDENTIFIER(length: usize) -> Field {
        IDENTIFIER_LENGTH.end..(IDENTIFIER_LENGTH.end + length)
    }

    /// Fixed part of the Ethernet Remote-ID, everything before the DUID.
    pub const HEADER_LEN: usize = IDENTIFIER_LENGTH.end;
}

/// Raw fallback Remote-ID field offsets.
pub mod raw {
    use crate::field::Field;

    /// Opaque payload following the type tag.
    pub const fn PAYLOAD(length: usize) -> Field {
        super::header::HEADER_LEN..(super::header::HEADER_LEN + length)
    }
}

/// DUID field offsets (RFC 8415 section 11).
pub mod duid {
    use crate::field::Field;

    /// DUID type (2 bytes at offset 0).
    pub const TYPE: Field = 0..2;

    /// Hardware type for DUID-LLT and DUID-LL (2 bytes at offset 2).
    pub const HARDWARE_TYPE: Field = 2..4;

    /// Time for DUID-LLT, seconds since 2000-01-01 UTC mod 2^32 (4 bytes at offset 4).
    pub const TIME: Field = 4..8;

    /// Fixed part of a DUID-LLT.
    pub const LLT_HEADER_LEN: usize = TIME.end;

    /// Fixed part of a DUID-LL.
    pub const LL_HEADER_LEN: usize = HARDWARE_TYPE.end;

    /// Enterprise number for DUID-EN (4 bytes at offset 2).
    pub const ENTERPRISE_NUMBER: Field = 2..6;

    /// Fixed part of a DUID-EN.
    pub const EN_HEADER_LEN: usize = ENTERPRISE_NUMBER.end;

    /// UUID for DUID-UUID (16 bytes at offset 2).
    pub const UUID: Field = 2..18;

    /// Longest DUID allowed: 2 bytes type plus at most 128 bytes of content.
    pub const MAX_LEN: usize = 130;
}

/// DHCPv6 Remote-ID option body (RFC 4649).
pub mod remote_id_option {
    use crate::field::Field;

    /// Enterprise number of the relay vendor (4 bytes at offset 0).
    pub const ENTERPRISE_NUMBER: Field = 0..4;

    /// Remote-ID (variable length starting at offset 4).
    pub const fn REMOTE_ID(length: usize) -> Field {
        ENTERPRISE_NUMBER.end..(ENTERPRISE_NUMBER.end + length)
    }

    /// Minimum option body length.
    pub const MIN_LEN: usize = ENTERPRISE_NUMBER.end;
}
