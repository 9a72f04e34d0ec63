//! Cisco interleaved interface number.
//!
//! A switch interface is addressed as slot/module/port and squeezed into two bytes, each
//! carrying one half of every value:
//!
//! ```text
//!   byte 0 (low)         byte 1 (high)
//! +---------+-+-----+  +---------+-+-----+
//! |s s s s  |m|p p p|  |S S S S  |M|P P P|
//! +---------+-+-----+  +---------+-+-----+
//!
//! slot   = SSSSssss
//! module = Mm
//! port   = PPPppp
//! ```
//!
//! The interface shows up in the switch configuration as `FastEthernet<slot>/<module * 8 + port>`.

use crate::error::{Error, FieldName};
use core::fmt;

const SLOT_MASK: u8 = 0b1111_0000;
const MODULE_MASK: u8 = 0b0000_1000;
const PORT_MASK: u8 = 0b0000_0111;

/// Slot, module and port of a switch interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interface {
    /// Line card slot (8 bits).
    pub slot: u8,
    /// Module within the slot (2 bits).
    pub module: u8,
    /// Port within the module (6 bits).
    pub port: u8,
}

impl Interface {
    /// Largest slot value.
    pub const MAX_SLOT: u8 = u8::MAX;
    /// Largest module value.
    pub const MAX_MODULE: u8 = 0b11;
    /// Largest port value.
    pub const MAX_PORT: u8 = 0b11_1111;

    /// Creates an interface from its parts.
    pub const fn new(slot: u8, module: u8, port: u8) -> Self {
        Interface { slot, module, port }
    }

    /// De-interleaves the two wire bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        let [low, high] = bytes;

        let slot_low = (low & SLOT_MASK) >> 4;
        let module_low = (low & MODULE_MASK) >> 3;
        let port_low = low & PORT_MASK;

        let slot_high = high & SLOT_MASK;
        let module_high = (high & MODULE_MASK) >> 2;
        let port_high = (high & PORT_MASK) << 3;

        Interface {
            slot: slot_high | slot_low,
            module: module_high | module_low,
            port: port_high | port_low,
        }
    }

    /// Interleaves the interface into its two wire bytes.
    ///
    /// Bits outside the field widths are dropped; call [`Interface::check`] first to reject
    /// them instead.
    pub const fn to_bytes(&self) -> [u8; 2] {
        let mut low = 0;
        let mut high = 0;

        low |= (self.slot & 0b0000_1111) << 4;
        high |= self.slot & 0b1111_0000;

        low |= (self.module & 0b01) << 3;
        high |= (self.module & 0b10) << 2;

        low |= self.port & 0b00_0111;
        high |= (self.port & 0b11_1000) >> 3;

        [low, high]
    }

    /// Interface number as shown by the switch: `module * 8 + port`.
    pub fn number(&self) -> u16 {
        u16::from(self.module) * 8 + u16::from(self.port)
    }

    /// Checks that module and port fit their bit widths.
    pub fn check(&self) -> Result<(), Error> {
        if self.module > Self::MAX_MODULE {
            return Err(Error::FieldOutOfRange {
                field: FieldName::Module,
                value: self.module.into(),
                bound: Self::MAX_MODULE.into(),
            });
        }
        if self.port > Self::MAX_PORT {
            return Err(Error::FieldOutOfRange {
                field: FieldName::Port,
                value: self.port.into(),
                bound: Self::MAX_PORT.into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.slot, self.number())
    }
}
