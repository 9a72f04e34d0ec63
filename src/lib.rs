#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! # cisco-remote-id-wire
//!
//! This crate provides the means for parsing the Cisco sub-option carried in a DHCPv6
//! Relay Agent Remote-ID option into higher-level representations, and vice versa. It is
//! designed to be used in embedded environments and is a `no_std` crate.
//!
//! ## Features
//!
//! - `no_std`, zero-allocation parsing and serialization over caller-provided buffers
//! - Type-tag dispatch through a static registry, with a raw fallback for unknown types
//! - Cisco Ethernet Remote-ID with its interleaved slot/module/port encoding
//! - Strict cross-checking of the outer length, the identifier length and the embedded DUID
//! - Optional tracing of dispatch decisions through the `log` feature
//!
//! ## Architecture
//!
//! - `header` - Type tag reader and the header check shared by every variant
//! - `registry` - Static type tag to decoder table
//! - `remote_id` - The variant trait and the closed `RemoteId` sum type
//! - `ethernet` - Zero-copy wrapper and representation of the Ethernet variant
//! - `interface` - Slot/module/port bit interleaving
//! - `raw` - Raw fallback variant
//! - `duid` - DHCP Unique Identifiers embedded in the Ethernet variant
//! - `option` - The enclosing DHCPv6 Remote-ID option body
//! - `field` - Field offset definitions
//!
//! ## Example
//!
//! ```
//! use cisco_remote_id_wire::prelude::*;
//!
//! let buffer = [
//!     0x02, 0x00, 0x28, 0x0A, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x03, 0x00, 0x01, 0xc4, 0x7d,
//!     0x4f, 0x73, 0xa0, 0xbf,
//! ];
//!
//! let (consumed, remote_id) = RemoteId::decode(&buffer, 0, Some(buffer.len())).unwrap();
//! assert_eq!(consumed, 18);
//!
//! let RemoteId::Ethernet(ethernet) = remote_id else { panic!("not an Ethernet Remote-ID") };
//! assert_eq!(ethernet.interface(), Interface::new(2, 3, 16));
//!
//! let mut out = [0u8; 18];
//! assert_eq!(remote_id.encode(&mut out), Ok(18));
//! assert_eq!(out, buffer);
//! ```

#[macro_use]
mod macros;

/// DHCP Unique Identifier codec.
pub mod duid;

/// Error type for decoding, validation and encoding failures.
pub mod error;

/// Cisco Ethernet Remote-ID.
pub mod ethernet;

/// Field offset definitions for all wire format structures.
pub mod field;

/// Type tag reading and shared header validation.
pub mod header;

/// Display helpers for byte strings.
pub mod hex;

/// Interleaved slot/module/port interface number.
pub mod interface;

/// DHCPv6 Remote-ID option body.
pub mod option;

/// Raw fallback Remote-ID.
pub mod raw;

/// Type tag to decoder registry.
pub mod registry;

/// Remote-ID variant trait and sum type.
pub mod remote_id;

/// Prelude module for convenient imports.
pub mod prelude;
