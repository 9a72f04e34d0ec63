//! Type tag to decoder registry.
//!
//! The set of variants is closed and known at compile time: the default [`REGISTRY`] is a
//! static table, read-only for the life of the process, so lookups need no locking.

use crate::error::Error;
use crate::ethernet::EthernetRemoteId;
use crate::raw::RawRemoteId;
use crate::remote_id::{RemoteId, RemoteIdVariant};

/// Decodes a Remote-ID from `(buffer, offset, length)`, see [`RemoteIdVariant::decode`].
pub type Decoder =
    for<'a> fn(&'a [u8], usize, Option<usize>) -> Result<(usize, RemoteId<'a>), Error>;

/// Maps type tags to decoders; unregistered tags resolve to the raw fallback.
#[derive(Clone, Copy)]
pub struct Registry {
    entries: &'static [(u16, Decoder)],
}

impl Registry {
    /// Creates a registry over a static table.
    ///
    /// If a tag appears more than once, the last entry wins.
    pub const fn new(entries: &'static [(u16, Decoder)]) -> Self {
        Registry { entries }
    }

    /// Returns the decoder for `type_tag`, or the raw fallback decoder.
    pub fn resolve(&self, type_tag: u16) -> Decoder {
        match self.lookup(type_tag) {
            Some(decoder) => decoder,
            None => {
                net_trace!("cisco remote-id type {} not registered, using raw fallback", type_tag);
                decode_raw
            }
        }
    }

    /// Returns true if `type_tag` has a dedicated decoder.
    pub fn is_registered(&self, type_tag: u16) -> bool {
        self.lookup(type_tag).is_some()
    }

    fn lookup(&self, type_tag: u16) -> Option<Decoder> {
        self.entries
            .iter()
            .rev()
            .find(|(tag, _)| *tag == type_tag)
            .map(|(_, decoder)| *decoder)
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(tag, _)| tag))
            .finish()
    }
}

static ENTRIES: [(u16, Decoder); 1] = [(EthernetRemoteId::TYPE_TAG, decode_ethernet)];

/// Every Remote-ID type this crate decodes.
pub static REGISTRY: Registry = Registry::new(&ENTRIES);

/// Decoder for the Ethernet variant.
pub fn decode_ethernet<'a>(
    buffer: &'a [u8],
    offset: usize,
    length: Option<usize>,
) -> Result<(usize, RemoteId<'a>), Error> {
    EthernetRemoteId::decode(buffer, offset, length).map(|(len, remote_id)| (len, remote_id.into()))
}

/// Decoder for the raw fallback.
pub fn decode_raw<'a>(
    buffer: &'a [u8],
    offset: usize,
    length: Option<usize>,
) -> Result<(usize, RemoteId<'a>), Error> {
    RawRemoteId::decode(buffer, offset, length).map(|(len, remote_id)| (len, remote_id.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    static FA2_40: [u8; 18] = [
        0x02, 0x00, 0x28, 0x0A, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x03, 0x00, 0x01, 0xc4, 0x7d, 0x4f,
        0x73, 0xa0, 0xbf,
    ];

    fn is_ethernet(decoder: Decoder) -> bool {
        matches!(decoder(&FA2_40, 0, Some(18)), Ok((_, RemoteId::Ethernet(_))))
    }

    #[test]
    fn test_default_registry() {
        assert!(REGISTRY.is_registered(2));
        assert!(!REGISTRY.is_registered(0xFFFF));
        assert!(!REGISTRY.is_registered(0x0200));

        assert!(is_ethernet(REGISTRY.resolve(2)));
        assert!(!is_ethernet(REGISTRY.resolve(0xFFFF)));
    }

    #[test]
    fn test_unregistered_tag_resolves_to_raw() {
        let buffer = [0x05, 0x00, 0x01];
        let decoder = REGISTRY.resolve(5);
        assert_eq!(
            decoder(&buffer, 0, Some(3)),
            Ok((3, RemoteId::Raw(RawRemoteId::new(5, &[0x01]))))
        );
    }

    #[test]
    fn test_empty_registry_decodes_everything_raw() {
        static EMPTY: Registry = Registry::new(&[]);

        let (consumed, remote_id) = RemoteId::decode_with(&EMPTY, &FA2_40, 0, Some(18)).unwrap();
        assert_eq!(consumed, 18);
        assert_eq!(remote_id, RemoteId::Raw(RawRemoteId::new(2, &FA2_40[2..])));
    }

    #[test]
    fn test_duplicate_tag_last_entry_wins() {
        static RAW_LAST_ENTRIES: [(u16, Decoder); 2] = [(2, decode_ethernet), (2, decode_raw)];
        static ETHERNET_LAST_ENTRIES: [(u16, Decoder); 2] =
            [(2, decode_raw), (2, decode_ethernet)];
        static RAW_LAST: Registry = Registry::new(&RAW_LAST_ENTRIES);
        static ETHERNET_LAST: Registry = Registry::new(&ETHERNET_LAST_ENTRIES);

        assert!(!is_ethernet(RAW_LAST.resolve(2)));
        assert!(is_ethernet(ETHERNET_LAST.resolve(2)));
    }

    #[test]
    fn test_registry_debug() {
        assert_eq!(format!("{:?}", REGISTRY), "[2]");
    }
}
