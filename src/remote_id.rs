//! The Remote-ID variant capability and the closed set of known variants.

use crate::error::Error;
use crate::ethernet::EthernetRemoteId;
use crate::header;
use crate::raw::RawRemoteId;
use crate::registry::{REGISTRY, Registry};
use core::fmt;

/// Result type alias using the crate's Error type.
pub type Result<T> = core::result::Result<T, Error>;

enum_with_unknown! {
    /// Cisco Remote-ID type tags.
    pub enum RemoteIdType(u16) {
        /// Ethernet port and VLAN of the relaying switch (2).
        Ethernet = 2,
    }
}

/// A Remote-ID layout selected by its type tag.
pub trait RemoteIdVariant<'a>: Sized {
    /// Decodes a value from the `length` bytes at `offset`.
    ///
    /// `length` comes from the enclosing option and must always be supplied; `None` fails
    /// with [`Error::MissingLength`].
    ///
    /// # Returns
    ///
    /// The number of bytes consumed and the decoded value.
    fn decode(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<(usize, Self)>;

    /// Returns the type tag this value is encoded with.
    fn type_tag(&self) -> u16;

    /// Returns the number of bytes [`RemoteIdVariant::encode`] writes.
    fn buffer_len(&self) -> usize;

    /// Encodes the value into the start of `buffer`.
    ///
    /// # Returns
    ///
    /// * `Ok(written)` - Number of bytes written
    /// * `Err(Error::BufferTooSmall)` - `buffer` is shorter than `buffer_len()`
    fn encode(&self, buffer: &mut [u8]) -> Result<usize>;
}

/// Any Cisco Remote-ID, decoded through the variant registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RemoteId<'a> {
    /// Type 2.
    Ethernet(EthernetRemoteId<'a>),
    /// Every type without a registered decoder.
    Raw(RawRemoteId<'a>),
}

impl<'a> RemoteId<'a> {
    /// Decodes using `registry` instead of the default one.
    pub fn decode_with(
        registry: &Registry,
        buffer: &'a [u8],
        offset: usize,
        length: Option<usize>,
    ) -> Result<(usize, Self)> {
        if length.is_none() {
            return Err(Error::MissingLength);
        }

        let type_tag = header::read_type_tag(buffer, offset)?;
        let decoder = registry.resolve(type_tag);
        decoder(buffer, offset, length)
    }

    /// Returns the kind of this Remote-ID.
    pub fn kind(&self) -> RemoteIdType {
        RemoteIdType::from(self.type_tag())
    }
}

impl<'a> RemoteIdVariant<'a> for RemoteId<'a> {
    /// Reads the type tag and hands the buffer to the registered decoder, or to the raw
    /// fallback for unregistered tags.
    fn decode(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<(usize, Self)> {
        Self::decode_with(&REGISTRY, buffer, offset, length)
    }

    fn type_tag(&self) -> u16 {
        match self {
            RemoteId::Ethernet(remote_id) => remote_id.type_tag(),
            RemoteId::Raw(remote_id) => remote_id.type_tag(),
        }
    }

    fn buffer_len(&self) -> usize {
        match self {
            RemoteId::Ethernet(remote_id) => remote_id.buffer_len(),
            RemoteId::Raw(remote_id) => remote_id.buffer_len(),
        }
    }

    fn encode(&self, buffer: &mut [u8]) -> Result<usize> {
        match self {
            RemoteId::Ethernet(remote_id) => remote_id.encode(buffer),
            RemoteId::Raw(remote_id) => remote_id.encode(buffer),
        }
    }
}

impl<'a> From<EthernetRemoteId<'a>> for RemoteId<'a> {
    fn from(remote_id: EthernetRemoteId<'a>) -> Self {
        RemoteId::Ethernet(remote_id)
    }
}

impl<'a> From<RawRemoteId<'a>> for RemoteId<'a> {
    fn from(remote_id: RawRemoteId<'a>) -> Self {
        RemoteId::Raw(remote_id)
    }
}

impl fmt::Display for RemoteId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RemoteId::Ethernet(remote_id) => write!(f, "{}", remote_id),
            RemoteId::Raw(remote_id) => write!(f, "{}", remote_id),
        }
    }
}
