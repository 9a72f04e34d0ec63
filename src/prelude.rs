//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate,
//! allowing for convenient glob imports:
//!
//! ```
//! use cisco_remote_id_wire::prelude::*;
//! ```

pub use crate::duid::{Duid, DuidType};
pub use crate::error::{Error, FieldName};
pub use crate::ethernet::{EthernetPacket, EthernetRemoteId};
pub use crate::header::{read_type_tag, validate_header};
pub use crate::interface::Interface;
pub use crate::option::{
    CISCO_ENTERPRISE_NUMBER, OPTION_REMOTE_ID, RemoteIdOption, RemoteIdOptionRepr,
};
pub use crate::raw::RawRemoteId;
pub use crate::registry::{Decoder, REGISTRY, Registry};
pub use crate::remote_id::{RemoteId, RemoteIdType, RemoteIdVariant};
