//! Java Edition packets the bridge sends to the downstream server.
//!
//! Java framing differs from Bedrock: VarInts are plain LEB128 over the
//! two's-complement bits (no ZigZag) and fixed-width fields are big-endian.

pub mod item_stack;
pub mod pick_item;
pub mod types;

pub use item_stack::JavaItemStack;
pub use pick_item::PickItem;
pub use types::JavaVarInt;

use bytes::{Bytes, BytesMut};

use crate::codec::ProtoEncode;

/// Serverbound play packet IDs (protocol 578).
pub mod id {
    pub const PICK_ITEM: i32 = 0x17;
}

/// A bridge → Java server packet.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaServerboundPacket {
    PickItem(PickItem),
}

impl JavaServerboundPacket {
    pub fn id(&self) -> i32 {
        match self {
            Self::PickItem(_) => id::PICK_ITEM,
        }
    }

    /// Encode as `VarInt id` + body (uncompressed, unframed).
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        JavaVarInt(self.id()).proto_encode(&mut buf);
        match self {
            Self::PickItem(p) => p.proto_encode(&mut buf),
        }
        buf.freeze()
    }
}
