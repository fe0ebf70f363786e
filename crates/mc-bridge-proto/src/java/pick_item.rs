//! Pick Item (0x17) — Client → Server.
//!
//! Asks the server to swap the item in `slot_to_use` into the hotbar and
//! select it. The server answers with the resulting slot updates.

use bytes::{Buf, BufMut};

use crate::codec::{ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::java::types::JavaVarInt;

#[derive(Debug, Clone, PartialEq)]
pub struct PickItem {
    /// Window slot index of the item to pick (main inventory, 9-35).
    pub slot_to_use: i32,
}

impl ProtoEncode for PickItem {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        JavaVarInt(self.slot_to_use).proto_encode(buf);
    }
}

impl ProtoDecode for PickItem {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        Ok(Self {
            slot_to_use: JavaVarInt::proto_decode(buf)?.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_slot() {
        let mut data: &[u8] = &[35];
        assert_eq!(PickItem::proto_decode(&mut data).unwrap().slot_to_use, 35);
    }
}
