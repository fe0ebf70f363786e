//! BlockPickRequest (0x22) — Client → Server.
//!
//! Sent when the player middle-clicks a block to pick it into the hotbar.

use bytes::{Buf, BufMut};

use crate::codec::{ensure_remaining, read_bool, ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::types::{BlockPos, VarInt};

/// Pick-block request for a world position.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPickRequest {
    /// Target block. All three components are zigzag VarInts on the wire.
    pub position: BlockPos,
    /// Whether the client asked for block entity data (ctrl+pick).
    pub add_user_data: bool,
    /// Hotbar slot the client had selected.
    pub hotbar_slot: u8,
}

impl ProtoEncode for BlockPickRequest {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarInt(self.position.x).proto_encode(buf);
        VarInt(self.position.y).proto_encode(buf);
        VarInt(self.position.z).proto_encode(buf);
        buf.put_u8(self.add_user_data as u8);
        buf.put_u8(self.hotbar_slot);
    }
}

impl ProtoDecode for BlockPickRequest {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let x = VarInt::proto_decode(buf)?.0;
        let y = VarInt::proto_decode(buf)?.0;
        let z = VarInt::proto_decode(buf)?.0;
        let add_user_data = read_bool(buf)?;
        ensure_remaining(buf, 1)?;
        let hotbar_slot = buf.get_u8();
        Ok(Self {
            position: BlockPos::new(x, y, z),
            add_user_data,
            hotbar_slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_from_client_bytes() {
        // x=10 (0x14), y=64 (0x80 0x01), z=-10 (0x13), no user data, slot 2
        let mut data: &[u8] = &[0x14, 0x80, 0x01, 0x13, 0x00, 0x02];
        let pkt = BlockPickRequest::proto_decode(&mut data).unwrap();
        assert_eq!(pkt.position, BlockPos::new(10, 64, -10));
        assert!(!pkt.add_user_data);
        assert_eq!(pkt.hotbar_slot, 2);
        assert!(data.is_empty());
    }

    #[test]
    fn decode_missing_hotbar_slot() {
        let mut data: &[u8] = &[0x00, 0x00, 0x00, 0x01];
        let err = BlockPickRequest::proto_decode(&mut data).unwrap_err();
        assert!(matches!(err, ProtoError::BufferTooShort { needed: 1, .. }));
    }
}
