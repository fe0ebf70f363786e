//! PlayerHotbar (0x30) — Bidirectional.
//!
//! Moves the client's hotbar selection.

use bytes::{Buf, BufMut};

use crate::codec::{ensure_remaining, read_bool, ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::types::VarUInt32;

/// Hotbar selection change.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHotbar {
    /// Hotbar slot (0-8).
    pub selected_hotbar_slot: u32,
    /// Container window ID (0 = inventory).
    pub container_id: u8,
    /// Whether the client should switch its held item to the slot.
    pub select_hotbar_slot: bool,
}

impl PlayerHotbar {
    /// Select `slot` in the player inventory and make it the held item.
    pub fn select(slot: u8) -> Self {
        Self {
            selected_hotbar_slot: slot as u32,
            container_id: 0,
            select_hotbar_slot: true,
        }
    }
}

impl ProtoEncode for PlayerHotbar {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarUInt32(self.selected_hotbar_slot).proto_encode(buf);
        buf.put_u8(self.container_id);
        buf.put_u8(self.select_hotbar_slot as u8);
    }
}

impl ProtoDecode for PlayerHotbar {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let selected_hotbar_slot = VarUInt32::proto_decode(buf)?.0;
        ensure_remaining(buf, 1)?;
        let container_id = buf.get_u8();
        let select_hotbar_slot = read_bool(buf)?;
        Ok(Self {
            selected_hotbar_slot,
            container_id,
            select_hotbar_slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn encode_select_slot_four() {
        let mut buf = BytesMut::new();
        PlayerHotbar::select(4).proto_encode(&mut buf);
        assert_eq!(&buf[..], &[0x04, 0x00, 0x01]);
    }

    #[test]
    fn decode_client_hotbar() {
        let mut data: &[u8] = &[0x08, 0x00, 0x00];
        let pkt = PlayerHotbar::proto_decode(&mut data).unwrap();
        assert_eq!(pkt.selected_hotbar_slot, 8);
        assert!(!pkt.select_hotbar_slot);
    }
}
