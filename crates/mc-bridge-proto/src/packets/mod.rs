//! Bedrock Edition packets handled by the bridge.

pub mod add_actor;
pub mod block_pick_request;
pub mod metadata;
pub mod player_hotbar;
pub mod remove_entity;
pub mod set_entity_link;

pub use add_actor::AddActor;
pub use block_pick_request::BlockPickRequest;
pub use metadata::{EntityMetadataEntry, MetadataValue};
pub use player_hotbar::PlayerHotbar;
pub use remove_entity::RemoveEntity;
pub use set_entity_link::{EntityLink, EntityLinkType, SetEntityLink};

use bytes::{Buf, Bytes};

use crate::codec::{encode_packet, ProtoDecode};
use crate::error::ProtoError;

/// Game packet IDs.
pub mod id {
    pub const ADD_ACTOR: u32 = 0x0D;
    pub const REMOVE_ENTITY: u32 = 0x0E;
    pub const BLOCK_PICK_REQUEST: u32 = 0x22;
    pub const SET_ENTITY_LINK: u32 = 0x29;
    pub const PLAYER_HOTBAR: u32 = 0x30;
}

/// A decoded client → bridge packet.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerboundPacket {
    BlockPickRequest(BlockPickRequest),
}

impl ServerboundPacket {
    /// Decode a packet body given its header ID.
    pub fn decode(packet_id: u32, buf: &mut impl Buf) -> Result<Self, ProtoError> {
        match packet_id {
            id::BLOCK_PICK_REQUEST => Ok(Self::BlockPickRequest(
                BlockPickRequest::proto_decode(buf)?,
            )),
            other => Err(ProtoError::UnknownPacketId(other)),
        }
    }
}

/// A bridge → client packet.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientboundPacket {
    PlayerHotbar(PlayerHotbar),
    AddActor(AddActor),
    SetEntityLink(SetEntityLink),
    RemoveEntity(RemoveEntity),
}

impl ClientboundPacket {
    pub fn id(&self) -> u32 {
        match self {
            Self::PlayerHotbar(_) => id::PLAYER_HOTBAR,
            Self::AddActor(_) => id::ADD_ACTOR,
            Self::SetEntityLink(_) => id::SET_ENTITY_LINK,
            Self::RemoveEntity(_) => id::REMOVE_ENTITY,
        }
    }

    /// Encode with the packet header, ready for batching.
    pub fn encode(&self) -> Bytes {
        match self {
            Self::PlayerHotbar(p) => encode_packet(self.id(), p),
            Self::AddActor(p) => encode_packet(self.id(), p),
            Self::SetEntityLink(p) => encode_packet(self.id(), p),
            Self::RemoveEntity(p) => encode_packet(self.id(), p),
        }
    }
}
