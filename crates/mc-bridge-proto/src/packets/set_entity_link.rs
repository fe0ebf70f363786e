//! SetEntityLink (0x29) — Server → Client.
//!
//! Mounts one entity on another (or removes the link).

use bytes::BufMut;

use crate::codec::ProtoEncode;
use crate::types::VarLong;

/// Kind of link between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLinkType {
    Remove = 0,
    Rider = 1,
    Passenger = 2,
}

/// A link between two entities, also embedded in AddActor.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityLink {
    pub from_unique_id: i64,
    pub to_unique_id: i64,
    pub link_type: EntityLinkType,
    pub immediate: bool,
    pub rider_initiated: bool,
    pub vehicle_angular_velocity: f32,
}

impl EntityLink {
    /// `to` rides `from` as a passenger.
    pub fn passenger(from_unique_id: i64, to_unique_id: i64) -> Self {
        Self {
            from_unique_id,
            to_unique_id,
            link_type: EntityLinkType::Passenger,
            immediate: false,
            rider_initiated: false,
            vehicle_angular_velocity: 0.0,
        }
    }
}

impl ProtoEncode for EntityLink {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarLong(self.from_unique_id).proto_encode(buf);
        VarLong(self.to_unique_id).proto_encode(buf);
        buf.put_u8(self.link_type as u8);
        buf.put_u8(self.immediate as u8);
        buf.put_u8(self.rider_initiated as u8);
        buf.put_f32_le(self.vehicle_angular_velocity);
    }
}

/// Link packet wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct SetEntityLink {
    pub link: EntityLink,
}

impl ProtoEncode for SetEntityLink {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        self.link.proto_encode(buf);
    }
}
