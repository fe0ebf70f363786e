//! AddActor (0x0D) — Server → Client.
//!
//! Spawns a non-player entity visible to the client.

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::packets::metadata::{encode_entity_metadata, EntityMetadataEntry};
use crate::packets::set_entity_link::EntityLink;
use crate::types::{VarLong, VarUInt32, VarUInt64, Vec3};

/// Spawn a non-player entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AddActor {
    pub entity_unique_id: i64,
    pub entity_runtime_id: u64,
    pub entity_type: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub head_yaw: f32,
    pub body_yaw: f32,
    pub metadata: Vec<EntityMetadataEntry>,
    pub links: Vec<EntityLink>,
}

impl ProtoEncode for AddActor {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        VarLong(self.entity_unique_id).proto_encode(buf);
        VarUInt64(self.entity_runtime_id).proto_encode(buf);
        write_string(buf, &self.entity_type);
        self.position.proto_encode(buf);
        self.velocity.proto_encode(buf);
        buf.put_f32_le(self.pitch);
        buf.put_f32_le(self.yaw);
        buf.put_f32_le(self.head_yaw);
        buf.put_f32_le(self.body_yaw);
        // Attributes
        VarUInt32(0).proto_encode(buf);
        encode_entity_metadata(buf, &self.metadata);
        // Entity sync properties (int count + float count)
        VarUInt32(0).proto_encode(buf);
        VarUInt32(0).proto_encode(buf);
        VarUInt32(self.links.len() as u32).proto_encode(buf);
        for link in &self.links {
            link.proto_encode(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::metadata::key;
    use bytes::BytesMut;

    fn shulker(links: Vec<EntityLink>) -> AddActor {
        AddActor {
            entity_unique_id: 7,
            entity_runtime_id: 7,
            entity_type: "minecraft:shulker".to_string(),
            position: Vec3::new(0.0, 71.0, 0.0),
            velocity: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            head_yaw: 0.0,
            body_yaw: 0.0,
            metadata: vec![EntityMetadataEntry::float(key::SCALE, 0.5)],
            links,
        }
    }

    #[test]
    fn encode_header_fields() {
        let mut buf = BytesMut::new();
        shulker(vec![]).proto_encode(&mut buf);
        // VarLong(7) = 14, VarUInt64(7) = 7, string length 17
        assert_eq!(&buf[..3], &[14, 7, 17]);
        assert_eq!(&buf[3..20], b"minecraft:shulker");
        assert_eq!(&buf[24..28], &71.0f32.to_le_bytes());
        // Trailing: sync int count, sync float count, link count
        assert_eq!(&buf[buf.len() - 3..], &[0, 0, 0]);
    }

    #[test]
    fn encode_with_link_is_longer() {
        let mut plain = BytesMut::new();
        shulker(vec![]).proto_encode(&mut plain);
        let mut linked = BytesMut::new();
        shulker(vec![EntityLink::passenger(1, 7)]).proto_encode(&mut linked);
        assert_eq!(linked.len(), plain.len() + 9);
    }
}
