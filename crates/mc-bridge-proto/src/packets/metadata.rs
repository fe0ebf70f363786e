//! Entity metadata (actor data) entries carried by AddActor.

use bytes::BufMut;

use crate::codec::{write_string, ProtoEncode};
use crate::types::{VarInt, VarLong, VarUInt32};

/// Metadata keys used by the bridge.
pub mod key {
    pub const FLAGS: u32 = 0;
    pub const NAMETAG: u32 = 4;
    pub const SCALE: u32 = 23;
    pub const BOUNDING_BOX_WIDTH: u32 = 38;
    pub const BOUNDING_BOX_HEIGHT: u32 = 39;
}

/// Bit positions inside the FLAGS entry.
pub mod flag {
    pub const BABY: u32 = 11;
    pub const NO_AI: u32 = 16;
}

/// Wire data type IDs.
pub mod data_type {
    pub const BYTE: u32 = 0;
    pub const SHORT: u32 = 1;
    pub const INT: u32 = 2;
    pub const FLOAT: u32 = 3;
    pub const STRING: u32 = 4;
    pub const LONG: u32 = 7;
}

/// Entity metadata value types.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Byte(u8),
    Short(i16),
    Int(i32),
    Float(f32),
    String(String),
    Long(i64),
}

impl MetadataValue {
    fn data_type(&self) -> u32 {
        match self {
            Self::Byte(_) => data_type::BYTE,
            Self::Short(_) => data_type::SHORT,
            Self::Int(_) => data_type::INT,
            Self::Float(_) => data_type::FLOAT,
            Self::String(_) => data_type::STRING,
            Self::Long(_) => data_type::LONG,
        }
    }
}

/// A single entity metadata entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMetadataEntry {
    pub key: u32,
    pub value: MetadataValue,
}

impl EntityMetadataEntry {
    pub fn float(key: u32, value: f32) -> Self {
        Self {
            key,
            value: MetadataValue::Float(value),
        }
    }

    /// FLAGS entry with the given bit positions set.
    pub fn flags(bits: &[u32]) -> Self {
        let value = bits.iter().fold(0i64, |acc, bit| acc | (1i64 << bit));
        Self {
            key: key::FLAGS,
            value: MetadataValue::Long(value),
        }
    }
}

/// Encode a metadata list (count + entries).
pub fn encode_entity_metadata(buf: &mut impl BufMut, entries: &[EntityMetadataEntry]) {
    VarUInt32(entries.len() as u32).proto_encode(buf);
    for entry in entries {
        VarUInt32(entry.key).proto_encode(buf);
        VarUInt32(entry.value.data_type()).proto_encode(buf);
        match &entry.value {
            MetadataValue::Byte(v) => buf.put_u8(*v),
            MetadataValue::Short(v) => buf.put_i16_le(*v),
            MetadataValue::Int(v) => VarInt(*v).proto_encode(buf),
            MetadataValue::Float(v) => buf.put_f32_le(*v),
            MetadataValue::String(v) => write_string(buf, v),
            MetadataValue::Long(v) => VarLong(*v).proto_encode(buf),
        }
    }
}
