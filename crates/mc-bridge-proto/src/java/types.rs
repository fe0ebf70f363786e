//! Java Edition primitive types.

use bytes::{Buf, BufMut};

use crate::codec::{ProtoDecode, ProtoEncode};
use crate::error::ProtoError;
use crate::types::{read_leb128, write_leb128};

/// Java VarInt: i32 reinterpreted as u32, LEB128, at most 5 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaVarInt(pub i32);

impl JavaVarInt {
    pub const MAX_BYTES: usize = 5;
}

impl ProtoEncode for JavaVarInt {
    fn proto_encode(&self, buf: &mut impl BufMut) {
        write_leb128(buf, self.0 as u32 as u64);
    }
}

impl ProtoDecode for JavaVarInt {
    fn proto_decode(buf: &mut impl Buf) -> Result<Self, ProtoError> {
        let raw = read_leb128(buf, Self::MAX_BYTES)?;
        Ok(JavaVarInt(raw as u32 as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn negative_one_takes_five_bytes() {
        let mut buf = BytesMut::new();
        JavaVarInt(-1).proto_encode(&mut buf);
        assert_eq!(&buf[..], &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        let decoded = JavaVarInt::proto_decode(&mut &buf[..]).unwrap();
        assert_eq!(decoded.0, -1);
    }

    #[test]
    fn small_values_are_not_zigzagged() {
        let mut buf = BytesMut::new();
        JavaVarInt(1).proto_encode(&mut buf);
        assert_eq!(&buf[..], &[0x01]);
    }
}
