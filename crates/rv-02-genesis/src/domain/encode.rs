//! Consensus serialization.

use shared_types::{encode_compact_size, Hash256};

/// Byte-exact consensus encoding.
pub trait Encodable {
    fn encode(&self, out: &mut Vec<u8>);

    fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

impl Encodable for Hash256 {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl<T: Encodable> Encodable for [T] {
    fn encode(&self, out: &mut Vec<u8>) {
        encode_compact_size(self.len() as u64, out);
        for item in self {
            item.encode(out);
        }
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self, out: &mut Vec<u8>) {
        self.as_slice().encode(out);
    }
}
