use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Content address of the object
    ///
    /// Blobs hash their raw bytes and commits hash their identity fields, so
    /// the ID is independent of the on-disk encoding.
    fn object_id(&self) -> Result<ObjectId>;
}

/// SHA-1 over the concatenation of `parts`
pub fn hash_parts<'p>(parts: impl IntoIterator<Item = &'p [u8]>) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

/// Prefix `content` with the `<type> <size>\0` header
pub fn with_header(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());

    let mut object_bytes = Vec::with_capacity(header.len() + content.len());
    object_bytes.extend_from_slice(header.as_bytes());
    object_bytes.extend_from_slice(content);

    Bytes::from(object_bytes)
}
