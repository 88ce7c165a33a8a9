use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{BufRead, Write};

/// Encode an object's payload (without the type/size frame)
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Decode an object from its payload (the frame has already been consumed)
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn framed(&self) -> Result<Bytes> {
        frame(self.object_type(), &self.serialize()?)
    }

    fn object_id(&self) -> Result<ObjectId> {
        hash_framed(&self.framed()?)
    }
}

/// Prefix `payload` with its `<type> <size>\0` header
pub fn frame(object_type: ObjectType, payload: &[u8]) -> Result<Bytes> {
    let mut framed = Vec::with_capacity(payload.len() + 16);
    write!(framed, "{} {}\0", object_type.as_str(), payload.len())?;
    framed.write_all(payload)?;

    Ok(Bytes::from(framed))
}

pub fn hash_framed(framed: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(framed);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
