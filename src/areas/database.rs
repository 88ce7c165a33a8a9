//! Content-addressed object database
//!
//! Objects are framed as `<type> <size>\0<payload>`, hashed with SHA-1, and
//! stored zlib-compressed under `objects/<first-2-chars>/<remaining-38-chars>`.
//! Writing an object that already exists is a no-op, so stores are idempotent.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{self, Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(object.object_type(), &object.serialize()?)
    }

    /// Store `payload` under the given type and return its content-derived id
    pub fn put(&self, object_type: ObjectType, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let framed = object::frame(object_type, payload)?;
        let object_id = object::hash_framed(&framed)?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::trace!(%object_id, %object_type, "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, framed)?;
        tracing::debug!(%object_id, %object_type, size = payload.len(), "stored object");

        Ok(object_id)
    }

    /// Load an object's payload, optionally checking its stored type
    pub fn load(
        &self,
        object_id: &ObjectId,
        expected: Option<ObjectType>,
    ) -> anyhow::Result<Bytes> {
        let (object_type, payload) = self.load_with_type(object_id)?;

        if let Some(expected) = expected
            && expected != object_type
        {
            return Err(RepositoryError::TypeMismatch {
                oid: object_id.to_string(),
                expected,
                actual: object_type,
            }
            .into());
        }

        Ok(payload)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (object_type, payload) = self.load_with_type(object_id)?;
        let reader = Cursor::new(payload);

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(reader)?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        self.parse_object_as(object_id, ObjectType::Blob)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        self.parse_object_as(object_id, ObjectType::Tree)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        self.parse_object_as(object_id, ObjectType::Commit)
    }

    fn parse_object_as<T: Unpackable>(
        &self,
        object_id: &ObjectId,
        object_type: ObjectType,
    ) -> anyhow::Result<T> {
        let payload = self.load(object_id, Some(object_type))?;

        T::deserialize(Cursor::new(payload))
            .with_context(|| format!("Unable to parse {object_type} {object_id}"))
    }

    fn load_with_type(&self, object_id: &ObjectId) -> anyhow::Result<(ObjectType, Bytes)> {
        let object_path = self.path.join(object_id.to_path());
        if !object_path.is_file() {
            return Err(RepositoryError::ObjectNotFound(object_id.to_string()).into());
        }

        let framed = self.read_object(object_path)?;
        let corrupt = |reason: String| RepositoryError::CorruptObject {
            oid: object_id.to_string(),
            reason,
        };

        let mut reader = Cursor::new(framed);
        let (object_type, size) =
            ObjectType::parse_header(&mut reader).map_err(|e| corrupt(e.to_string()))?;

        let offset = reader.position() as usize;
        let framed = reader.into_inner();
        let payload = framed.slice(offset..);
        if payload.len() != size {
            return Err(corrupt(format!(
                "header declares {size} bytes, found {}",
                payload.len()
            ))
            .into());
        }

        Ok((object_type, payload))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
