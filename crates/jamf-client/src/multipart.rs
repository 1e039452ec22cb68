//! Multipart bodies for the Classic API file upload endpoint.
//!
//! Files are read completely before anything touches the network; a file that
//! cannot be read aborts the whole upload with `ErrorKind::FileRead`.

use std::collections::BTreeMap;
use std::path::Path;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::security::path as path_security;

/// Base path of the upload endpoint.
pub const FILE_UPLOADS_PATH: &str = "/JSSResource/fileuploads";

/// The one resource kind uploaded with `FORCE_IPA_UPLOAD=true`.
pub const FORCE_IPA_UPLOAD_RESOURCE: &str = "mobiledeviceapplicationsipa";

/// A single file part.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilePart {
    file_name: String,
    content: Bytes,
}

/// Everything needed to upload attachments to one resource.
#[derive(Debug, Clone)]
pub struct UploadDescriptor {
    resource: String,
    id_type: String,
    id: String,
    files: BTreeMap<String, FilePart>,
}

impl UploadDescriptor {
    /// Read every file and build the descriptor.
    ///
    /// `files` maps form field names to file paths. The resource and id type are
    /// validated before any file is read; the id is percent-encoded.
    pub async fn from_paths<K, P, I>(
        resource: impl Into<String>,
        id_type: impl Into<String>,
        id: impl Into<String>,
        files: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: AsRef<Path>,
    {
        let mut descriptor = Self::empty(resource.into(), id_type.into(), id.into())?;

        for (field, path) in files {
            let path = path.as_ref();
            let content = tokio::fs::read(path).await.map_err(|e| {
                Error::with_source(
                    ErrorKind::FileRead {
                        path: path.to_path_buf(),
                    },
                    e,
                )
            })?;
            descriptor.insert(field.into(), file_name_of(path), Bytes::from(content));
        }

        debug!(
            resource = %descriptor.resource,
            files = descriptor.files.len(),
            "Upload descriptor built"
        );
        Ok(descriptor)
    }

    /// Build a descriptor from in-memory contents.
    pub fn from_bytes<K, N, B, I>(
        resource: impl Into<String>,
        id_type: impl Into<String>,
        id: impl Into<String>,
        files: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, N, B)>,
        K: Into<String>,
        N: Into<String>,
        B: Into<Bytes>,
    {
        let mut descriptor = Self::empty(resource.into(), id_type.into(), id.into())?;
        for (field, file_name, content) in files {
            descriptor.insert(field.into(), file_name.into(), content.into());
        }
        Ok(descriptor)
    }

    fn empty(resource: String, id_type: String, id: String) -> Result<Self> {
        for (label, value) in [("resource", &resource), ("id type", &id_type)] {
            if !path_security::is_safe_segment(value) {
                return Err(Error::new(ErrorKind::InvalidInput(format!(
                    "invalid upload {}: {:?}",
                    label, value
                ))));
            }
        }
        if id.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "upload id must not be empty".to_string(),
            )));
        }
        Ok(Self {
            resource,
            id_type,
            id,
            files: BTreeMap::new(),
        })
    }

    fn insert(&mut self, field: String, file_name: String, content: Bytes) {
        self.files.insert(field, FilePart { file_name, content });
    }

    /// Resource kind, e.g. `computers` or `policies`.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Number of file parts.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Endpoint path, including the `FORCE_IPA_UPLOAD` flag.
    pub fn endpoint_path(&self) -> String {
        let force_ipa = self.resource == FORCE_IPA_UPLOAD_RESOURCE;
        format!(
            "{}/{}/{}/{}?FORCE_IPA_UPLOAD={}",
            FILE_UPLOADS_PATH,
            self.resource,
            self.id_type,
            path_security::encode_segment(&self.id),
            force_ipa
        )
    }

    /// Assemble the multipart form.
    pub fn to_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new();
        for (field, part) in &self.files {
            form = form.file(field.clone(), part.file_name.clone(), part.content.clone());
        }
        form
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

/// A `multipart/form-data` body with a random boundary.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<(String, String, Bytes)>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            boundary: format!("jamfpro-{}", uuid::Uuid::new_v4().simple()),
            parts: Vec::new(),
        }
    }

    /// Add a file part.
    pub fn file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        self.parts.push((field.into(), file_name.into(), content.into()));
        self
    }

    /// The boundary separating parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// `Content-Type` header value, including the boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode the form body.
    pub fn encode(&self) -> Bytes {
        let capacity = self
            .parts
            .iter()
            .map(|(field, name, content)| content.len() + field.len() + name.len() + 160)
            .sum::<usize>()
            + self.boundary.len()
            + 8;
        let mut body = BytesMut::with_capacity(capacity);

        for (field, file_name, content) in &self.parts {
            body.put_slice(b"--");
            body.put_slice(self.boundary.as_bytes());
            body.put_slice(b"\r\n");
            body.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    escape_quoted(field),
                    escape_quoted(file_name)
                )
                .as_bytes(),
            );
            body.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.put_slice(content);
            body.put_slice(b"\r\n");
        }
        body.put_slice(b"--");
        body.put_slice(self.boundary.as_bytes());
        body.put_slice(b"--\r\n");

        body.freeze()
    }
}

fn escape_quoted(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace(['\r', '\n'], " ")
}
