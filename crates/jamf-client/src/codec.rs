//! Payload codecs for the two API families.
//!
//! The Classic API speaks XML, the Jamf Pro API speaks JSON. The codec is a
//! value picked once per endpoint family (see the endpoint registry in
//! `jamfpro-api`), so request code never branches on the format itself.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// Body format of a request; see `RequestBody::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Xml,
    Json,
    /// `multipart/form-data` file uploads.
    Multipart,
    /// No body.
    None,
}

/// Serializer/deserializer pair for one API family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Classic API. Element names come from each resource's serde attributes;
    /// `None` fields must be marked `skip_serializing_if` so no empty tags are sent.
    Xml,
    /// Jamf Pro API. Unknown response fields are ignored.
    Json,
}

impl Codec {
    /// Content kind produced by this codec.
    pub fn kind(&self) -> ContentKind {
        match self {
            Codec::Xml => ContentKind::Xml,
            Codec::Json => ContentKind::Json,
        }
    }

    /// `Content-Type` / `Accept` value for this codec.
    pub fn content_type(&self) -> &'static str {
        match self {
            Codec::Xml => "application/xml",
            Codec::Json => "application/json",
        }
    }

    /// Serialize a payload.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        match self {
            Codec::Xml => quick_xml::se::to_string(value)
                .map(Bytes::from)
                .map_err(|e| Error::with_source(ErrorKind::Encoding(e.to_string()), e)),
            Codec::Json => serde_json::to_vec(value)
                .map(Bytes::from)
                .map_err(|e| Error::with_source(ErrorKind::Encoding(e.to_string()), e)),
        }
    }

    /// Deserialize a success response body.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        match self {
            Codec::Xml => {
                let text = std::str::from_utf8(body)
                    .map_err(|e| Error::with_source(ErrorKind::Decoding(e.to_string()), e))?;
                quick_xml::de::from_str(text)
                    .map_err(|e| Error::with_source(ErrorKind::Decoding(e.to_string()), e))
            }
            Codec::Json => serde_json::from_slice(body)
                .map_err(|e| Error::with_source(ErrorKind::Decoding(e.to_string()), e)),
        }
    }
}
