use std::path::Path;

use tracing::{debug, instrument};

use jamfpro_client::{RequestBody, RequestMethod, Result, UploadDescriptor};

impl super::JamfProClient {
    /// Upload files as attachments of a Classic resource.
    ///
    /// `files` maps form field names to local paths. Every file is read before
    /// the request is built; if any of them cannot be read the call fails with
    /// `ErrorKind::FileRead` naming that path and nothing is sent.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// client
    ///     .upload_files("policies", "id", "42", [("name", "/tmp/icon.png")])
    ///     .await?;
    /// ```
    ///
    /// This is equivalent to calling
    /// `POST /JSSResource/fileuploads/{resource}/{idType}/{id}?FORCE_IPA_UPLOAD=…`.
    #[instrument(skip(self, files))]
    pub async fn upload_files<K, P, I>(
        &self,
        resource: &str,
        id_type: &str,
        id: &str,
        files: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: AsRef<Path>,
    {
        let descriptor = UploadDescriptor::from_paths(resource, id_type, id, files).await?;
        self.upload(&descriptor).await
    }

    /// Send a prepared upload.
    ///
    /// This is equivalent to calling `POST /JSSResource/fileuploads/{resource}/{idType}/{id}`
    /// with the descriptor's files as a multipart form.
    #[instrument(skip(self, descriptor), fields(resource = %descriptor.resource()))]
    pub async fn upload(&self, descriptor: &UploadDescriptor) -> Result<()> {
        let path = descriptor.endpoint_path();
        debug!(files = descriptor.file_count(), path = %path, "Uploading files");

        self.dispatch(
            RequestMethod::Post,
            &path,
            "application/xml",
            || Ok(RequestBody::Multipart(descriptor.to_form())),
            |_| Ok(()),
        )
        .await
    }
}
