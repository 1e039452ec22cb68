use tracing::instrument;

use jamfpro_client::Result;

use super::RequestDescriptor;
use crate::registry::Target;
use crate::sso_failover::SsoFailover;

const RESOURCE: &str = "sso-failover";

impl super::JamfProClient {
    /// Current SSO failover URL.
    ///
    /// This is equivalent to calling `GET /api/v1/sso/failover`.
    #[instrument(skip(self))]
    pub async fn get_sso_failover(&self) -> Result<SsoFailover> {
        self.execute::<(), _>(&RequestDescriptor::get(RESOURCE, Target::Collection), None)
            .await
    }

    /// Generate a new failover URL; the previous one stops working.
    ///
    /// This is equivalent to calling `POST /api/v1/sso/failover/generate`.
    #[instrument(skip(self))]
    pub async fn regenerate_sso_failover(&self) -> Result<SsoFailover> {
        let descriptor = RequestDescriptor::post(RESOURCE, Target::Subpath("generate".to_string()));
        self.execute::<(), _>(&descriptor, None).await
    }
}
