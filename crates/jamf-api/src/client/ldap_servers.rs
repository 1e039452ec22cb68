use tracing::instrument;

use jamfpro_client::security::path as path_security;
use jamfpro_client::Result;

use crate::ldap_servers::{LdapGroupSearch, LdapServer, LdapServersList};
use crate::registry::Target;

const RESOURCE: &str = "ldapservers";

impl super::JamfProClient {
    /// List all LDAP servers (ID and name only).
    ///
    /// This is equivalent to calling `GET /JSSResource/ldapservers`.
    #[instrument(skip(self))]
    pub async fn list_ldap_servers(&self) -> Result<LdapServersList> {
        self.classic_get(RESOURCE, Target::Collection).await
    }

    /// Get an LDAP server by ID.
    ///
    /// This is equivalent to calling `GET /JSSResource/ldapservers/id/{id}`.
    #[instrument(skip(self))]
    pub async fn get_ldap_server_by_id(&self, id: i64) -> Result<LdapServer> {
        self.classic_get(RESOURCE, Target::id(id)).await
    }

    /// Get an LDAP server by name.
    ///
    /// This is equivalent to calling `GET /JSSResource/ldapservers/name/{name}`.
    #[instrument(skip(self))]
    pub async fn get_ldap_server_by_name(&self, name: &str) -> Result<LdapServer> {
        self.classic_get(RESOURCE, Target::name(name)).await
    }

    /// Search the groups an LDAP server knows for `group`.
    ///
    /// This is equivalent to calling `GET /JSSResource/ldapservers/id/{id}/group/{group}`.
    #[instrument(skip(self))]
    pub async fn get_ldap_server_groups(&self, id: i64, group: &str) -> Result<LdapGroupSearch> {
        let subpath = format!("id/{}/group/{}", id, path_security::encode_segment(group));
        self.classic_get(RESOURCE, Target::Subpath(subpath)).await
    }

    /// Create an LDAP server, returning the new ID.
    ///
    /// This is equivalent to calling `POST /JSSResource/ldapservers/id/0`.
    #[instrument(skip(self, server))]
    pub async fn create_ldap_server(&self, server: &LdapServer) -> Result<i64> {
        self.classic_create(RESOURCE, server).await
    }

    /// Update an LDAP server by ID, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/ldapservers/id/{id}`.
    #[instrument(skip(self, server))]
    pub async fn update_ldap_server_by_id(&self, id: i64, server: &LdapServer) -> Result<i64> {
        self.classic_update(RESOURCE, Target::id(id), server).await
    }

    /// Update an LDAP server by name, returning its ID.
    ///
    /// This is equivalent to calling `PUT /JSSResource/ldapservers/name/{name}`.
    #[instrument(skip(self, server))]
    pub async fn update_ldap_server_by_name(&self, name: &str, server: &LdapServer) -> Result<i64> {
        self.classic_update(RESOURCE, Target::name(name), server).await
    }

    /// Delete an LDAP server by ID.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/ldapservers/id/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_ldap_server_by_id(&self, id: i64) -> Result<()> {
        self.classic_delete(RESOURCE, Target::id(id)).await
    }

    /// Delete an LDAP server by name.
    ///
    /// This is equivalent to calling `DELETE /JSSResource/ldapservers/name/{name}`.
    #[instrument(skip(self))]
    pub async fn delete_ldap_server_by_name(&self, name: &str) -> Result<()> {
        self.classic_delete(RESOURCE, Target::name(name)).await
    }
}
