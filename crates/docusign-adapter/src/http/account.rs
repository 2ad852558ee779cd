/*
[INPUT]:  Access token and configured account id
[OUTPUT]: Account-specific eSignature base URI
[POS]:    HTTP layer - account discovery endpoint
[UPDATE]: When account selection rules change
*/

use reqwest::Method;
use tracing::{error, warn};

use crate::auth::AccessToken;
use crate::http::{DocusignClient, DocusignError, Result};
use crate::types::UserInfo;

impl DocusignClient {
    /// Resolve the eSignature base URI for the authenticated user.
    ///
    /// GET /oauth/userinfo
    ///
    /// The first account in the userinfo response wins. A mismatch against
    /// the configured account id is logged rather than rejected, since
    /// envelope calls address the configured account explicitly.
    pub async fn resolve_account_base_uri(
        &self,
        access_token: &AccessToken,
        configured_account_id: &str,
    ) -> Result<String> {
        let user_info = match self.fetch_user_info(access_token).await {
            Ok(user_info) => user_info,
            Err(err) => {
                error!(error = %err, "userinfo lookup failed");
                return Err(DocusignError::AccountLookup);
            }
        };

        let Some(account) = user_info.accounts.first() else {
            error!("userinfo response contained no accounts");
            return Err(DocusignError::AccountLookup);
        };

        if user_info.accounts.len() > 1 {
            warn!(
                count = user_info.accounts.len(),
                selected = %account.account_id,
                "userinfo returned multiple accounts, using the first"
            );
        }

        if account.account_id != configured_account_id {
            warn!(
                resolved = %account.account_id,
                configured = %configured_account_id,
                "first userinfo account does not match the configured account id"
            );
        }

        Ok(account.base_uri.clone())
    }

    async fn fetch_user_info(&self, access_token: &AccessToken) -> Result<UserInfo> {
        let builder = self
            .auth_request(Method::GET, "/oauth/userinfo")?
            .bearer_auth(access_token.value());
        self.send_json(builder).await
    }
}
