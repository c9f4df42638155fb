use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{
    errors::AuthError,
    types::{Credentials, Token},
    utils,
};

/// Requests an app access token with the OAuth 2.0 client-credentials grant.
///
/// Sends `grant_type=client_credentials` form-encoded to `token_url` with a
/// Basic authorization header built from the client id and secret.
///
/// # Arguments
///
/// * `client` - HTTP client shared for the whole run
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret of the registered application
///
/// # Returns
///
/// - `Ok(Token)` - The token parsed from a `200 OK` response
/// - `Err(AuthError::Rejected)` - Any other status, with the raw response body
/// - `Err(AuthError::Http)` - Network or transport failure
/// - `Err(AuthError::Decode)` - The success body had no usable `access_token`
///
/// # Example
///
/// ```
/// let token = request_token(&client, &config.token_url, &credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token, AuthError> {
    let response = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(AuthError::Rejected { status, body });
    }

    Ok(serde_json::from_str::<Token>(&body)?)
}
