//! CalDAV client construction using libdav.

use anyhow::{Context, Result};
use http::Uri;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{client::legacy::Client, rt::TokioExecutor};
use libdav::CalDavClient;
use libdav::dav::WebDavClient;
use tower::ServiceBuilder;
use tower_http::{auth::AddAuthorization, follow_redirect::FollowRedirect};

/// Tower stack every caladd PUT goes through.
type HttpClient = FollowRedirect<
    AddAuthorization<
        Client<hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>, String>,
    >,
>;

pub type DavClient = CalDavClient<HttpClient>;

/// Connect to the CalDAV server named in `[caldav] url`.
///
/// Accepts `https://` and plain `http://` URLs for LAN-hosted Baikal or
/// Radicale setups. Credentials go out as basic auth on every request, and
/// redirects from the bare host to the DAV root are followed.
pub fn create_caldav_client(base_url: &str, username: &str, password: &str) -> Result<DavClient> {
    let uri: Uri = base_url
        .parse()
        .with_context(|| format!("Invalid base URL: {}", base_url))?;

    let https_connector = HttpsConnectorBuilder::new()
        .with_native_roots()
        .context("Failed to load native TLS roots")?
        .https_or_http()
        .enable_http1()
        .build();

    let http_client = Client::builder(TokioExecutor::new()).build(https_connector);

    let auth_client = AddAuthorization::basic(http_client, username, password);

    let client = ServiceBuilder::new()
        .layer(tower_http::follow_redirect::FollowRedirectLayer::new())
        .service(auth_client);

    let webdav = WebDavClient::new(uri, client);
    Ok(CalDavClient::new(webdav))
}

/// Build the href of an event resource inside a calendar collection.
pub fn event_href(collection_path: &str, event_uid: &str) -> String {
    let base = collection_path.trim_end_matches('/');
    let base = if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    };
    format!("{}/{}.ics", base, resource_name(event_uid))
}

/// Make a UID safe to use as a path segment.
fn resource_name(uid: &str) -> String {
    uid.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
