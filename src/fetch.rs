use log::info;
use reqwest::blocking::{Client, Response};
use reqwest::header::USER_AGENT;

use crate::error::DumpResult;

/// Issues a single GET for `url`, identifying the client through the
/// `User-Agent` header as the dump API requires. A non-success status is an
/// error; the caller consumes the returned body stream.
pub fn fetch_dump(client: &Client, url: &str, user_agent: &str) -> DumpResult<Response> {
    info!("Start download {} ...", url);

    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()?
        .error_for_status()?;

    response
        .content_length()
        .map_or_else(|| {}, |x| info!("Content {} bytes length.", x));

    Ok(response)
}
