// src/core/net.rs
//
// Blocking HTTP GET behind a small trait, so the fetcher can run against a
// canned transport in tests.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::config::options::FetchOptions;
use crate::error::{FetchError, Result};

/// Status + body of a completed request. Non-200 is not an error here.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, FetchError>;
}

/// reqwest-backed transport with the fixed header set and timeout.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (USER_AGENT, &opts.user_agent),
            (ACCEPT_LANGUAGE, &opts.accept_language),
            (ACCEPT, &opts.accept),
        ] {
            match HeaderValue::from_str(value) {
                Ok(v) => { headers.insert(name, v); }
                Err(e) => logw!("Net: Skipping header {}: {}", name, e),
            }
        }

        let client = Client::builder()
            .timeout(opts.timeout)
            .default_headers(headers)
            .build()?;
        logd!("Net: Client ready (timeout={:?})", opts.timeout);
        Ok(Self { client })
    }
}

impl Transport for HttpClient {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
