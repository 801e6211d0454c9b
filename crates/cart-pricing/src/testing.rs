//! Test doubles shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use url::Url;

use crate::error::TransportError;
use crate::transport::PriceSource;

#[derive(Debug)]
enum Canned {
    Json(Value),
    Fail(String),
}

/// Price source answering every request the same way and recording URLs.
#[derive(Debug)]
pub(crate) struct CannedSource {
    response: Canned,
    urls: Mutex<Vec<String>>,
}

impl CannedSource {
    pub(crate) fn json(body: Value) -> Arc<Self> {
        Arc::new(CannedSource {
            response: Canned::Json(body),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(reason: &str) -> Arc<Self> {
        Arc::new(CannedSource {
            response: Canned::Fail(reason.to_string()),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().expect("urls mutex poisoned").clone()
    }
}

impl PriceSource for CannedSource {
    fn fetch_json(&self, url: &Url) -> Result<Value, TransportError> {
        self.urls
            .lock()
            .expect("urls mutex poisoned")
            .push(url.to_string());

        match &self.response {
            Canned::Json(body) => Ok(body.clone()),
            Canned::Fail(reason) => Err(TransportError::Decode {
                url: url.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
