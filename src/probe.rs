// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP client used by every check.
//!
//! One client talks to the plain HTTP endpoints, a second one is reserved
//! for the TLS endpoint so that the certificate policy never leaks into
//! the plain checks.

use crate::endpoints::{Endpoint, EndpointSet};
use crate::error::CheckError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Issues single GET requests against the endpoint set.
pub struct Prober {
    endpoints: EndpointSet,
    plain: Client,
    secure: Client,
}

impl Prober {
    /// Create a prober. `accept_invalid_certs` disables certificate
    /// validation for the secure endpoint only.
    pub fn new(endpoints: EndpointSet, accept_invalid_certs: bool) -> Result<Self, reqwest::Error> {
        if accept_invalid_certs {
            warn!(
                endpoint = %endpoints.url(Endpoint::HttpsSecure),
                "TLS certificate validation disabled for secure endpoint"
            );
        }

        Ok(Self {
            endpoints,
            plain: Client::builder().build()?,
            secure: Client::builder()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .build()?,
        })
    }

    /// Endpoints this prober targets.
    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// GET an endpoint once and return the response status.
    ///
    /// The body is discarded. Any failure to obtain a response within
    /// `timeout` is a [`CheckError::Transport`].
    pub async fn get(&self, endpoint: Endpoint, timeout: Duration) -> Result<StatusCode, CheckError> {
        let url = self.endpoints.url(endpoint);
        let client = match endpoint {
            Endpoint::HttpsSecure => &self.secure,
            Endpoint::HttpMain | Endpoint::HttpError => &self.plain,
        };

        match client.get(url.clone()).timeout(timeout).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(%endpoint, %url, status = status.as_u16(), "response received");
                Ok(status)
            }
            Err(source) => {
                debug!(%endpoint, %url, error = %source, "request failed");
                Err(CheckError::Transport {
                    endpoint,
                    port: self.endpoints.port(endpoint),
                    source,
                })
            }
        }
    }
}
