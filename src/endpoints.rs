// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! The three endpoints exposed by the server under test.

use crate::config::Config;
use thiserror::Error;
use url::Url;

/// Symbolic endpoint names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Main site, plain HTTP
    HttpMain,
    /// Error site, plain HTTP
    HttpError,
    /// Main site over TLS
    HttpsSecure,
}

impl Endpoint {
    /// All endpoints, in the order they are checked.
    pub const ALL: [Endpoint; 3] = [Self::HttpMain, Self::HttpError, Self::HttpsSecure];

    fn scheme(self) -> &'static str {
        match self {
            Self::HttpMain | Self::HttpError => "http",
            Self::HttpsSecure => "https",
        }
    }

    fn port(self, config: &Config) -> u16 {
        match self {
            Self::HttpMain => config.main_port,
            Self::HttpError => config.error_port,
            Self::HttpsSecure => config.secure_port,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpMain => write!(f, "HTTP_MAIN"),
            Self::HttpError => write!(f, "HTTP_ERROR"),
            Self::HttpsSecure => write!(f, "HTTPS_SECURE"),
        }
    }
}

/// Endpoint set construction errors.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("Invalid URL for {endpoint} ({raw}): {source}")]
    InvalidUrl {
        endpoint: Endpoint,
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

/// Immutable mapping from endpoint names to URLs.
#[derive(Debug, Clone)]
pub struct EndpointSet {
    main: Url,
    error: Url,
    secure: Url,
}

impl EndpointSet {
    /// Build the endpoint set from the configured host and ports.
    pub fn from_config(config: &Config) -> Result<Self, EndpointError> {
        let build = |endpoint: Endpoint| {
            let raw = format!(
                "{}://{}:{}",
                endpoint.scheme(),
                config.host,
                endpoint.port(config)
            );
            Url::parse(&raw).map_err(|source| EndpointError::InvalidUrl {
                endpoint,
                raw,
                source,
            })
        };

        Ok(Self {
            main: build(Endpoint::HttpMain)?,
            error: build(Endpoint::HttpError)?,
            secure: build(Endpoint::HttpsSecure)?,
        })
    }

    /// URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::HttpMain => &self.main,
            Endpoint::HttpError => &self.error,
            Endpoint::HttpsSecure => &self.secure,
        }
    }

    /// Port of an endpoint. Always known since every URL has an explicit
    /// or scheme-default port.
    pub fn port(&self, endpoint: Endpoint) -> u16 {
        self.url(endpoint).port_or_known_default().unwrap_or_default()
    }
}
