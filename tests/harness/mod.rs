// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test harness for the deployment verifier.
//!
//! Stands up local stand-ins for the server under test: plain HTTP
//! endpoints with fixed or throttling behavior, and a TLS endpoint with a
//! self-signed certificate.

#![allow(dead_code)]

pub mod servers;
pub mod tls;

use deploy_verifier::{endpoints::EndpointSet, probe::Prober, Config};

/// Config pointing at local ports with no warm-up and short timeouts.
pub fn local_config(main_port: u16, error_port: u16, secure_port: u16) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        main_port,
        error_port,
        secure_port,
        warmup_ms: 0,
        request_timeout_ms: 2000,
        burst_request_timeout_ms: 1000,
        ..Default::default()
    }
}

/// Prober for local ports, accepting self-signed certificates.
pub fn local_prober(main_port: u16, error_port: u16, secure_port: u16) -> Prober {
    prober_for(&local_config(main_port, error_port, secure_port))
}

pub fn prober_for(config: &Config) -> Prober {
    let endpoints = EndpointSet::from_config(config).unwrap();
    Prober::new(endpoints, config.accept_invalid_certs).unwrap()
}
