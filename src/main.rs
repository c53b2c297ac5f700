// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Deployment Verifier
//!
//! Checks a running nginx deployment from inside its container network
//! and exits 0 when every check passes, 1 when any check fails, 2 when the
//! run could not start. Exit code 2 also covers command-line usage errors
//! reported by clap; CI gates must treat any non-zero code as failure.
//!
//! ## Usage
//!
//! With no flags the lab defaults apply: host `nginx-server`, ports
//! 8080/8081/443, a 2 s warm-up, 5 s request timeouts and a 20-request
//! burst with 1 s timeouts. Each of these can be overridden on the
//! command line. Log verbosity follows `RUST_LOG` (default: warn); logs
//! go to stderr, the report to stdout.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use deploy_verifier::{config, console::Console, Config, Runner};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deploy-verifier",
    version,
    about = "Verify status codes, TLS and rate limiting of a deployed web server"
)]
struct Args {
    /// Host serving all endpoints
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    /// Port expected to answer 200
    #[arg(long, default_value_t = config::DEFAULT_MAIN_PORT)]
    main_port: u16,

    /// Port expected to answer 500
    #[arg(long, default_value_t = config::DEFAULT_ERROR_PORT)]
    error_port: u16,

    /// TLS port expected to answer 200
    #[arg(long, default_value_t = config::DEFAULT_SECURE_PORT)]
    secure_port: u16,

    /// Warm-up delay before the first check (milliseconds)
    #[arg(long, default_value_t = config::DEFAULT_WARMUP_MS)]
    warmup_ms: u64,

    /// Timeout for status and TLS requests (milliseconds)
    #[arg(long, default_value_t = config::DEFAULT_REQUEST_TIMEOUT_MS)]
    request_timeout_ms: u64,

    /// Timeout for each burst request (milliseconds)
    #[arg(long, default_value_t = config::DEFAULT_BURST_REQUEST_TIMEOUT_MS)]
    burst_request_timeout_ms: u64,

    /// Requests sent while probing the rate limiter
    #[arg(
        long,
        default_value_t = config::DEFAULT_BURST_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    burst_size: u32,

    /// Validate the secure endpoint's certificate chain instead of
    /// accepting self-signed certificates
    #[arg(long)]
    strict_tls: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            host: args.host,
            main_port: args.main_port,
            error_port: args.error_port,
            secure_port: args.secure_port,
            warmup_ms: args.warmup_ms,
            request_timeout_ms: args.request_timeout_ms,
            burst_request_timeout_ms: args.burst_request_timeout_ms,
            burst_size: args.burst_size,
            accept_invalid_certs: !args.strict_tls,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    match run(Args::parse().into()) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{e:#}"), "verification could not start");
            ExitCode::from(2)
        }
    }
}

fn run(config: Config) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let _guard = runtime.enter();
    let runner = Runner::new(config)?;
    info!(
        host = %runner.config().host,
        burst_size = runner.config().burst_size,
        accept_invalid_certs = runner.config().accept_invalid_certs,
        "starting verification"
    );

    let mut console = Console::new(io::stdout().lock());
    let verdict = runtime.block_on(runner.run(&mut console));

    Ok(ExitCode::from(&verdict))
}
