// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable progress report.
//!
//! Stdout carries the report for whoever reads the CI log; diagnostics go
//! through `tracing` to stderr.

use std::fmt::Display;
use std::io::Write;
use tracing::warn;

/// Line-oriented report writer.
pub struct Console<W: Write> {
    out: W,
    sections: usize,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    /// Start a new check section. Sections after the first are separated
    /// by a blank line.
    pub fn section(&mut self, title: &str) {
        let separator = if self.sections == 0 { "" } else { "\n" };
        self.sections += 1;
        self.line(format_args!("{separator}--- {title} ---"));
    }

    pub fn info(&mut self, message: impl Display) {
        self.line(message);
    }

    pub fn pass(&mut self, message: impl Display) {
        self.line(format_args!("[PASS] {message}"));
    }

    pub fn fail(&mut self, message: impl Display) {
        self.line(format_args!("[FAIL] {message}"));
    }

    /// Report a failure where no response was obtained at all.
    pub fn error(&mut self, message: impl Display) {
        self.line(format_args!("[ERROR] {message}"));
    }

    /// Print the final banner.
    pub fn verdict(&mut self, passed: bool) {
        if passed {
            self.line("\nVERDICT: ALL TESTS PASSED");
        } else {
            self.line("\nVERDICT: SOME TESTS FAILED");
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, message: impl Display) {
        // A closed stdout must not change the verdict
        if let Err(e) = writeln!(self.out, "{message}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write report line");
        }
    }
}
