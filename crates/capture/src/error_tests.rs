// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn panicked_exposes_partial_output() {
    let err = CaptureError::Panicked {
        message: "boom".to_string(),
        output: CaptureResult::new("before\n", ""),
    };
    assert_eq!(err.to_string(), "Captured unit of work panicked: boom");
    assert_eq!(err.output().map(CaptureResult::stdout), Some("before\n"));
}

#[test]
fn other_errors_have_no_output() {
    assert!(CaptureError::Nested.output().is_none());
    assert!(CaptureError::Busy.output().is_none());

    let err = CaptureError::Restore {
        stream: Stream::Stderr,
        source: nix::Error::EBADF,
    };
    assert!(err.output().is_none());
    assert!(err.to_string().starts_with("Failed to restore stderr"));
}
