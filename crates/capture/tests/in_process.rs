// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Captures of descriptors 1 and 2 inside the test process.
//!
//! The harness reports results on stdout from its own thread, so this binary
//! holds a single test: nothing else can finish while a window is open.
//! Writes go through `std::io` handles because `println!` is intercepted by
//! the harness before it reaches descriptor 1.

use catch_output::{capture_output, capture_with, Capture, CaptureResult};
use nix::sys::stat::fstat;
use std::io::Write;
use std::process::Command;

/// Identity of the file a descriptor currently refers to
fn identity(fd: i32) -> (u64, u64) {
    let stat = fstat(fd).unwrap();
    (stat.st_dev as u64, stat.st_ino as u64)
}

fn out(text: &str) {
    std::io::stdout().write_all(text.as_bytes()).unwrap();
}

fn err(text: &str) {
    std::io::stderr().write_all(text.as_bytes()).unwrap();
}

#[test]
fn captures_process_stdout_and_stderr() {
    let real_stdout = identity(1);
    let real_stderr = identity(2);

    // Both streams, separated
    let output = capture_output(|| {
        out("A\n");
        err("B\n");
    })
    .unwrap();
    assert_eq!(output, CaptureResult::new("A\n", "B\n"));

    // Text without a trailing newline is flushed into the window
    let output = capture_output(|| out("hello")).unwrap();
    assert_eq!(output.stdout(), "hello");
    assert_eq!(output.stderr(), "");

    // Nothing written
    let output = capture_output(|| {}).unwrap();
    assert_eq!(output.stdout(), "");
    assert_eq!(output.stderr(), "");

    // Writes outside the window stay on the real channel
    out("catch-output: before window\n");
    let output = capture_output(|| out("inside\n")).unwrap();
    out("catch-output: after window\n");
    assert_eq!(output.stdout(), "inside\n");

    // Including writes from another thread that finishes before the window
    // opens or starts after it closes
    let writer = |label: &'static str| {
        std::thread::spawn(move || {
            out(&format!("catch-output: {label} from writer thread\n"));
            err(&format!("catch-output: {label} from writer thread\n"));
        })
        .join()
        .unwrap();
    };
    writer("before window");
    let output = capture_output(|| out("window\n")).unwrap();
    writer("after window");
    assert_eq!(output, CaptureResult::new("window\n", ""));
    assert!(!output.stdout().contains("writer thread"));

    // Work value is handed back alongside the output
    let (len, output) = capture_with(|| {
        out("counted");
        "counted".len()
    })
    .unwrap();
    assert_eq!(len, 7);
    assert_eq!(output.stdout(), "counted");

    // Child processes inherit the diverted descriptors
    let (status, output) = capture_with(|| {
        Command::new("sh")
            .args(["-c", "echo child; echo child-err >&2"])
            .status()
    })
    .unwrap();
    assert!(status.unwrap().success());
    assert_eq!(output, CaptureResult::new("child\n", "child-err\n"));

    // A disabled stream is left alone
    let output = Capture::new()
        .stderr(false)
        .run(|| {
            out("kept\n");
            err("catch-output: uncaptured stderr\n");
        })
        .unwrap();
    assert_eq!(output, CaptureResult::new("kept\n", ""));

    assert_eq!(identity(1), real_stdout);
    assert_eq!(identity(2), real_stderr);
}
