// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    stdout = { Stream::Stdout, 1, "stdout" },
    stderr = { Stream::Stderr, 2, "stderr" },
    other = { Stream::Fd(7), 7, "fd 7" },
)]
fn descriptor_and_name(stream: Stream, fd: RawFd, name: &str) {
    assert_eq!(stream.fd(), fd);
    assert_eq!(stream.name(), name);
    assert_eq!(stream.to_string(), name);
}
