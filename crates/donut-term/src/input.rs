// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Non-blocking keyboard polling.
//
// The host loop asks one question once per frame: "did the user press a
// key since last frame?" `poll_key` answers it without blocking, via
// `poll()` with a zero timeout followed by a raw single-byte `read()`.
// No background thread, no event queue — between frames the process is
// asleep anyway, so there is nothing for a reader thread to overlap with.
//
// The mapping from bytes to keys is deliberately shallow. The program
// reacts to exactly three keystrokes (q, Q, Escape), all of which are
// single bytes in every terminal encoding. Multi-byte escape sequences
// (arrows, function keys) arrive as their individual bytes and are
// ignored by the host one byte per frame — harmless for a quit check.
//
// "No data available" is an expected non-error: `poll` timing out and
// `read` reporting EAGAIN both return `Ok(None)`. Anything else from
// `read` is a real error the host treats as fatal.

use std::io;

// ─── Key ─────────────────────────────────────────────────────────────────────

/// A single keystroke read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable (or control) character byte.
    Char(char),
    /// The Escape key (byte 27).
    Escape,
}

/// The ESC byte — either the Escape key or the start of a sequence we
/// don't decode.
const ESC: u8 = 0x1b;

impl Key {
    /// Decode a single raw input byte.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        if byte == ESC {
            Self::Escape
        } else {
            Self::Char(byte as char)
        }
    }
}

// ─── Polling ─────────────────────────────────────────────────────────────────

/// Poll stdin for a keystroke without blocking.
///
/// Returns `Ok(Some(key))` if a byte was pending, `Ok(None)` if no input
/// is available right now. Returns immediately in both cases.
///
/// # Errors
///
/// Returns an error if reading stdin fails for any reason other than
/// "no data available" (EAGAIN/EWOULDBLOCK) or an interrupting signal.
#[cfg(unix)]
pub fn poll_key() -> io::Result<Option<Key>> {
    use std::os::unix::io::AsRawFd;

    let fd = io::stdin().as_raw_fd();

    // Zero-timeout poll: is there anything to read?
    let ready = unsafe {
        let mut pfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };
        libc::poll(&raw mut pfd, 1, 0)
    };

    if ready < 0 {
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::Interrupted {
            return Ok(None);
        }
        return Err(err);
    }
    if ready == 0 {
        return Ok(None);
    }

    // Data pending — read one byte. VMIN=0 means this cannot block even
    // if the readiness report was spurious.
    let mut byte: u8 = 0;
    let n = unsafe { libc::read(fd, (&raw mut byte).cast::<libc::c_void>(), 1) };

    match n {
        1 => Ok(Some(Key::from_byte(byte))),
        0 => Ok(None),
        _ => {
            let err = io::Error::last_os_error();
            match err.kind() {
                io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => Ok(None),
                _ => Err(err),
            }
        }
    }
}

/// Non-unix fallback: no keyboard, the animation runs until killed.
#[cfg(not(unix))]
pub fn poll_key() -> io::Result<Option<Key>> {
    Ok(None)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
