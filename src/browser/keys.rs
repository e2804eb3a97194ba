use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::trace;

/// Navigation alphabet understood by the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Refresh,
    Quit,
    Ignored,
}

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

/// How long to wait for the rest of a CSI sequence after a lone ESC.
const ESCAPE_WINDOW: Duration = Duration::from_millis(2);

/// Raw keyboard bytes.
pub trait ByteSource {
    /// Block until one byte is available. `None` means the input is closed.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Return a byte only if one arrives within `window`.
    fn next_byte_within(&mut self, window: Duration) -> io::Result<Option<u8>>;
}

/// Read one keypress and classify it.
pub fn decode_key<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Command> {
    let Some(byte) = source.next_byte()? else {
        return Ok(Command::Quit);
    };
    if byte != ESC {
        return Ok(classify_byte(byte));
    }

    let Some(first) = source.next_byte_within(ESCAPE_WINDOW)? else {
        return Ok(Command::Ignored);
    };
    let Some(second) = source.next_byte_within(ESCAPE_WINDOW)? else {
        return Ok(Command::Ignored);
    };
    let cmd = match (first, second) {
        (b'[', b'C') => Command::Next,
        (b'[', b'D') => Command::Prev,
        _ => Command::Ignored,
    };
    trace!(first, second, ?cmd, "escape sequence");
    Ok(cmd)
}

fn classify_byte(byte: u8) -> Command {
    match byte {
        b'q' | b'Q' | CTRL_C => Command::Quit,
        b'r' | b'R' => Command::Refresh,
        b'a' | b'A' => Command::Prev,
        b'd' | b'D' => Command::Next,
        _ => Command::Ignored,
    }
}

/// Process stdin as a byte source. A reader thread pumps chunks into a
/// channel so the escape-sequence follow-up can use a bounded wait.
pub struct StdinBytes {
    rx: Option<Receiver<Vec<u8>>>,
    pending: VecDeque<u8>,
    closed: bool,
}

impl StdinBytes {
    pub fn new() -> Self {
        Self {
            rx: None,
            pending: VecDeque::new(),
            closed: false,
        }
    }

    fn receiver(&mut self) -> &Receiver<Vec<u8>> {
        self.rx.get_or_insert_with(|| {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                let mut stdin = io::stdin().lock();
                let mut buf = [0u8; 64];
                loop {
                    match stdin.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            if tx.send(buf[..n].to_vec()).is_err() {
                                break;
                            }
                        }
                    }
                }
            });
            rx
        })
    }

    fn take_pending(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

impl Default for StdinBytes {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinBytes {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.take_pending() {
            return Ok(Some(b));
        }
        if self.closed {
            return Ok(None);
        }
        match self.receiver().recv() {
            Ok(chunk) => {
                self.pending.extend(chunk);
                Ok(self.take_pending())
            }
            Err(_) => {
                self.closed = true;
                Ok(None)
            }
        }
    }

    fn next_byte_within(&mut self, window: Duration) -> io::Result<Option<u8>> {
        if let Some(b) = self.take_pending() {
            return Ok(Some(b));
        }
        if self.closed {
            return Ok(None);
        }
        match self.receiver().recv_timeout(window) {
            Ok(chunk) => {
                self.pending.extend(chunk);
                Ok(self.take_pending())
            }
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                self.closed = true;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/browser/keys_tests.rs"]
mod tests;
