//! The interactive console on stdin and stdout.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use dw_story::Console;

pub struct StdConsole {
    stdin: StdinLock<'static>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn open() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        // Prompts are written without a newline.
        let _ = self.stdout.flush();
        // Bytes that are not UTF-8 still make a line; they fail selection
        // parsing downstream instead of closing the input.
        let mut buf = Vec::new();
        match self.stdin.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                None
            }
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.stdout.write_all(text.as_bytes()) {
            tracing::debug!(error = %e, "failed to write output");
        }
    }

    fn pause(&mut self, duration: Duration) {
        let _ = self.stdout.flush();
        thread::sleep(duration);
    }
}
