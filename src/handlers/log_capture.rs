// Collects formatted tracing output in memory so handler tests can assert on
// what would reach CloudWatch.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("poisoned mutex").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under an INFO-level fmt subscriber and returns its result along
/// with everything that was logged.
pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer: SharedBuffer = SharedBuffer::default();
    let writer: SharedBuffer = buffer.clone();

    let subscriber = fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    let result: R = tracing::subscriber::with_default(subscriber, f);

    let bytes: Vec<u8> = buffer.0.lock().expect("poisoned mutex").clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}
