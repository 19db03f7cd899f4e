use std::io::{self, Write};

/// The greeting written by [`greet`].
pub const GREETING: &str = "Hello, World!";

// Must stay in sync with `GREETING`.
const LINE: &[u8] = b"Hello, World!\n";

/// Write the greeting followed by a newline to `sink`, then flush it.
///
/// Any error reported by the sink is returned unchanged.
pub fn greet<W: Write + ?Sized>(sink: &mut W) -> io::Result<()> {
    sink.write_all(LINE)?;
    sink.flush()?;

    tracing::debug!(bytes = LINE.len(), "Wrote greeting");
    Ok(())
}
