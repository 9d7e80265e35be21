//! Line-oriented emission of formatted text.

use crate::output::sink::Sink;

/// Split on `\n` only. A trailing newline does not produce an empty last
/// line and empty input produces no lines; `\r` is kept as content.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
}

/// Write every line of `text` to `sink` as its own record.
///
/// Returns the number of records written.
pub fn emit(sink: &dyn Sink, text: &str) -> usize {
    let mut written = 0;
    for line in split_lines(text) {
        sink.write_line(line);
        written += 1;
    }
    written
}
