use std::fmt;
use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Debug)]
pub enum ReadError {
    /// The prompt could not be written.
    Prompt(io::Error),
    /// The line itself could not be read.
    Input(String),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReadError::Prompt(ref err) => write!(f, "{}", err),
            ReadError::Input(ref msg) => write!(f, "{}", msg),
        }
    }
}

/// Where the loop gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its terminator.
    /// `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write)
                 -> Result<Option<String>, ReadError>;

    fn add_history(&mut self, line: &str);
}

impl<'a, L: LineSource + ?Sized> LineSource for &'a mut L {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write)
                 -> Result<Option<String>, ReadError> {
        (**self).read_line(prompt, output)
    }

    fn add_history(&mut self, line: &str) {
        (**self).add_history(line)
    }
}

/// Lines from any `BufRead`, prompt written to the loop's output.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD.
pub struct StreamSource<R> {
    input: R,
    skip_lf: bool,
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(input: R) -> StreamSource<R> {
        StreamSource { input, skip_lf: false }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        let mut consumed = false;

        loop {
            let available = match self.input.fill_buf() {
                Ok(available) => available,
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if available.is_empty() {
                return Ok(if consumed { Some(decode(&buf)) } else { None });
            }

            // the '\n' of a "\r\n" split across two reads
            if self.skip_lf {
                self.skip_lf = false;

                if available[0] == b'\n' {
                    self.input.consume(1);
                    continue;
                }
            }

            consumed = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    let crlf = terminator == b'\r' && available.get(pos + 1) == Some(&b'\n');

                    buf.extend_from_slice(&available[..pos]);

                    if crlf {
                        self.input.consume(pos + 2);
                    } else {
                        self.input.consume(pos + 1);
                        self.skip_lf = terminator == b'\r';
                    }

                    return Ok(Some(decode(&buf)));
                }

                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.input.consume(len);
                }
            }
        }
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn read_line(&mut self, prompt: &str, output: &mut dyn Write)
                 -> Result<Option<String>, ReadError> {
        write!(output, "{}", prompt).map_err(ReadError::Prompt)?;
        output.flush().map_err(ReadError::Prompt)?;

        self.next_line().map_err(|err| ReadError::Input(err.to_string()))
    }

    // piped input has nobody to recall lines
    fn add_history(&mut self, _line: &str) {}
}

/// Lines from a terminal through rustyline, with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<EditorSource, ReadlineError> {
        Ok(EditorSource { editor: DefaultEditor::new()? })
    }

    pub fn history(&self) -> Vec<String> {
        self.editor.history().iter().cloned().collect()
    }
}

impl LineSource for EditorSource {
    // rustyline draws the prompt on the terminal itself
    fn read_line(&mut self, prompt: &str, _output: &mut dyn Write)
                 -> Result<Option<String>, ReadError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(ReadError::Input(err.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            debug!("add_history_entry failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufReader, Cursor};

    fn lines_of(input: &[u8]) -> Vec<String> {
        let mut source = StreamSource::new(Cursor::new(input.to_vec()));
        let mut lines = Vec::new();

        while let Some(line) = source.next_line().unwrap() {
            lines.push(line);
        }

        lines
    }

    #[test]
    fn all_terminators_end_a_line() {
        assert_eq!(lines_of(b"a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(lines_of(b"a\rb\n"), vec!["a", "b"]);
        assert_eq!(lines_of(b"\n\r\n\r"), vec!["", "", ""]);
        assert!(lines_of(b"").is_empty());
    }

    #[test]
    fn crlf_split_across_reads_is_one_terminator() {
        // capacity 2 forces "a\r" and "\nb" into separate buffers
        let input = BufReader::with_capacity(2, Cursor::new(b"a\r\nb\n".to_vec()));
        let mut source = StreamSource::new(input);

        assert_eq!(source.next_line().unwrap(), Some("a".to_owned()));
        assert_eq!(source.next_line().unwrap(), Some("b".to_owned()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(lines_of(b"ok\n\xff\nx\n"), vec!["ok", "\u{FFFD}", "x"]);
    }

    #[test]
    fn prompt_goes_to_output() {
        let mut source = StreamSource::new(Cursor::new(b"x\n".to_vec()));
        let mut output = Vec::new();

        let line = source.read_line("--> ", &mut output).unwrap();

        assert_eq!(line, Some("x".to_owned()));
        assert_eq!(output, b"--> ");
    }

    #[test]
    fn editor_history_keeps_added_lines() {
        let mut source = EditorSource::new().unwrap();

        source.add_history("(+ 1 2)");
        source.add_history("(def! x 3)");

        assert_eq!(source.history(), vec!["(+ 1 2)", "(def! x 3)"]);
    }
}
