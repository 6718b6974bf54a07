//! Test-case reader for count-prefixed integer streams.
//!
//! A stream is a sequence of test cases, each an integer `n` followed by `n`
//! integers. Tokens are separated by any ASCII whitespace; line breaks carry
//! no meaning.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::trace;

use crate::error::InputError;

/// Upper bound on the capacity reserved up front from a declared count.
const MAX_PREALLOC: usize = 4096;

/// Whitespace-separated tokens pulled lazily, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
    line: String,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
            line: String::new(),
        }
    }

    /// Returns the next token and its 1-based position, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<(String, usize)>, InputError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_ascii_whitespace().map(str::to_owned));
        }

        self.position += 1;
        Ok(self.pending.pop_front().map(|t| (t, self.position)))
    }
}

/// Iterator over the test cases of a stream.
///
/// Yields `Err` at most once; after an error the stream can no longer be
/// framed and iteration stops.
pub struct Cases<R> {
    tokens: Tokens<R>,
    done: bool,
}

impl<R: BufRead> Cases<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokens::new(reader),
            done: false,
        }
    }

    fn read_case(&mut self) -> Result<Option<Vec<i32>>, InputError> {
        let Some((token, position)) = self.tokens.next_token()? else {
            return Ok(None);
        };

        let count: i64 = token
            .parse()
            .map_err(|_| InputError::Malformed { token, position })?;
        if count < 0 {
            return Err(InputError::NegativeCount { count, position });
        }
        let declared = count as usize;
        trace!(declared, position, "Reading test case");

        let mut values = Vec::with_capacity(declared.min(MAX_PREALLOC));
        while values.len() < declared {
            let Some((token, position)) = self.tokens.next_token()? else {
                return Err(InputError::Truncated {
                    declared,
                    received: values.len(),
                });
            };
            let value = token
                .parse::<i32>()
                .map_err(|_| InputError::Malformed { token, position })?;
            values.push(value);
        }

        Ok(Some(values))
    }
}

impl<R: BufRead> Iterator for Cases<R> {
    type Item = Result<Vec<i32>, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_case() {
            Ok(Some(values)) => Some(Ok(values)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Reads test cases from `reader` until end of input or the first framing error.
pub fn read_cases<R: BufRead>(reader: R) -> Cases<R> {
    Cases::new(reader)
}
