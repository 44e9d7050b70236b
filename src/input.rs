use std::io::BufRead;

use log::debug;

use crate::types::Result;

/// Reads one token per line, trimming each line and dropping blank ones.
///
/// ```rust
/// let tokens = jo::read_tokens("name=John\n\n  age=30  \n".as_bytes()).unwrap();
/// assert_eq!(tokens, ["name=John", "age=30"]);
/// ```
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            tokens.push(line.to_string());
        }
    }
    debug!("read {} tokens", tokens.len());
    Ok(tokens)
}

/// Splits tokens into those holding an `=` and those that do not, keeping order.
///
/// Returns `(valid, skipped)`.
pub fn split_valid<I, S>(tokens: I) -> (Vec<S>, Vec<S>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .partition(|token| token.as_ref().contains('='))
}
