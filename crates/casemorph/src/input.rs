use crate::prelude::*;
use std::io::IsTerminal;
use tokio::io::AsyncReadExt;

/// Use `text` when given, otherwise read everything piped through stdin.
pub async fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if std::io::stdin().is_terminal() {
        return Err(Error::MissingInput.into());
    }

    let mut buf = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut buf)
        .await
        .context("Failed to read stdin")?;

    let text = String::from_utf8(buf).map_err(|_| Error::InvalidInput)?;
    Ok(trim_line_ending(&text).to_string())
}

/// Drop the single line ending most shells append to piped text.
pub fn trim_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
