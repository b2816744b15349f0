use anyhow::Result;

/// None on EOF so the repl can exit cleanly when input is piped in.
pub fn readline() -> Result<Option<String>> {
    let mut buffer = String::new();
    let bytes_read = std::io::stdin().read_line(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
