pub mod cascade;
pub mod record;


pub use record::{decode_record, encode_record};

use wortschatz_core::Word;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Unknown word type tag '{0}'")]
    UnknownWordType(String),
}

/// Serialize records into rows and collapse recurring paradigm runs.
pub fn compress(words: &[Word]) -> String {
    let rows: Vec<String> = words.iter().map(encode_record).collect();
    let blob = cascade::apply(&rows.join("\n"));
    tracing::debug!("compressed {} records into {} bytes", words.len(), blob.len());
    blob
}

/// Expand a compressed dataset back into records.
pub fn decompress(data: &str) -> Result<Vec<Word>, CodecError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let expanded = cascade::revert(data);
    let words = expanded
        .split('\n')
        .map(decode_record)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("decompressed {} records", words.len());
    Ok(words)
}
