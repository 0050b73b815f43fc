use tracing::info;

use crate::encoder::encode_program;
use crate::symbols::{scan_labels, SymbolTable};

/// A syntactically invalid instruction field. Any of these aborts the
/// whole run; no partial output is valid. `line` is the 1-based position
/// in the raw source.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("unknown destination '{dest}' on line {line}")]
    UnknownDest { line: usize, dest: String },
    #[error("invalid jump statement '{jump}' on line {line}")]
    InvalidJump { line: usize, jump: String },
    #[error("invalid comp statement '{comp}' on line {line}")]
    InvalidComp { line: usize, comp: String },
}

/// Assemble a whole source text into its word sequence.
///
/// Pass 1 builds the label table over the full input so forward references
/// resolve; pass 2 encodes against it, allocating variables as they appear.
pub fn assemble(source: &str) -> Result<Vec<u16>, AsmError> {
    assemble_with_symbols(source).map(|(rom, _)| rom)
}

/// Like [`assemble`], also handing back the final symbol table.
pub fn assemble_with_symbols(source: &str) -> Result<(Vec<u16>, SymbolTable), AsmError> {
    let mut symbols = scan_labels(source);
    let rom = encode_program(source, &mut symbols)?;
    info!(words = rom.len(), symbols = symbols.len(), "assembly complete");
    Ok((rom, symbols))
}

/// Newline-delimited text form: one 16-character binary line per word,
/// most-significant bit first.
pub fn render(words: &[u16]) -> String {
    let mut out = String::with_capacity(words.len() * 17);
    for word in words {
        out.push_str(&format!("{word:016b}\n"));
    }
    out
}
