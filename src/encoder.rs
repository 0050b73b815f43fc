use crate::assembler::AsmError;
use crate::isa::hack::{self, Dest};
use crate::parser::{classify, sanitize_line, Line};
use crate::symbols::SymbolTable;

/// Second pass: emit one word per non-empty, non-label line, in source
/// order. Unseen address operands become variables, so the table must be
/// the one produced by the label scan.
pub fn encode_program(source: &str, symbols: &mut SymbolTable) -> Result<Vec<u16>, AsmError> {
    let mut rom = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = sanitize_line(raw);
        let word = match classify(&line) {
            Line::Empty | Line::Label(_) => continue,
            Line::Addr(operand) => encode_addr(operand, symbols),
            Line::Compute(text) => encode_compute(text, idx + 1)?,
        };
        rom.push(word);
    }
    Ok(rom)
}

fn parse_literal(operand: &str) -> Option<u16> {
    if operand.is_empty() || !operand.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    operand.parse::<u32>().ok().map(|v| v as u16 & hack::ADDR_MASK)
}

/// `@operand`: literal, bound symbol, or freshly allocated variable.
/// The resolved value lands in the low 15 bits; bit 15 stays clear.
pub fn encode_addr(operand: &str, symbols: &mut SymbolTable) -> u16 {
    match parse_literal(operand) {
        Some(value) => value,
        None => symbols.resolve_or_alloc(operand) & hack::ADDR_MASK,
    }
}

/// `[dest=]comp[;jump]`: pack the three fields at their fixed offsets
/// under the `111` prefix. An absent field contributes no bits; a present
/// but unrecognized field aborts the run.
pub fn encode_compute(text: &str, line: usize) -> Result<u16, AsmError> {
    let mut word = hack::C_PREFIX;

    let (dest, rest) = match text.split_once('=') {
        Some((dest, rest)) => (dest, rest),
        None => ("", text),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp, jump),
        None => (rest, ""),
    };

    for c in dest.chars() {
        match Dest::from_char(c) {
            Some(flag) => word |= flag.bits(),
            None => {
                return Err(AsmError::UnknownDest {
                    line,
                    dest: dest.to_string(),
                })
            }
        }
    }

    if !jump.is_empty() {
        match hack::jump_code(jump) {
            Some(code) => word |= code,
            None => {
                return Err(AsmError::InvalidJump {
                    line,
                    jump: jump.to_string(),
                })
            }
        }
    }

    if !comp.is_empty() {
        match hack::comp_code(comp) {
            Some(code) => word |= code << hack::COMP_SHIFT,
            None => {
                return Err(AsmError::InvalidComp {
                    line,
                    comp: comp.to_string(),
                })
            }
        }
    }

    Ok(word)
}
