use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Hack 16-bit instruction layout.
///
/// A-instruction: bit 15 clear, bits 14..0 hold the address.
/// C-instruction: bits 15..13 fixed to `111`, comp in bits 12..6,
/// dest flags in bits 5..3, jump code in bits 2..0.
pub const C_PREFIX: u16 = 0b111 << 13;
pub const PREFIX_MASK: u16 = 0b111 << 13;
pub const ADDR_MASK: u16 = 0x7FFF;
pub const COMP_SHIFT: u32 = 6;
pub const COMP_MASK: u16 = 0x7F;
pub const JUMP_MASK: u16 = 0b111;

// Memory-mapped I/O
pub const SCREEN: u16 = 16384;
pub const KBD: u16 = 24576;

// First data address handed out to user variables
pub const VAR_BASE: u16 = 16;

/// Hardware-reserved symbols; `R0..R15` are seeded separately.
pub const PREDEFINED: &[(&str, u16)] = &[
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

bitflags! {
    /// Destination flags, positioned at their final bit offsets in the word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Dest: u16 {
        const A = 1 << 5;
        const D = 1 << 4;
        const M = 1 << 3;
    }
}

impl Dest {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Dest::A),
            'D' => Some(Dest::D),
            'M' => Some(Dest::M),
            _ => None,
        }
    }

    /// Canonical mnemonic spelling (A before M before D).
    pub fn mnemonic(&self) -> String {
        let mut s = String::new();
        if self.contains(Dest::A) {
            s.push('A');
        }
        if self.contains(Dest::M) {
            s.push('M');
        }
        if self.contains(Dest::D) {
            s.push('D');
        }
        s
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompDesc {
    pub expr: &'static str,
    pub code: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct JumpDesc {
    pub mnemonic: &'static str,
    pub code: u16,
}

pub const COMP_TABLE: &[CompDesc] = &[
    CompDesc { expr: "0", code: 0b0101010 },
    CompDesc { expr: "1", code: 0b0111111 },
    CompDesc { expr: "-1", code: 0b0111010 },
    CompDesc { expr: "D", code: 0b0001100 },
    CompDesc { expr: "A", code: 0b0110000 },
    CompDesc { expr: "M", code: 0b1110000 },
    CompDesc { expr: "!D", code: 0b0001101 },
    CompDesc { expr: "!A", code: 0b0110001 },
    CompDesc { expr: "!M", code: 0b1110001 },
    CompDesc { expr: "-D", code: 0b0001111 },
    CompDesc { expr: "-A", code: 0b0110011 },
    CompDesc { expr: "-M", code: 0b1110011 },
    CompDesc { expr: "D+1", code: 0b0011111 },
    CompDesc { expr: "A+1", code: 0b0110111 },
    CompDesc { expr: "M+1", code: 0b1110111 },
    CompDesc { expr: "D-1", code: 0b0001110 },
    CompDesc { expr: "A-1", code: 0b0110010 },
    CompDesc { expr: "M-1", code: 0b1110010 },
    CompDesc { expr: "D+A", code: 0b0000010 },
    CompDesc { expr: "D+M", code: 0b1000010 },
    CompDesc { expr: "D-A", code: 0b0010011 },
    CompDesc { expr: "D-M", code: 0b1010011 },
    CompDesc { expr: "A-D", code: 0b0000111 },
    CompDesc { expr: "M-D", code: 0b1000111 },
    CompDesc { expr: "D&A", code: 0b0000000 },
    CompDesc { expr: "D&M", code: 0b1000000 },
    CompDesc { expr: "D|A", code: 0b0010101 },
    CompDesc { expr: "D|M", code: 0b1010101 },
];

pub const JUMP_TABLE: &[JumpDesc] = &[
    JumpDesc { mnemonic: "JGT", code: 0b001 },
    JumpDesc { mnemonic: "JEQ", code: 0b010 },
    JumpDesc { mnemonic: "JGE", code: 0b011 },
    JumpDesc { mnemonic: "JLT", code: 0b100 },
    JumpDesc { mnemonic: "JNE", code: 0b101 },
    JumpDesc { mnemonic: "JLE", code: 0b110 },
    JumpDesc { mnemonic: "JMP", code: 0b111 },
];

pub fn comp_code(expr: &str) -> Option<u16> {
    COMP_TABLE.iter().find(|d| d.expr == expr).map(|d| d.code)
}

pub fn comp_expr(code: u16) -> Option<&'static str> {
    COMP_TABLE.iter().find(|d| d.code == code).map(|d| d.expr)
}

pub fn jump_code(mnemonic: &str) -> Option<u16> {
    JUMP_TABLE
        .iter()
        .find(|d| d.mnemonic == mnemonic)
        .map(|d| d.code)
}

pub fn jump_mnemonic(code: u16) -> Option<&'static str> {
    JUMP_TABLE.iter().find(|d| d.code == code).map(|d| d.mnemonic)
}
