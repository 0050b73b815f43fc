use serde::{Deserialize, Serialize};

use crate::isa::hack::{self, Dest};

/// An emitted word, split back into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoded {
    A { addr: u16 },
    C { comp: u16, dest: Dest, jump: u16 },
}

/// Bit 15 clear is an A-instruction; the `111` prefix is a C-instruction.
/// Anything else is outside the instruction set.
pub fn decode(word: u16) -> Option<Decoded> {
    if word & (1 << 15) == 0 {
        return Some(Decoded::A {
            addr: word & hack::ADDR_MASK,
        });
    }
    if word & hack::PREFIX_MASK != hack::C_PREFIX {
        return None;
    }
    Some(Decoded::C {
        comp: (word >> hack::COMP_SHIFT) & hack::COMP_MASK,
        dest: Dest::from_bits_truncate(word),
        jump: word & hack::JUMP_MASK,
    })
}
