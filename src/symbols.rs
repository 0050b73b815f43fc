use std::collections::HashMap;

use tracing::{debug, warn};

use crate::isa::hack::{PREDEFINED, VAR_BASE};
use crate::parser::{classify, sanitize_line, Line};

/// Name → address map for one assembly run.
///
/// Pass 1 (`scan_labels`) produces it; pass 2 extends it with variables.
/// Once bound, an address never changes, except that a duplicate label
/// declaration overwrites the earlier one (last write wins).
#[derive(Debug, Clone)]
pub struct SymbolTable {
    map: HashMap<String, u16>,
    next_var: u16,
}

impl SymbolTable {
    /// Table seeded with the hardware symbols and `R0..R15`.
    pub fn with_predefined() -> Self {
        let mut map = HashMap::new();
        for &(name, addr) in PREDEFINED {
            map.insert(name.to_string(), addr);
        }
        for i in 0..16u16 {
            map.insert(format!("R{i}"), i);
        }
        Self {
            map,
            next_var: VAR_BASE,
        }
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    /// Bind a label to an instruction-memory address.
    pub fn bind(&mut self, name: &str, addr: u16) {
        if let Some(prev) = self.map.insert(name.to_string(), addr) {
            warn!(name, prev, addr, "label rebound, keeping the later address");
        } else {
            debug!(name, addr, "bound label");
        }
    }

    /// Look a symbol up, allocating a fresh data address (16, 17, ..) for a
    /// name that is neither predefined, a label, nor an earlier variable.
    pub fn resolve_or_alloc(&mut self, name: &str) -> u16 {
        if let Some(addr) = self.map.get(name) {
            return *addr;
        }
        let addr = self.next_var;
        self.map.insert(name.to_string(), addr);
        self.next_var += 1;
        debug!(name, addr, "allocated variable");
        addr
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.map.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// First pass: walk the whole source and bind every label declaration to
/// the address of the instruction that follows it. Label lines and empty
/// lines occupy no slot; every other line advances the counter by one.
pub fn scan_labels(source: &str) -> SymbolTable {
    let mut symbols = SymbolTable::with_predefined();
    let mut rom_addr: u16 = 0;
    for raw in source.lines() {
        let line = sanitize_line(raw);
        match classify(&line) {
            Line::Label(name) => symbols.bind(name, rom_addr),
            Line::Empty => {}
            Line::Addr(_) | Line::Compute(_) => rom_addr += 1,
        }
    }
    symbols
}
