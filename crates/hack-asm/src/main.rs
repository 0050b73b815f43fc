use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hack_rs::decoder::decode;
use hack_rs::disasm::fmt_decoded;
use hack_rs::{assemble_with_symbols, render};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble Hack .asm sources into .hack binary text"
)]
struct Opts {
    /// Input assembly file
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Output file (default: input with its extension replaced by .hack)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Export the final symbol table to JSON (Vec<{ name, addr }>)
    #[arg(long, value_name = "FILE")]
    symbols_out: Option<PathBuf>,
    /// Print an assembly listing (address, word, disassembly) to stdout
    #[arg(long)]
    listing: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
struct SymbolOut {
    name: String,
    addr: u16,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let source = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;

    let (rom, symbols) = assemble_with_symbols(&source)?;

    let out_path = opts
        .output
        .clone()
        .unwrap_or_else(|| opts.input.with_extension("hack"));
    fs::write(&out_path, render(&rom))
        .with_context(|| format!("writing {}", out_path.display()))?;

    if let Some(path) = &opts.symbols_out {
        let mut arr: Vec<SymbolOut> = symbols
            .iter()
            .map(|(name, addr)| SymbolOut {
                name: name.to_string(),
                addr,
            })
            .collect();
        arr.sort_by(|a, b| a.addr.cmp(&b.addr).then_with(|| a.name.cmp(&b.name)));
        fs::write(path, serde_json::to_string_pretty(&arr)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if opts.listing {
        for (pc, word) in rom.iter().enumerate() {
            match decode(*word) {
                Some(d) => println!("{pc:5}  {word:016b}  {}", fmt_decoded(&d)),
                None => println!("{pc:5}  {word:016b}"),
            }
        }
    }

    tracing::info!(words = rom.len(), output = %out_path.display(), "assembled");
    Ok(())
}
