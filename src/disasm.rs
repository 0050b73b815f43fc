use crate::decoder::Decoded;
use crate::isa::hack;

/// Render a decoded word back to symbolic text: `@addr` or
/// `dest=comp;jump` with absent fields omitted. A comp code outside the
/// table is shown as raw bits.
pub fn fmt_decoded(d: &Decoded) -> String {
    match d {
        Decoded::A { addr } => format!("@{addr}"),
        Decoded::C { comp, dest, jump } => {
            let mut out = String::new();
            if !dest.is_empty() {
                out.push_str(&dest.mnemonic());
                out.push('=');
            }
            match hack::comp_expr(*comp) {
                Some(expr) => out.push_str(expr),
                None => out.push_str(&format!("{comp:#09b}")),
            }
            if *jump != 0 {
                if let Some(mnemonic) = hack::jump_mnemonic(*jump) {
                    out.push(';');
                    out.push_str(mnemonic);
                }
            }
            out
        }
    }
}
