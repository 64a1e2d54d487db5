// src/util.rs
use crate::defaults::Defaults;

/// Format bytes as C initializer entries (`0x%02x,`), eight per line,
/// with `indent` tabs at the start of every line after the first.
pub fn format_c_data(data: &[u8], indent: usize) -> String {
    let ind_text = "\t".repeat(indent);
    let mut buf = String::with_capacity(data.len() * 6);

    for (i, b) in data.iter().enumerate() {
        if i % Defaults::C_BYTES_PER_LINE == 0 {
            if i > 0 {
                buf.push('\n');
                buf.push_str(&ind_text);
            }
        } else {
            buf.push(' ');
        }
        buf.push_str(&format!("0x{b:02x},"));
    }

    buf
}

/// The C source block for an encoded public key named `symbol`.
pub fn render_c_source(symbol: &str, der: &[u8]) -> String {
    format!(
        "/* Autogenerated, do not edit */\n\
         \n\
         const unsigned char {symbol}[] = {{\n\
         \t{data} }};\n\
         const unsigned int {symbol}_len = {len};\n",
        data = format_c_data(der, Defaults::C_INDENT),
        len = der.len(),
    )
}
