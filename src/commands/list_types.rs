use anyhow::Result;
use std::io::{self, Write};

use crate::key::KEY_TYPES;

/// One line per supported key type: name, envelope label, description.
pub fn render() -> String {
    let mut out = String::new();
    for spec in KEY_TYPES.iter() {
        out.push_str(&format!(
            "{:<12} {:<16} {}\n",
            spec.name, spec.envelope_label, spec.description
        ));
    }
    out
}

pub fn run() -> Result<()> {
    io::stdout().lock().write_all(render().as_bytes())?;
    Ok(())
}
