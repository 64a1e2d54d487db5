use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::defaults::Defaults;

/// Write a private key envelope to `path`.
///
/// The file must not exist yet and is created owner read/write only. If
/// writing fails after creation the partial file is removed again.
pub fn write_private_key(path: &Path, envelope: &str) -> Result<()> {
    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(Defaults::KEY_FILE_MODE);
    }

    let f = opts
        .open(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let written = {
        let mut w = BufWriter::new(f);
        w.write_all(envelope.as_bytes())
            .and_then(|_| w.flush())
            .and_then(|_| w.get_ref().sync_all())
    };

    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(e).with_context(|| format!("writing {}", path.display()));
    }
    Ok(())
}
