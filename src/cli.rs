use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::defaults::Defaults;
use crate::key::KeyType;
use crate::logging::LogOptions;

/// Bootloader image tool: signing key generation and public key export
#[derive(Parser, Debug)]
#[command(name = "imgtool", version, about = "Manipulate boot images")]
pub struct Cli {
    /// Keyfile to use
    #[arg(short, long, global = true, env = "IMGTOOL_KEY", default_value = Defaults::KEY_FILE)]
    pub key: PathBuf,

    #[command(flatten)]
    pub log: LogOptions,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a private key and write it to the keyfile
    Keygen(KeygenArgs),

    /// Extract the public key as C code
    Getpub,

    /// List the supported key types
    ListTypes,
}

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Type of key to generate (ecdsa-p256, ecdsa-p224, rsa-2048)
    #[arg(short = 't', long)]
    pub key_type: KeyType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn key_defaults_to_root_ec() {
        let cmd = Cli::command();
        let key = cmd.get_arguments().find(|a| a.get_id() == "key").unwrap();
        let default = key.get_default_values().first().and_then(|v| v.to_str());
        assert_eq!(default, Some("root_ec.pem"));

        // IMGTOOL_KEY from the calling shell overrides the default.
        if std::env::var_os("IMGTOOL_KEY").is_none() {
            let cli = Cli::try_parse_from(["imgtool", "getpub"]).unwrap();
            assert_eq!(cli.key, PathBuf::from(Defaults::KEY_FILE));
        }
    }

    #[test]
    fn keygen_parses_key_type() {
        let cli = Cli::try_parse_from(["imgtool", "-k", "k.pem", "keygen", "-t", "rsa-2048"]).unwrap();
        match cli.cmd {
            Command::Keygen(args) => assert_eq!(args.key_type, KeyType::Rsa2048),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_key_type_is_rejected() {
        let err = Cli::try_parse_from(["imgtool", "keygen", "--key-type", "ecdsa-p384"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("ecdsa-p384"));
    }

    #[test]
    fn keygen_requires_key_type() {
        let err = Cli::try_parse_from(["imgtool", "keygen"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
