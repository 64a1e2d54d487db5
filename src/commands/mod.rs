pub mod getpub;
pub mod key_save;
pub mod keygen;
pub mod list_types;
