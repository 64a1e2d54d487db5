//! Central place for all default values.
//! Update these and the whole tool picks them up.

pub struct Defaults;

impl Defaults {
    /* Key file */
    pub const KEY_FILE: &'static str = "root_ec.pem";
    pub const KEY_FILE_MODE: u32 = 0o600;

    /* Generation */
    pub const RSA_MODULUS_BITS: usize = 2048;
    pub const RSA_PUBLIC_EXPONENT: u32 = 65537;
    pub const SCALAR_DRAW_ATTEMPTS: usize = 64;

    /* C output */
    pub const C_INDENT: usize = 1;
    pub const C_BYTES_PER_LINE: usize = 8;
}
