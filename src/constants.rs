pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Amount of hex digits after the `#`
pub const COLOR_DIGITS_AMOUNT: usize = 6;
pub const COLOR_LENGTH: usize = COLOR_DIGITS_AMOUNT + 1;

pub const USER_COLOR_KEY: &str = "userColor";

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const STORE_FILE_NAME: &str = "user_color.json";
