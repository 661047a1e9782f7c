pub const PROFILE: u32 = 0xeb966d;
pub const OFFLINE: u32 = 0x747f8d;
pub const ERROR: u32 = 0xf54029;
