/// Target dimensions used when none are given on the command line.
/// Game textures are normalized to 512x512 regardless of source size.
pub const DEFAULT_TARGET_WIDTH: u32 = 512;
pub const DEFAULT_TARGET_HEIGHT: u32 = 512;

/// Upper bound for a single target dimension. Anything larger is almost
/// certainly a typo and would allocate gigabytes per texture.
pub const MAX_TARGET_DIMENSION: u32 = 16_384;

/// Extensions considered eligible when none are given on the command line.
/// Matching is exact-case: `TEXTURE.PNG` is skipped.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg"];
