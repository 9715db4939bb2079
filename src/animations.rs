//! Built-in animation program
//!
//! Effect bytes used below:
//! - `00` off, `0f` plain full brightness
//! - `1f` full brightness, fading out once
//! - `5f` full brightness, breathing (falling first)
//! - `70` dark, breathing (rising first)

/// Program blob, one sequence per button press
pub const PROGRAM: &[u8] = concat!(
    // 0: whole matrix breathing, stopped once set up
    "e00a", "e70a", "wffff", "x",
    // 1: expanding squares that fade out behind themselves
    "e00a",
    "e1f", "s77", "s78", "s87", "s88", "w0008",
    "e1f", "s66", "s69", "s96", "s99", "w0008",
    "e1f", "s55", "s5a", "sa5", "saa", "w0008",
    "e1f", "s44", "s4b", "sb4", "sbb", "w0008",
    "e1f", "s33", "s3c", "sc3", "scc", "w0008",
    "e1f", "s22", "s2d", "sd2", "sdd", "w0008",
    "e1f", "s11", "s1e", "se1", "see", "w0008",
    "e1f", "s00", "s0f", "sf0", "sff", "w0020",
    "x",
    // 2: diagonal sliding right and back left
    "e00a",
    "e0f", "s00", "s11", "s22", "s33", "s44", "s55", "s66", "s77",
    "s88", "s99", "saa", "sbb", "scc", "sdd", "see", "sff", "w0010",
    "p41", "w0008", "p41", "w0008", "p41", "w0008", "p41", "w0010",
    "p14", "w0010",
    "x",
    // 3: rain drops trickling down, each drop breathing on its own
    "e5f", "s03", "p81", "w0003",
    "e5f", "s0b", "p81", "w0003",
    "e5f", "s06", "p81", "w0003",
    "e5f", "s0e", "p81", "w0003",
    "e5f", "s01", "p81", "w0003",
    "e5f", "s09", "p81", "w0003",
    "\0",
)
.as_bytes();
