//! The decryption and permutation transform library.
//!
//! Every transform is a pure function over byte buffers: same-length output,
//! no I/O. Per-title key material (XOR streams, bitswap orders, block
//! tables) is declared as constants next to the transform that consumes it
//! and is never derived at runtime.

pub mod boot;
pub mod cmc;
pub mod k2k2;
pub mod pcm2;
pub mod pvc;
pub mod sma;

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
