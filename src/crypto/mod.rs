//! Cryptographic functions for the finance ledger
//!
//! PINs are stored as salted Argon2id hashes in PHC string form and held in
//! zeroing buffers while in memory.

pub mod pin_hash;
pub mod secure_memory;

pub use pin_hash::{hash_pin, is_pin_hash, verify_pin_hash};
pub use secure_memory::SecureString;
