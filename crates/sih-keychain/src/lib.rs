pub mod memory_keychain;
pub mod sqlite_keychain;

pub use memory_keychain::MemoryKeychain;
pub use sqlite_keychain::SqliteKeychain;
