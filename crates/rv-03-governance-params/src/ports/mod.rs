//! # Driven Ports (SPI - Outbound)
//!
//! The resolver reads contract storage through [`ContractStorage`]. The VM
//! state layer implements it; tests use
//! [`InMemoryStorage`](crate::adapters::InMemoryStorage).

use primitive_types::H160;

use crate::domain::StorageMap;

// =============================================================================
// CONTRACT STORAGE (VM State Dependency)
// =============================================================================

/// Read-only view of contract storage at one state root.
///
/// ## Implementation Notes
///
/// - Returns every populated slot of `address`.
/// - An unknown contract yields an empty map, not an error.
/// - Implementations must be safe to call from many threads at once.
pub trait ContractStorage: Send + Sync {
    fn read_storage(&self, address: &H160) -> StorageMap;
}

impl<T: ContractStorage + ?Sized> ContractStorage for &T {
    fn read_storage(&self, address: &H160) -> StorageMap {
        (**self).read_storage(address)
    }
}
