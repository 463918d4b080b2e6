pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "mock-repositories"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use r#trait::{RevocationStore, BLACKLIST_MARKER};
#[cfg(any(test, feature = "mock-repositories"))]
pub use mock::MockRevocationStore;
