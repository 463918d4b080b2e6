pub mod revocation;
pub mod session;
pub mod user;

pub use revocation::RevocationStore;
pub use session::SessionRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock-repositories"))]
pub use revocation::MockRevocationStore;
#[cfg(any(test, feature = "mock-repositories"))]
pub use session::MockSessionRepository;
#[cfg(any(test, feature = "mock-repositories"))]
pub use user::MockUserRepository;
