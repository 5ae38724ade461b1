/// Lifecycle module
///
/// The four operations a session passes through: first issuance at login,
/// per-request verification, refresh rotation, and revocation.

mod authenticator;
mod gate;
mod revocation;
mod rotation;

pub use authenticator::RequestAuthenticator;
pub use gate::AuthenticationGate;
pub use revocation::RevocationHandler;
pub use rotation::RotationService;
