pub mod configuration;
pub mod delivery;
pub mod directory;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod password;
pub mod store;
pub mod telemetry;
pub mod token;

pub use delivery::TokenPair;
pub use directory::CredentialDirectory;
pub use directory::InMemoryDirectory;
pub use error::AuthError;
pub use error::StoreError;
pub use error::TokenError;
pub use identity::IdentityContext;
pub use identity::PrincipalRecord;
pub use lifecycle::AuthenticationGate;
pub use lifecycle::RequestAuthenticator;
pub use lifecycle::RevocationHandler;
pub use lifecycle::RotationService;
pub use store::InMemoryRefreshStore;
pub use store::PgRefreshStore;
pub use store::RefreshRecord;
pub use store::RefreshStore;
pub use token::Claims;
pub use token::Credential;
pub use token::TokenCategory;
pub use token::TokenCodec;
