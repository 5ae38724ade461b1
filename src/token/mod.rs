/// Credential module
///
/// Defines the claims carried by issued credentials and the codec that
/// signs and verifies them.

mod claims;
mod codec;

pub use claims::Claims;
pub use claims::TokenCategory;
pub use codec::Credential;
pub use codec::TokenCodec;
