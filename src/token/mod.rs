// Internal modules
mod encoder;
mod header;
mod parsed;

// Public API exports
pub use encoder::encode_token;
pub use header::{TokenHeader, TOKEN_TYPE_JWT};
pub use parsed::ParsedToken;
