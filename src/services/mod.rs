// Service exports
pub mod phrases;
pub mod upstream;

pub use phrases::{PhraseStore, PhraseStoreError};
pub use upstream::{ProxyError, RelayedBody, UpstreamClient, UpstreamError};
