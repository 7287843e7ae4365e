pub mod error;
pub mod request_id;
pub mod request_store;

pub use error::{Result, StoreError};
pub use request_id::RequestIdSequence;
pub use request_store::RequestStore;
