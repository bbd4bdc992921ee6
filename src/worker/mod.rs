pub mod body;
pub mod executor;
pub mod headers;
pub mod response;
pub mod types;

pub use body::{encode_json, encode_json_compressed, EncodedBody, JSON_CONTENT_TYPE};
pub use executor::RequestWorker;
pub use headers::inject_headers;
pub use response::ResponseExt;
pub use types::*;
