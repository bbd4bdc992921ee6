pub mod config;
pub mod error;
pub mod infra;
pub mod worker;

pub use config::Config;
pub use error::{Result, WorkerError};
pub use worker::{HeaderParameters, RequestWorker, ResponseExt, WorkerResponse};
