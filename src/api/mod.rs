pub mod envelope;

pub use envelope::{paginate, ApiResponse, ApiResult, Envelope, PageMeta};
