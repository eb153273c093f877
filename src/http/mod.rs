//! REST request subsystem.
//!
//! # Data Flow
//! ```text
//! Resource wrapper (Channel, Message)
//!     → request.rs (RequestDescriptor: method, path, JSON body)
//!     → executor.rs (URL + headers, retry loop)
//!     → transport.rs (one HTTP exchange, reqwest by default)
//!     → response.rs (classify status: no content / success / 429 / failure)
//!     → types.rs (ApiResult<T> back to the wrapper)
//! ```
//!
//! # Design Decisions
//! - The executor is the only component that touches the network
//! - API failures are values (`ApiResult`), faults are `HttpError`
//! - Headers are built once per client and shared by every call

pub mod auth;
pub mod executor;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

pub use auth::Token;
pub use executor::RequestExecutor;
pub use request::{Method, RequestDescriptor};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse};
pub use types::{ApiError, ApiResult, HttpError, HttpResult};
