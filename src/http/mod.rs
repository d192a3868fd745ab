//! HTTP protocol layer module
//!
//! MIME-type inference and response building, decoupled from the
//! request-handling business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_redirect_response,
    CACHE_CONTROL_VALUE,
};
