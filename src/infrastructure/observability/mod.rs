mod init_tracing;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{MakeRequestUuid, REQUEST_ID_HEADER, request_id_header, request_span};
pub use tracing_config::TracingConfig;
