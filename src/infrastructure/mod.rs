pub mod http_transport;
pub mod image_files;

pub use http_transport::HttpTransport;
