pub mod api;
pub mod client;
pub mod quality;

pub use api::Endpoint;
pub use client::CouchPotatoClient;
pub use quality::translate;
