pub mod couchpotato;
pub mod error;
pub mod traits;
pub mod transport;

pub use couchpotato::{CouchPotatoClient, Endpoint};
pub use error::SourceError;
pub use traits::{FetchContext, WantedSource};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
