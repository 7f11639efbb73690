pub mod entry;
pub mod ids;
pub mod quality_profile;
pub mod remote_movie;

pub use entry::{EntryValidator, NormalizedEntry, StandardEntryValidator};
pub use quality_profile::RemoteQualityProfile;
pub use remote_movie::{RemoteMovie, RemoteMovieInfo, ACTIVE_STATUS};
