pub mod downloader;
pub mod error;
pub mod http;
pub mod platform;
pub mod progress;
pub mod sdk;
pub mod util;
pub mod version;

pub use downloader::{ArchiveExtractor, FetchOutcome, FileDownloader};
pub use error::{Result, SetupError};
pub use http::{HttpClient, HttpClientConfig};
pub use platform::Platform;
pub use progress::ProgressManager;
pub use sdk::{RemoteArchive, SetupContext};
pub use util::normalize;
pub use version::SdkVersion;
