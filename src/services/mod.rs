pub mod uploads;

pub use uploads::{StoredUpload, UploadError, UploadKind, UploadService};
