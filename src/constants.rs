pub mod uploads {
    /// Image formats accepted by the upload endpoint.
    pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

    /// Hard ceiling on a single uploaded file (10 MiB).
    pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

pub mod limits {
    pub const MIN_USERNAME_LEN: usize = 3;

    pub const MIN_PASSWORD_LEN: usize = 6;
}
