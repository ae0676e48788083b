use crate::utils::error::Result;

/// Backend for the persisted tracking markers.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Configuration points the tracker reads at call time. The endpoint and
/// identifiers are supplied by the host application, never inferred.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn device_id(&self) -> Option<&str>;
    fn advertising_id(&self) -> Option<&str>;
    fn state_path(&self) -> &str;
}
