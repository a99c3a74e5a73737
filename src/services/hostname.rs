//! Hostname lookup used by the status endpoint.
use gethostname::gethostname;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostnameError {
    #[error("hostname is not valid UTF-8: {0}")]
    NotUtf8(String),
    #[error("hostname is empty")]
    Empty,
}

/// Source of the host name reported to clients.
///
/// Implementations are queried once per request, so they must be cheap
/// and safe to call from any worker thread.
pub trait HostnameSource: Send + Sync + 'static {
    fn hostname(&self) -> Result<String, HostnameError>;
}

/// Asks the operating system on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        let raw = gethostname()
            .into_string()
            .map_err(|os| HostnameError::NotUtf8(os.to_string_lossy().into_owned()))?;

        validate(raw)
    }
}

/// Fixed name source, injected through `AppState::new` in place of the OS lookup.
#[derive(Debug, Clone)]
pub struct StaticHostname(String);

impl StaticHostname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostnameSource for StaticHostname {
    fn hostname(&self) -> Result<String, HostnameError> {
        validate(self.0.clone())
    }
}

fn validate(name: String) -> Result<String, HostnameError> {
    if name.trim().is_empty() {
        return Err(HostnameError::Empty);
    }
    Ok(name)
}
