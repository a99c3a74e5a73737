pub mod hostname;

pub use hostname::{HostnameError, HostnameSource, StaticHostname, SystemHostname};
