mod config;
mod dispatcher;
mod error;
#[cfg(any(test, feature = "testing"))]
mod recording;
mod template;
mod transport;

pub use config::*;
pub use dispatcher::*;
pub use error::*;
#[cfg(any(test, feature = "testing"))]
pub use recording::*;
pub use template::*;
pub use transport::*;
