mod client;
mod errors;
mod navigate;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::navigate::{Navigator, TracingNavigator};
