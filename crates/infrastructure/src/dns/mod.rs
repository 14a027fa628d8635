pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use resolver::{NameserverResolver, SystemResolver};
