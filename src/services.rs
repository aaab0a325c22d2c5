mod constant;
mod func;
mod interface;
mod providers;
mod service;
mod singleton;
mod transient;

pub use constant::*;
pub use func::*;
pub use interface::*;
pub use providers::*;
pub use service::*;
pub use singleton::*;
pub use transient::*;
