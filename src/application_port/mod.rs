mod like_service;
mod session_service;

pub use like_service::*;
pub use session_service::*;
