mod like;
mod unit;
mod user;

pub use like::*;
pub use unit::*;
pub use user::*;
