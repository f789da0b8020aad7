mod clock;
mod store_error;

pub use clock::*;
pub use store_error::*;

// store

mod token_store;

pub use token_store::*;

// repo

mod image_repo;
mod like_repo;
mod match_repo;
mod user_repo;

pub use image_repo::*;
pub use like_repo::*;
pub use match_repo::*;
pub use user_repo::*;
