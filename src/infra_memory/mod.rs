mod image_repo_memory;
mod like_repo_memory;
mod match_repo_memory;
mod token_store_memory;
mod user_repo_memory;

pub use image_repo_memory::*;
pub use like_repo_memory::*;
pub use match_repo_memory::*;
pub use token_store_memory::*;
pub use user_repo_memory::*;

mod seed;

pub use seed::*;
