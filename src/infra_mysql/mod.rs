mod image_repo_mysql;
mod like_repo_mysql;
mod match_repo_mysql;
mod token_store_mysql;
mod user_repo_mysql;

pub use image_repo_mysql::*;
pub use like_repo_mysql::*;
pub use match_repo_mysql::*;
pub use token_store_mysql::*;
pub use user_repo_mysql::*;

mod util;
