mod eligibility_checker;
mod like_reader;
mod like_service_impl;
mod like_writer;
mod relationship_oracle;
mod session_resolver_impl;

pub use eligibility_checker::*;
pub use like_reader::*;
pub use like_service_impl::*;
pub use like_writer::*;
pub use relationship_oracle::*;
pub use session_resolver_impl::*;

#[cfg(test)]
mod test_support;
