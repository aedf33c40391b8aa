pub mod abstract_trait;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod provider;
pub mod session;
