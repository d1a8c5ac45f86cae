pub mod registry;
pub mod repository;
pub mod validator;
