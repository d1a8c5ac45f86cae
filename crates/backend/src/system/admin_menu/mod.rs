pub mod layout;
pub mod registrar;
pub mod router;
