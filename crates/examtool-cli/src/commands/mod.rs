pub mod list;
pub mod take;
