pub mod create;
pub mod delete;
pub mod launch;
pub mod list;
pub mod rename;
