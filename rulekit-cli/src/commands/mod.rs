//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod init;
pub mod list;

pub use check::CheckCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use list::ListCommand;
