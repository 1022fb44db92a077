/// Generate command functionality
pub mod generate;
/// Init command functionality
pub mod init;
