pub mod args;
pub mod init;
