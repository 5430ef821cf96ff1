mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod scan;
pub mod synthesize;

pub use command_result::*;
