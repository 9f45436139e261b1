mod command_result;
pub mod compile;
pub mod extract;
pub mod helper;
pub mod init;
pub mod run;
pub mod translate;

pub use command_result::*;
