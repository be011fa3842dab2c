pub mod describe;
pub mod init;
pub mod run;
