pub mod init;
pub mod opts;
pub mod run;
pub mod validate;

#[cfg(feature = "chart")]
pub mod chart;
