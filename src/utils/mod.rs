pub mod file_writer;
pub mod naming;
pub mod output;
pub mod process;
