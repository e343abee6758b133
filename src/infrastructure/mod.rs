pub mod config;
pub mod workbook;
