pub mod cli;
pub mod i18n;
pub mod meat;
pub mod storage;
pub mod mix;
pub mod presenter;
pub mod commands;
