pub mod entry;
pub mod options;
pub mod preferences;
