pub mod report;
pub mod sanitize;
pub mod validators;
