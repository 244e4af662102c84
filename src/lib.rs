pub mod ext;
pub mod latin;
pub mod lines;
pub mod locale;
pub mod parse;
pub mod random;
pub mod validate;

pub mod cli;

mod log_utils;
