pub mod converters;
pub mod export;
