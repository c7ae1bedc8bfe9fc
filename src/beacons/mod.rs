pub mod results;
pub mod source;
