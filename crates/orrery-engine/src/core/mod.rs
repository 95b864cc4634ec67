pub mod field;
pub mod smoothing;
pub mod time;
