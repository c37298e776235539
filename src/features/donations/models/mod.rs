mod donation;

pub use donation::*;
