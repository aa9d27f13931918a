mod rules;

pub use rules::{baseline, recommend};
