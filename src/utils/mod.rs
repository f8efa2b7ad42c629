pub mod text;

pub use text::{fold, tokenize};
