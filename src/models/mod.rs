mod account;
pub use account::*;

mod kind_word;
pub use kind_word::*;
