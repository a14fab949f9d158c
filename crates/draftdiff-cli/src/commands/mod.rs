//! Command implementations.

pub mod run;
pub mod score;
pub mod stage;

pub use self::run::execute_run;
pub use self::score::execute_score;
pub use self::stage::{
    execute_extract, execute_normalize, execute_tokenize, execute_vectorize,
};
