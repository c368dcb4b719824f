pub mod analysis;
pub mod corpus;
pub mod errors;
pub mod information;
pub mod input;
pub mod output;
pub mod query;
pub mod sentence;
pub mod text;
pub mod token;

pub use corpus::Corpus;
pub use output::Match;
pub use query::{Query, SearchOptions};
pub use sentence::Sentence;
pub use text::Text;
