pub mod mood;
pub mod recommendation;
