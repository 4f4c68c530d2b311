pub mod store;

pub use store::MoodStore;
