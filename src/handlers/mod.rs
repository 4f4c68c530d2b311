pub mod health;
pub mod insights;
pub mod moods;
pub mod recommendations;
pub mod trends;
pub mod ws;

#[cfg(test)]
pub mod testing;
