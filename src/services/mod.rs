pub mod checkin;
pub mod recommendations;
pub mod sentiment;
pub mod trends;
