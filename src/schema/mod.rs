pub mod feed;
pub mod incident;
pub mod match_data;
pub mod message;
pub mod score;
pub mod team;
pub mod time;
pub mod venue;
