pub mod bot_filter;
pub mod kindness;
pub mod major_cities;
