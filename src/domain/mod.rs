pub mod profile;
pub mod savings_range;
pub mod trial;
