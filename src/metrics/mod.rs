pub mod reducer;
pub mod stats;
