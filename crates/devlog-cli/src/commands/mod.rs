pub mod entries;
pub mod maintenance;
pub mod misc;
pub mod summary;
