pub mod bug;
pub mod groups;
pub mod team;
