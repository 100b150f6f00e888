pub mod changelog;
pub mod loadout;
pub mod post;
pub mod user;
