pub mod prelude;

pub mod blog_posts;
pub mod changelog;
pub mod loadout_items;
pub mod users;
