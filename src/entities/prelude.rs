pub use super::blog_posts::Entity as BlogPosts;
pub use super::changelog::Entity as Changelog;
pub use super::loadout_items::Entity as LoadoutItems;
pub use super::users::Entity as Users;
