pub use super::games::Entity as Games;
