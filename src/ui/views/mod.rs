pub mod about;
pub mod card;
pub mod sidebar;
pub mod toast;
