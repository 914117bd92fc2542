// UI Components
// This module contains all reusable UI components

pub mod add_show_form;
pub mod icons;
pub mod mix_card;
pub mod social_links;

pub use add_show_form::AddShowForm;
pub use mix_card::MixCard;
pub use social_links::SocialLinks;
