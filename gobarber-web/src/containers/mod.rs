pub mod auth_card;
pub mod form_validation;
pub mod header;
pub mod layout;
