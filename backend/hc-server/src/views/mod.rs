pub mod admin;
pub mod catalog_query;
pub mod form_options;
pub mod public;
pub mod sponsor;
pub mod view_response;
