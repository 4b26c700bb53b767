pub mod loading_spinner;
pub mod pet_card;
pub mod search_error;
pub mod search_form;
pub mod search_results;
