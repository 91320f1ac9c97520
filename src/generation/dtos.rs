pub mod background_form_dto;
pub mod character_form_dto;
pub mod combo_form_dto;
pub mod generation_request_dto;
