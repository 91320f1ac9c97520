pub mod get_download_url_dto;
