pub mod download_url_response;
pub mod upload_response;
