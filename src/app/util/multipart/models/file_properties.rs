use bytes::Bytes;
use mime::Mime;

#[derive(Debug, Clone)]
pub struct FileProperties {
    pub field_name: String,
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl FileProperties {
    pub fn mime(&self) -> Option<Mime> {
        self.mime_type.parse::<Mime>().ok()
    }

    pub fn is_image(&self) -> bool {
        match self.mime() {
            Some(mime) => mime.type_() == mime::IMAGE,
            None => false,
        }
    }
}
