use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct FormData {
    pub files: Vec<FileProperties>,
    pub fields: HashMap<String, String>,
}

impl FormData {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)?;

        Some(self.files.swap_remove(index))
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}
