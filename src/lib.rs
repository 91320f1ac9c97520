#[macro_use]
extern crate lazy_static;

use std::sync::Arc;

use crate::{
    app::env::Envy,
    storage::{object_store::ObjectStore, s3::s3_object_store::S3ObjectStore},
};

pub mod app;
pub mod client;
pub mod generation;
pub mod normalizer;
pub mod poller;
pub mod runpod;
pub mod storage;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http: reqwest::Client,
    /// `None` when the bucket settings are incomplete.
    pub storage: Option<Arc<dyn ObjectStore>>,
}

impl AppState {
    pub fn from_envy(envy: Envy) -> Self {
        let storage = match S3ObjectStore::from_envy(&envy) {
            Some(store) => Some(Arc::new(store) as Arc<dyn ObjectStore>),
            None => None,
        };

        Self {
            envy: Arc::new(envy),
            http: reqwest::Client::new(),
            storage,
        }
    }
}
