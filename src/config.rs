use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

use crate::models::{DEFAULT_POSTER_BASE, DEFAULT_POSTER_PLACEHOLDER, PosterUrls};

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub static_dir: PathBuf,
    pub poster_base_url: String,
    pub poster_placeholder_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "TMDB_all_movies.csv".to_string())
            .into();

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()).into();

        let poster_base_url = std::env::var("POSTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_POSTER_BASE.to_string());

        let poster_placeholder_url = std::env::var("POSTER_PLACEHOLDER_URL")
            .unwrap_or_else(|_| DEFAULT_POSTER_PLACEHOLDER.to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            catalog_path,
            static_dir,
            poster_base_url,
            poster_placeholder_url,
        })
    }

    pub fn posters(&self) -> PosterUrls {
        PosterUrls {
            base: self.poster_base_url.clone(),
            placeholder: self.poster_placeholder_url.clone(),
        }
    }
}
