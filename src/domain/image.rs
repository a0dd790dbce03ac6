//! Collection photo response mapping.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use strum::Display;

use super::error::{decode, DashboardError, Result};

/// Which rendition of a photo was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ImageSize {
    #[strum(to_string = "small")]
    Small,
    #[strum(to_string = "full")]
    Full,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    user: Option<Photographer>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
    full: String,
}

#[derive(Debug, Deserialize)]
struct Photographer {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPhoto {
    pub small: String,
    pub full: String,
    pub description: Option<String>,
    pub photographer: Option<String>,
}

/// What the image panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub size: ImageSize,
    pub url: String,
    pub description: Option<String>,
    pub photographer: Option<String>,
}

impl CollectionPhoto {
    pub fn view(&self, size: ImageSize) -> ImageView {
        let url = match size {
            ImageSize::Small => self.small.clone(),
            ImageSize::Full => self.full.clone(),
        };
        ImageView {
            size,
            url,
            description: self.description.clone(),
            photographer: self.photographer.clone(),
        }
    }
}

/// Maps a collection listing to its photos. An empty listing is a shape error.
pub fn photos_from_json(value: serde_json::Value) -> Result<Vec<CollectionPhoto>> {
    let photos: Vec<Photo> = decode(value, "collection photos")?;
    if photos.is_empty() {
        return Err(DashboardError::Shape(
            "collection photos: empty result set".into(),
        ));
    }

    Ok(photos
        .into_iter()
        .map(|p| CollectionPhoto {
            small: p.urls.small,
            full: p.urls.full,
            description: p.alt_description,
            photographer: p.user.map(|u| u.name),
        })
        .collect())
}

pub fn pick_photo<R: Rng + ?Sized>(
    photos: &[CollectionPhoto],
    size: ImageSize,
    rng: &mut R,
) -> Option<ImageView> {
    photos.choose(rng).map(|photo| photo.view(size))
}
