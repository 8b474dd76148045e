//! Geographic markers and their projection onto the globe's local frame.

use fnv::FnvHashMap;
use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

pub type MarkerId = u32;

/// A clickable point of interest linked to a panorama asset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub name: String,
    pub lat: f32,
    pub lon: f32,
    pub pano: String,
}

impl Marker {
    pub fn new(id: MarkerId, name: &str, lat: f32, lon: f32, pano: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            lat,
            lon,
            pano: pano.to_string(),
        }
    }

    /// Marker position in the globe's local (unrotated) frame.
    #[inline]
    pub fn local_position(&self, radius: f32) -> Vec3 {
        lat_lon_to_vec3(self.lat, self.lon, radius)
    }
}

/// Project latitude/longitude (degrees) onto a sphere of `radius`.
///
/// Matches the equirectangular UV layout of the globe texture: +Y is north and
/// (0°, 0°) lands on +X. Input outside [-90, 90] x [-180, 180] is not checked.
#[inline]
pub fn lat_lon_to_vec3(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid marker catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate marker id {0}")]
    DuplicateId(MarkerId),
    #[error("marker catalog is empty")]
    Empty,
}

/// Static marker list, indexed by id.
#[derive(Clone, Debug)]
pub struct MarkerCatalog {
    markers: Vec<Marker>,
    index: FnvHashMap<MarkerId, usize>,
}

impl MarkerCatalog {
    pub fn new(markers: Vec<Marker>) -> Result<Self, CatalogError> {
        if markers.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut index = FnvHashMap::default();
        for (i, m) in markers.iter().enumerate() {
            if index.insert(m.id, i).is_some() {
                return Err(CatalogError::DuplicateId(m.id));
            }
        }
        Ok(Self { markers, index })
    }

    /// Parse a JSON array of markers.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let markers: Vec<Marker> = serde_json::from_str(text)?;
        Self::new(markers)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.index.get(&id).map(|&i| &self.markers[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        let markers = vec![
            Marker::new(1, "New York", 40.7, -74.0, "/vr_images/sphere.jpg"),
            Marker::new(2, "Chongqing", 29.56, 106.55, "/vr_images/chongqing.jpg"),
            Marker::new(3, "London", 51.5, -0.12, "/vr_images/sphere.jpg"),
            Marker::new(4, "Paris", 48.8566, 2.3522, "/vr_images/pexels-pixabay.jpg"),
        ];
        let index = markers.iter().enumerate().map(|(i, m)| (m.id, i)).collect();
        Self { markers, index }
    }
}
