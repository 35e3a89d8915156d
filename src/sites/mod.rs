//! Ancient site catalog
//!
//! This module provides a fixed, ordered collection of notable ancient
//! sites with their geographic positions, used for map annotation, export,
//! and as great-circle endpoints.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::coordinates::GeoPoint;
use crate::geodesic::Result;

/// A named site on the planet's surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Name of the site
    pub name: String,
    /// Geographic position
    pub position: GeoPoint,
}

impl Site {
    /// Create a new site from degree coordinates
    ///
    /// # Errors
    ///
    /// Fails when the coordinates are outside the valid ranges.
    pub fn new(name: &str, lat_deg: f64, lon_deg: f64) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            position: GeoPoint::from_degrees(lat_deg, lon_deg)?,
        })
    }
}

/// Ordered, read-only catalog of sites
///
/// Order is significant and preserved from the source list; the catalog is
/// never mutated after construction. Name lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    sites: Vec<Site>,
}

impl Default for SiteCatalog {
    /// Get the default catalog of ancient sites
    fn default() -> Self {
        let sites = ANCIENT_SITE_PAIRS
            .iter()
            .map(|&(lat, lon, name)| {
                // The table below is static and already range-checked by its test
                Site::new(name, lat, lon).expect("static site table holds valid coordinates")
            })
            .collect();
        Self { sites }
    }
}

impl SiteCatalog {
    /// Create a catalog from an ordered list of sites
    pub fn from_sites(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    /// Get a site by name (case-insensitive)
    ///
    /// Where a name appears more than once, the first occurrence wins.
    pub fn get(&self, name: &str) -> Option<&Site> {
        let lower = name.to_lowercase();
        self.sites.iter().find(|s| s.name.to_lowercase() == lower)
    }

    /// All sites in catalog order
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Iterate over the sites in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }

    /// Get count of sites
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

lazy_static! {
    /// Map from lowercase site names to positions in the ordered table
    static ref SITE_INDEX: HashMap<String, usize> = {
        let mut m = HashMap::new();
        for (i, &(_, _, name)) in ANCIENT_SITE_PAIRS.iter().enumerate() {
            // First occurrence wins for duplicated names
            m.entry(name.to_lowercase()).or_insert(i);
        }
        m
    };
}

/// Look up a site position in the default table by name
pub fn site_position(name: &str) -> Option<GeoPoint> {
    SITE_INDEX.get(&name.to_lowercase()).map(|&i| {
        let (lat, lon, _) = ANCIENT_SITE_PAIRS[i];
        GeoPoint::from_degrees(lat, lon).expect("static site table holds valid coordinates")
    })
}

/// Endpoints of the default highlighted route: Easter Island to Giza
pub const DEFAULT_ROUTE: (&str, &str) = ("Easter Island", "Great Pyramid of Giza");

/// Triples of (latitude, longitude, name) for the ancient sites
///
/// Order matters for rendering and export; the list is kept as sourced,
/// including the repeated Baalbek entry.
const ANCIENT_SITE_PAIRS: &[(f64, f64, &str)] = &[
    (51.1789, -1.8262, "Stonehenge"),
    (29.9792, 31.1342, "Great Pyramid of Giza"),
    (-13.5096, -71.9817, "Sacsayhuamán"),
    (-13.1631, -72.5450, "Machu Picchu"),
    (34.0058, 36.2039, "Baalbek"),
    (37.2231, 38.9222, "Gobekli Tepe"),
    (-27.1127, -109.3497, "Easter Island"),
    (9.1545, -83.8612, "Guayabo"),
    (47.5936, -3.0834, "Carnac"),
    (51.4285, -1.8541, "Avebury"),
    (53.6947, -6.4758, "Newgrange"),
    (59.0481, -3.3430, "Ring of Brodgar"),
    (27.3294, 68.1384, "Mohenjo-daro"),
    (-20.2670, 30.9333, "Great Zimbabwe"),
    (-16.5540, -68.6720, "Tiwanaku"),
    (13.6910, -14.8974, "Senegambian Stone Circles"),
    (34.0058, 36.2039, "Baalbek"),
    (43.3776, 44.1563, "Vainakh Towers"),
    (59.3520, -2.9154, "Maeshowe"),
    (20.6843, -88.5678, "Chichen Itza"),
    (17.4820, -92.0372, "Palenque"),
    (19.6925, -98.8438, "Cantona"),
    (17.0465, -96.7675, "Monte Alban"),
    (17.2220, -89.6237, "Tikal"),
    (17.7561, -89.9102, "Caracol"),
    (31.8707, 35.4420, "Jericho"),
    (40.0218, 34.6070, "Hattusa"),
    (37.7281, 22.7544, "Mycenae"),
    (35.2982, 25.1594, "Knossos"),
    (37.9715, 23.7257, "Athens"),
    (35.8495, 14.5326, "Tarxien Temples"),
    (40.4319, 116.5704, "Great Wall of China"),
    (34.3853, 109.2786, "Terracotta Army"),
    (8.3114, 80.4037, "Anuradhapura"),
    (7.9403, 81.0184, "Polonnaruwa"),
    (7.9569, 80.7603, "Sigiriya"),
    (13.4125, 103.8667, "Angkor Wat"),
    (-7.6079, 110.2038, "Borobudur"),
    (6.8428, 158.3348, "Nan Madol"),
    (30.3285, 35.4444, "Petra"),
    (39.9578, 26.2385, "Troy"),
    (38.4828, 22.5010, "Delphi"),
    (40.8360, 23.8537, "Amphipolis"),
    (14.1320, 38.7200, "Aksum"),
    (22.5091, 30.7194, "Abu Simbel"),
    (25.7402, 32.6014, "Luxor Temple"),
    (16.9370, 33.7430, "Jebel Barkal"),
    (29.4731, 31.1557, "Dahshur"),
    (39.0259, -83.4301, "Serpent Mound"),
];
