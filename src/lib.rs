//! Earthmark: ancient site catalog and great-circle geometry for world maps
//!
//! This crate provides conversion between geographic and unit-sphere
//! Cartesian coordinates, great-circle arc computation with correct
//! handling of the degenerate cases and the antimeridian seam, a fixed
//! catalog of ancient sites, and map rendering plus GeoJSON export of the
//! resulting geometry.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod export;
pub mod geodesic;
pub mod projection;
pub mod render;
pub mod sites;

// Re-export commonly used types
pub use coordinates::{Cartesian3, GeoPoint};
pub use geodesic::{great_circle, GeodesicError, GreatCircleArc};
pub use sites::{Site, SiteCatalog};

/// Main error type for the earthmark library
#[derive(Debug, Error)]
pub enum EarthmarkError {
    #[error("Geodesic error: {0}")]
    GeodesicError(#[from] GeodesicError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Export error: {0}")]
    ExportError(String),
}

/// Result type for earthmark operations
pub type Result<T> = std::result::Result<T, EarthmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_route_to_export_pipeline() {
        // The full path a caller takes: catalog lookup, arc computation,
        // unwrap, document assembly.
        let catalog = SiteCatalog::default();
        let (start_name, end_name) = sites::DEFAULT_ROUTE;
        let start = catalog.get(start_name).unwrap().position;
        let end = catalog.get(end_name).unwrap().position;

        let arc = great_circle(start, end, 360).expect("route is well-defined");
        let (lats, lons) = arc.unwrapped_degrees();

        let collection = export::document(
            &catalog,
            vec![export::line_feature(
                "Easter Island to Giza",
                &lats,
                &lons,
                export::ROUTE_STYLE,
            )],
        );
        assert_eq!(collection.features.len(), catalog.len() + 1);
    }

    #[test]
    fn test_geodesic_error_converts_into_crate_error() {
        let err = GeoPoint::from_degrees(100.0, 0.0).unwrap_err();
        let wrapped: EarthmarkError = err.into();
        assert!(matches!(wrapped, EarthmarkError::GeodesicError(_)));
        assert!(wrapped.to_string().contains("Invalid coordinate"));
    }
}
