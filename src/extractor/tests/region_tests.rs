//! Tests for region resolution

extern crate std;

use crate::errors::HeightmapError;
use crate::extractor::{Region, RegionSpec};

#[test]
fn test_full_spec_resolves_to_whole_raster() {
    let region = RegionSpec::full().resolve(256, 128).unwrap();
    std::assert_eq!(region, Region::new(0, 0, 256, 128));
}

#[test]
fn test_omitted_size_extends_to_edge() {
    let region = RegionSpec::full().x(32).y(64).resolve(256, 256).unwrap();
    std::assert_eq!(region, Region::new(32, 64, 224, 192));

    let region = RegionSpec::full().width(10).resolve(256, 256).unwrap();
    std::assert_eq!(region, Region::new(0, 0, 10, 256));
}

#[test]
fn test_explicit_region_is_kept() {
    let region = RegionSpec::from((32, 64, 64, 128)).resolve(256, 256).unwrap();
    std::assert_eq!(region, Region::new(32, 64, 64, 128));
    std::assert_eq!(region.area(), 8192);
}

#[test]
fn test_region_touching_edges_is_valid() {
    let region = RegionSpec::from((200, 100, 56, 156)).resolve(256, 256).unwrap();
    std::assert_eq!(region.end_x(), Some(256));
    std::assert_eq!(region.end_y(), Some(256));
}

#[test]
fn test_region_past_edge_is_rejected() {
    let result = RegionSpec::from((200, 0, 57, 10)).resolve(256, 256);
    match result {
        Err(HeightmapError::RegionOutOfBounds { region, width, height }) => {
            std::assert_eq!(region, Region::new(200, 0, 57, 10));
            std::assert_eq!((width, height), (256, 256));
        },
        other => std::panic!("expected RegionOutOfBounds, got {:?}", other),
    }

    std::assert!(RegionSpec::full().y(10).height(247).resolve(256, 256).is_err());
}

#[test]
fn test_origin_past_edge_is_rejected() {
    std::assert!(RegionSpec::full().x(257).resolve(256, 256).is_err());
    std::assert!(RegionSpec::full().y(300).resolve(256, 256).is_err());
}

#[test]
fn test_origin_on_edge_gives_empty_region() {
    let region = RegionSpec::full().x(256).resolve(256, 16).unwrap();
    std::assert_eq!(region, Region::new(256, 0, 0, 16));
    std::assert_eq!(region.area(), 0);
}

#[test]
fn test_overflowing_region_is_rejected() {
    let result = RegionSpec::from((u32::MAX, 0, 2, 1)).resolve(u32::MAX, 1);
    std::assert!(matches!(result, Err(HeightmapError::RegionOutOfBounds { .. })));
}

#[test]
fn test_region_converts_to_spec() {
    let spec = RegionSpec::from(Region::new(1, 2, 3, 4));
    std::assert_eq!(spec, RegionSpec::new(Some(1), Some(2), Some(3), Some(4)));
    std::assert!(RegionSpec::from(None::<Region>).is_full());
}
