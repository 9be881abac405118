//! Parsing of textual region specifications
//!
//! Regions are written as `x,y,w,h`. Any field may be left empty to take its
//! default, e.g. `32,64,,` crops from (32, 64) to the bottom-right corner.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{HeightmapError, HeightmapResult};
use crate::extractor::RegionSpec;

lazy_static! {
    static ref REGION_PATTERN: Regex =
        Regex::new(r"^\s*(\d*)\s*,\s*(\d*)\s*,\s*(\d*)\s*,\s*(\d*)\s*$")
            .expect("region pattern is a valid regex");
}

/// Parse a single optional field
fn parse_field(caps: &regex::Captures<'_>, index: usize, name: &str) -> HeightmapResult<Option<u32>> {
    match caps.get(index).map(|m| m.as_str()) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<u32>()
            .map(Some)
            .map_err(|_| HeightmapError::InvalidRegion(format!("{} value '{}' is out of range", name, text))),
    }
}

/// Parse a region string in `x,y,w,h` form
///
/// # Returns
/// The region spec, or `InvalidRegion` if the text does not match
pub fn parse_region(text: &str) -> HeightmapResult<RegionSpec> {
    let caps = REGION_PATTERN.captures(text).ok_or_else(|| HeightmapError::InvalidRegion(
        format!("'{}' must have 4 comma-separated values (x,y,w,h)", text)))?;

    let spec = RegionSpec::new(
        parse_field(&caps, 1, "x")?,
        parse_field(&caps, 2, "y")?,
        parse_field(&caps, 3, "w")?,
        parse_field(&caps, 4, "h")?,
    );

    debug!("Parsed region '{}' as {:?}", text, spec);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_region() {
        let spec = parse_region("32, 64, 64, 128").unwrap();
        assert_eq!(spec, RegionSpec::from((32, 64, 64, 128)));
    }

    #[test]
    fn test_parse_partial_region() {
        let spec = parse_region("32,64,,").unwrap();
        assert_eq!(spec, RegionSpec::full().x(32).y(64));

        assert!(parse_region(",,,").unwrap().is_full());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(matches!(parse_region("1,2,3"), Err(HeightmapError::InvalidRegion(_))));
        assert!(matches!(parse_region("a,b,c,d"), Err(HeightmapError::InvalidRegion(_))));
        assert!(matches!(parse_region("-1,0,1,1"), Err(HeightmapError::InvalidRegion(_))));
        assert!(matches!(parse_region("99999999999,0,1,1"), Err(HeightmapError::InvalidRegion(_))));
    }
}
