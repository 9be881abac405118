//! Tests for array data export

use crate::errors::HeightmapError;
use crate::extractor::{ArrayData, ArrayFormat, ArrayLayout};

fn heights() -> ArrayData {
    ArrayData::new(2, 2, 1, vec![1, 2, 3, 4]).unwrap()
}

fn render(data: &ArrayData, format: ArrayFormat, layout: ArrayLayout) -> Vec<u8> {
    let mut out = Vec::new();
    data.write_to(&mut out, format, layout).unwrap();
    out
}

#[test]
fn test_scalar_shape() {
    let data = heights();
    assert_eq!((data.width, data.height, data.samples), (2, 2, 1));
    assert_eq!(data.get(1, 0), Some(&[2u8][..]));
    assert_eq!(data.get(2, 0), None);
}

#[test]
fn test_rgba_shape() {
    let data = ArrayData::new(2, 1, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!((data.width, data.height, data.samples), (2, 1, 4));
    assert_eq!(data.get(1, 0), Some(&[5u8, 6, 7, 8][..]));
}

#[test]
fn test_new_checks_length() {
    match ArrayData::new(2, 2, 4, vec![0; 15]) {
        Err(HeightmapError::InvalidBufferLength { expected, actual }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected InvalidBufferLength, got {:?}", other),
    }
}

#[test]
fn test_statistics() {
    assert_eq!(heights().statistics(), Some((1, 4, 2.5)));
    assert_eq!(ArrayData::new(3, 0, 1, Vec::new()).unwrap().statistics(), None);
}

#[test]
fn test_csv_grid_output() {
    let csv = String::from_utf8(render(&heights(), ArrayFormat::Csv, ArrayLayout::Grid)).unwrap();
    assert_eq!(csv, "row/col,0,1\n0,1,2\n1,3,4\n");
}

#[test]
fn test_csv_flat_output() {
    let csv = String::from_utf8(render(&heights(), ArrayFormat::Csv, ArrayLayout::Flat)).unwrap();
    assert_eq!(csv, "index,value\n0,1\n1,2\n2,3\n3,4\n");
}

#[test]
fn test_csv_rgba_cells() {
    let data = ArrayData::new(1, 1, 4, vec![1, 2, 3, 4]).unwrap();
    let csv = String::from_utf8(render(&data, ArrayFormat::Csv, ArrayLayout::Grid)).unwrap();
    assert_eq!(csv, "row/col,0\n0,1 2 3 4\n");
}

#[test]
fn test_json_grid_output() {
    let json = String::from_utf8(render(&heights(), ArrayFormat::Json, ArrayLayout::Grid)).unwrap();
    let expected = "{\n  \"width\": 2,\n  \"height\": 2,\n  \"samples\": 1,\n  \"data\": [\n    [1, 2],\n    [3, 4]\n  ]\n}\n";
    assert_eq!(json, expected);
}

#[test]
fn test_json_flat_rgba_output() {
    let data = ArrayData::new(1, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let json = String::from_utf8(render(&data, ArrayFormat::Json, ArrayLayout::Flat)).unwrap();
    assert!(json.contains("\"data\": [[1, 2, 3, 4], [5, 6, 7, 8]]"));
    assert!(json.contains("\"samples\": 4,"));
}

#[test]
fn test_npy_output() {
    let bytes = render(&heights(), ArrayFormat::Npy, ArrayLayout::Grid);

    assert_eq!(&bytes[..6], b"\x93NUMPY");
    assert_eq!(&bytes[6..8], &[1, 0]);

    let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    assert_eq!((10 + header_len) % 64, 0);

    let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
    assert!(header.contains("'shape': (2, 2)"));
    assert!(header.ends_with('\n'));

    assert_eq!(&bytes[10 + header_len..], &[1, 2, 3, 4]);
}

#[test]
fn test_npy_flat_rgba_shape() {
    let data = ArrayData::new(2, 1, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let bytes = render(&data, ArrayFormat::Npy, ArrayLayout::Flat);

    let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
    assert!(header.contains("'shape': (2, 4)"));
    assert_eq!(bytes.len(), 10 + header_len + 8);
}

#[test]
fn test_npy_empty_rows_keep_width() {
    let data = ArrayData::new(4, 0, 1, Vec::new()).unwrap();
    let bytes = render(&data, ArrayFormat::Npy, ArrayLayout::Grid);

    let header_len = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    let header = std::str::from_utf8(&bytes[10..10 + header_len]).unwrap();
    assert!(header.contains("'shape': (0, 4)"));
    assert_eq!(bytes.len(), 10 + header_len);
}

#[test]
fn test_format_and_layout_parsing() {
    assert_eq!("CSV".parse::<ArrayFormat>().unwrap(), ArrayFormat::Csv);
    assert_eq!("npy".parse::<ArrayFormat>().unwrap(), ArrayFormat::Npy);
    assert!("xml".parse::<ArrayFormat>().is_err());
    assert_eq!("flat".parse::<ArrayLayout>().unwrap(), ArrayLayout::Flat);
    assert!("cube".parse::<ArrayLayout>().is_err());
}
