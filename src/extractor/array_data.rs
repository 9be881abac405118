//! Exportable array data
//!
//! Extraction results are plain vectors. `ArrayData` packs a grid result
//! together with its shape so it can be written out as CSV, JSON or NumPy
//! NPY for downstream terrain tools.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;

use byteorder::{LittleEndian, WriteBytesExt};
use log::{debug, info};

use crate::errors::{HeightmapError, HeightmapResult};
use crate::utils::progress::ProgressTracker;


/// Output file format for array data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayFormat {
    Csv,
    Json,
    Npy,
}

impl Default for ArrayFormat {
    fn default() -> Self {
        ArrayFormat::Csv
    }
}

impl FromStr for ArrayFormat {
    type Err = HeightmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ArrayFormat::Csv),
            "json" => Ok(ArrayFormat::Json),
            "npy" => Ok(ArrayFormat::Npy),
            _ => Err(HeightmapError::GenericError(format!("Unsupported array format: {}", s))),
        }
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayFormat::Csv => f.write_str("csv"),
            ArrayFormat::Json => f.write_str("json"),
            ArrayFormat::Npy => f.write_str("npy"),
        }
    }
}

/// Shape used when writing array data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLayout {
    /// `height` rows of `width` values
    Grid,
    /// One row-major sequence of `width * height` values
    Flat,
}

impl Default for ArrayLayout {
    fn default() -> Self {
        ArrayLayout::Grid
    }
}

impl FromStr for ArrayLayout {
    type Err = HeightmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ArrayLayout::Grid),
            "flat" => Ok(ArrayLayout::Flat),
            _ => Err(HeightmapError::GenericError(format!("Unsupported array layout: {}", s))),
        }
    }
}

impl fmt::Display for ArrayLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayLayout::Grid => f.write_str("grid"),
            ArrayLayout::Flat => f.write_str("flat"),
        }
    }
}

/// Array data extracted from a raster
///
/// Values are stored row-major with `samples` bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayData {
    /// Width of the array (columns)
    pub width: u32,
    /// Height of the array (rows)
    pub height: u32,
    /// Values per pixel (1 for heights and channels, 4 for RGBA)
    pub samples: usize,
    /// Raw data values in row-major order
    pub data: Vec<u8>,
}

impl ArrayData {
    /// Pack row-major values with an explicit shape
    ///
    /// The shape is taken as given rather than read off the values, so a
    /// region with no rows still keeps its width.
    ///
    /// # Arguments
    /// * `width` - Columns in the array
    /// * `height` - Rows in the array
    /// * `samples` - Values per pixel
    /// * `data` - Row-major values
    ///
    /// # Returns
    /// The array, or `InvalidBufferLength` if `data` does not hold
    /// `width * height * samples` values
    pub fn new(width: u32, height: u32, samples: usize, data: Vec<u8>) -> HeightmapResult<Self> {
        let expected = width as usize * height as usize * samples;
        if data.len() != expected {
            return Err(HeightmapError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(ArrayData { width, height, samples, data })
    }

    /// Get the values of one pixel
    ///
    /// # Arguments
    /// * `x` - Column index
    /// * `y` - Row index
    ///
    /// # Returns
    /// The `samples` values at the position, or None if out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = (y as usize * self.width as usize + x as usize) * self.samples;
        self.data.get(idx..idx + self.samples)
    }

    /// Minimum, maximum and mean over all stored values
    ///
    /// # Returns
    /// `None` for an empty array
    pub fn statistics(&self) -> Option<(u8, u8, f64)> {
        let min = *self.data.iter().min()?;
        let max = *self.data.iter().max()?;
        let sum: u64 = self.data.iter().map(|&v| v as u64).sum();

        Some((min, max, sum as f64 / self.data.len() as f64))
    }

    /// Save the array to a file in the specified format
    ///
    /// # Arguments
    /// * `path` - Path to save the file
    /// * `format` - Output format
    /// * `layout` - Whether to keep rows or flatten them
    pub fn save_to_file(&self, path: &str, format: ArrayFormat, layout: ArrayLayout) -> HeightmapResult<()> {
        info!("Saving {}x{} array to {} as {} ({})", self.width, self.height, path, format, layout);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, format, layout)?;
        writer.flush()?;

        Ok(())
    }

    /// Write the array to any writer in the specified format
    pub fn write_to<W: Write>(&self, writer: &mut W, format: ArrayFormat, layout: ArrayLayout) -> HeightmapResult<()> {
        let progress = ProgressTracker::new(self.height as u64, &format!("Writing {}", format));

        match format {
            ArrayFormat::Csv => self.write_csv(writer, layout, &progress)?,
            ArrayFormat::Json => self.write_json(writer, layout, &progress)?,
            ArrayFormat::Npy => self.write_npy(writer, layout, &progress)?,
        }

        progress.finish();
        Ok(())
    }

    /// Format the values of one pixel as a CSV cell
    fn csv_cell(values: &[u8]) -> String {
        values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
    }

    /// Format the values of one pixel as a JSON value
    fn json_value(&self, values: &[u8]) -> String {
        if self.samples == 1 {
            values[0].to_string()
        } else {
            let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            format!("[{}]", parts.join(", "))
        }
    }

    /// Write the array as CSV
    fn write_csv<W: Write>(&self, writer: &mut W, layout: ArrayLayout,
                           progress: &ProgressTracker) -> HeightmapResult<()> {
        match layout {
            ArrayLayout::Grid => {
                write!(writer, "row/col")?;
                for x in 0..self.width {
                    write!(writer, ",{}", x)?;
                }
                writeln!(writer)?;

                for y in 0..self.height {
                    write!(writer, "{}", y)?;
                    for x in 0..self.width {
                        match self.get(x, y) {
                            Some(values) => write!(writer, ",{}", Self::csv_cell(values))?,
                            None => write!(writer, ",")?,
                        }
                    }
                    writeln!(writer)?;
                    progress.increment(1);
                }
            },
            ArrayLayout::Flat => {
                writeln!(writer, "index,value")?;
                for (index, values) in self.data.chunks_exact(self.samples).enumerate() {
                    writeln!(writer, "{},{}", index, Self::csv_cell(values))?;
                    if self.width > 0 && (index + 1) % self.width as usize == 0 {
                        progress.increment(1);
                    }
                }
            },
        }

        Ok(())
    }

    /// Write the array as JSON
    fn write_json<W: Write>(&self, writer: &mut W, layout: ArrayLayout,
                            progress: &ProgressTracker) -> HeightmapResult<()> {
        writeln!(writer, "{{")?;
        writeln!(writer, "  \"width\": {},", self.width)?;
        writeln!(writer, "  \"height\": {},", self.height)?;
        writeln!(writer, "  \"samples\": {},", self.samples)?;

        match layout {
            ArrayLayout::Grid => {
                writeln!(writer, "  \"data\": [")?;
                for y in 0..self.height {
                    let cells: Vec<String> = (0..self.width)
                        .filter_map(|x| self.get(x, y))
                        .map(|values| self.json_value(values))
                        .collect();

                    let separator = if y + 1 < self.height { "," } else { "" };
                    writeln!(writer, "    [{}]{}", cells.join(", "), separator)?;
                    progress.increment(1);
                }
                writeln!(writer, "  ]")?;
            },
            ArrayLayout::Flat => {
                let cells: Vec<String> = self.data
                    .chunks_exact(self.samples)
                    .map(|values| self.json_value(values))
                    .collect();
                writeln!(writer, "  \"data\": [{}]", cells.join(", "))?;
                progress.increment(self.height as u64);
            },
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    /// NPY shape tuple for the given layout
    fn npy_shape(&self, layout: ArrayLayout) -> String {
        let pixels = self.width as usize * self.height as usize;
        match (layout, self.samples) {
            (ArrayLayout::Grid, 1) => format!("({}, {})", self.height, self.width),
            (ArrayLayout::Grid, s) => format!("({}, {}, {})", self.height, self.width, s),
            (ArrayLayout::Flat, 1) => format!("({},)", pixels),
            (ArrayLayout::Flat, s) => format!("({}, {})", pixels, s),
        }
    }

    /// Write the array as a NumPy NPY v1.0 file
    fn write_npy<W: Write>(&self, writer: &mut W, layout: ArrayLayout,
                           progress: &ProgressTracker) -> HeightmapResult<()> {
        writer.write_all(b"\x93NUMPY")?;
        writer.write_all(&[0x01, 0x00])?;

        let header_str = format!(
            "{{'descr': '|u1', 'fortran_order': False, 'shape': {}, }}",
            self.npy_shape(layout)
        );

        // Magic (6) + version (2) + length (2) + header + newline must be a multiple of 64
        let unpadded = 10 + header_str.len() + 1;
        let padding_len = (64 - unpadded % 64) % 64;
        let padded_header = format!("{}{}\n", header_str, " ".repeat(padding_len));
        debug!("NPY header is {} bytes", padded_header.len());

        writer.write_u16::<LittleEndian>(padded_header.len() as u16)?;
        writer.write_all(padded_header.as_bytes())?;

        let row_len = self.width as usize * self.samples;
        if row_len == 0 {
            return Ok(());
        }
        for row in self.data.chunks(row_len) {
            writer.write_all(row)?;
            progress.increment(1);
        }

        Ok(())
    }
}
