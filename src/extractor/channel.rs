//! Color channel tags
//!
//! Channels are resolved from their textual names once, at the API boundary,
//! so the extraction loop only ever sees the closed `Channel` enum.

use std::fmt;
use std::str::FromStr;

use crate::errors::{HeightmapError, HeightmapResult};

/// One of the four channels of an RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// All channels in pixel byte order
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Byte offset of the channel within an RGBA pixel
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = HeightmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            "alpha" | "a" => Ok(Channel::Alpha),
            _ => Err(HeightmapError::InvalidChannel(s.to_string())),
        }
    }
}

/// Conversion into a `Channel` at the API boundary
///
/// Implemented for `Channel` itself (infallible) and for textual tags,
/// which fail with `InvalidChannel` when unknown.
pub trait IntoChannel {
    fn into_channel(self) -> HeightmapResult<Channel>;
}

impl IntoChannel for Channel {
    fn into_channel(self) -> HeightmapResult<Channel> {
        Ok(self)
    }
}

impl IntoChannel for &str {
    fn into_channel(self) -> HeightmapResult<Channel> {
        self.parse()
    }
}

impl IntoChannel for &String {
    fn into_channel(self) -> HeightmapResult<Channel> {
        self.parse()
    }
}

impl IntoChannel for String {
    fn into_channel(self) -> HeightmapResult<Channel> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_offsets_follow_pixel_order() {
        let offsets: Vec<usize> = Channel::ALL.iter().map(|c| c.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_channel_parsing() {
        assert_eq!("red".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!("Green".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!(" b ".parse::<Channel>().unwrap(), Channel::Blue);
        assert_eq!("ALPHA".into_channel().unwrap(), Channel::Alpha);
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        match "unknown".into_channel() {
            Err(HeightmapError::InvalidChannel(tag)) => assert_eq!(tag, "unknown"),
            other => panic!("expected InvalidChannel, got {:?}", other),
        }
    }
}
