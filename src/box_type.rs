//! Tags for the native encoding of a bounding box.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The native encoding a bounding box stores its coordinates in.
///
/// IoU is only defined between boxes that share a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoxType {
    /// Origin plus extent: `(xmin, ymin, width, height)`.
    Coco,
    /// Two opposite corners: `(xmin, ymin, xmax, ymax)`.
    Pascal,
}

impl BoxType {
    /// Returns the uppercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxType::Coco => "COCO",
            BoxType::Pascal => "PASCAL",
        }
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(BoxType::Coco.to_string(), "COCO");
        assert_eq!(BoxType::Pascal.to_string(), "PASCAL");
    }

    #[test]
    fn serializes_as_uppercase_name() {
        let json = serde_json::to_string(&BoxType::Pascal).unwrap();
        assert_eq!(json, "\"PASCAL\"");
        let parsed: BoxType = serde_json::from_str("\"COCO\"").unwrap();
        assert_eq!(parsed, BoxType::Coco);
    }
}
