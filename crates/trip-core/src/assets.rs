//! Image references used by the site.
//!
//! The core never touches image bytes; it only hands the view a reference
//! the renderer can resolve.

use std::fmt;

/// Remote hotel photo used by the original page.
const HOTEL_PHOTO_URL: &str = "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Identifier of a bundled or remote image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    /// Diamond used by the decorative background layer
    DiamondMarker,
    /// Portrait of the birthday guest, shown on the game overlay
    Portrait,
    /// First hint image (map of the south)
    HintMap,
    /// Second hint image (the dome)
    HintDome,
    /// Hotel photo on the hotel panel
    HotelPhoto,
}

impl AssetId {
    pub const ALL: [AssetId; 5] = [
        AssetId::DiamondMarker,
        AssetId::Portrait,
        AssetId::HintMap,
        AssetId::HintDome,
        AssetId::HotelPhoto,
    ];

    /// Path relative to the asset directory, or an absolute URL.
    fn location(&self) -> &'static str {
        match self {
            AssetId::DiamondMarker => "diamond.svg",
            AssetId::Portrait => "portrait.svg",
            AssetId::HintMap => "hint-map.svg",
            AssetId::HintDome => "hint-dome.svg",
            AssetId::HotelPhoto => HOTEL_PHOTO_URL,
        }
    }

    /// Alt text for the rendered image
    pub fn alt(&self) -> &'static str {
        match self {
            AssetId::DiamondMarker => "",
            AssetId::Portrait => "阿堡",
            AssetId::HintMap => "提示地圖",
            AssetId::HintDome => "提示照片",
            AssetId::HotelPhoto => "Hotel Vibe",
        }
    }
}

/// A resolvable reference to an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves [`AssetId`]s against a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoader {
    base: String,
}

impl AssetLoader {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { base }
    }

    /// Resolve an asset. Remote URLs pass through untouched.
    pub fn resolve(&self, id: AssetId) -> AssetRef {
        let location = id.location();
        if location.starts_with("http://") || location.starts_with("https://") || self.base.is_empty() {
            AssetRef(location.to_string())
        } else {
            AssetRef(format!("{}/{}", self.base, location))
        }
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new("assets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_assets_are_prefixed() {
        let loader = AssetLoader::new("static/");
        assert_eq!(loader.resolve(AssetId::Portrait).as_str(), "static/portrait.svg");
        assert_eq!(loader.resolve(AssetId::HintMap).as_str(), "static/hint-map.svg");
    }

    #[test]
    fn test_remote_assets_pass_through() {
        let loader = AssetLoader::default();
        assert!(loader.resolve(AssetId::HotelPhoto).as_str().starts_with("https://images.unsplash.com/"));
    }

    #[test]
    fn test_empty_base() {
        let loader = AssetLoader::new("");
        assert_eq!(loader.resolve(AssetId::DiamondMarker).to_string(), "diamond.svg");
    }

    #[test]
    fn test_every_asset_resolves() {
        let loader = AssetLoader::default();
        for id in AssetId::ALL {
            assert!(!loader.resolve(id).as_str().is_empty());
        }
    }
}
