use std::collections::HashMap;

use crate::assets::manifest::SystemManifest;
use crate::components::animation::{AnimationDef, AtlasId};

/// Registry of named sprite sheets, built from a SystemManifest.
/// Each sheet's atlas id is its position in the manifest.
pub struct SpriteRegistry {
    sheets: HashMap<String, AnimationDef>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    /// Build a registry from a parsed SystemManifest.
    pub fn from_manifest(manifest: &SystemManifest) -> Self {
        let mut sheets = HashMap::with_capacity(manifest.sprite_sheets.len());
        for (index, desc) in manifest.sprite_sheets.iter().enumerate() {
            let def = AnimationDef::grid(
                AtlasId(index as u32),
                desc.cols,
                desc.rows,
                desc.frame_duration,
            );
            if sheets.insert(desc.name.clone(), def).is_some() {
                log::warn!("sprite sheet `{}` is listed twice, keeping the last", desc.name);
            }
        }
        Self { sheets }
    }

    /// Look up a sheet by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&AnimationDef> {
        self.sheets.get(name)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let json = r#"{
            "sprite_sheets": [
                { "name": "sun", "path": "sun.png" },
                { "name": "saturn", "path": "saturn.png", "cols": 10, "rows": 3, "frame_duration": 0.2 }
            ],
            "bodies": []
        }"#;
        let manifest = SystemManifest::from_json(json).unwrap();
        let reg = SpriteRegistry::from_manifest(&manifest);
        assert_eq!(reg.len(), 2);

        let saturn = reg.get("saturn").expect("saturn should exist");
        assert_eq!(saturn.atlas, AtlasId(1));
        assert_eq!(saturn.frame_count(), 30);
        assert!((saturn.frame_duration - 0.2).abs() < 1e-6);
    }

    #[test]
    fn unknown_returns_none() {
        let reg = SpriteRegistry::new();
        assert!(reg.get("nonexistent").is_none());
        assert!(reg.is_empty());
    }
}
