//! Named image assets resolved from a static bundle manifest.
//!
//! Lookups are validated once at startup so a misnamed asset fails with a
//! diagnostic instead of surfacing as a broken image mid-layout.

use thiserror::Error;

const MANIFEST: &[(&str, &str)] = &[
    ("avatar", "assets/avatar.jpg"),
    ("profile-background", "assets/profile-background.jpg"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("unknown asset `{0}`: not present in the bundle manifest")]
    Missing(String),
}

pub fn lookup(name: &str) -> Result<&'static str, AssetError> {
    MANIFEST
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, url)| *url)
        .ok_or_else(|| AssetError::Missing(name.to_string()))
}

/// The two images the profile screen needs, resolved up front.
#[derive(Clone, PartialEq)]
pub struct ProfileAssets {
    pub avatar_url: &'static str,
    pub banner_url: &'static str,
}

impl ProfileAssets {
    pub fn resolve() -> Result<Self, AssetError> {
        Ok(Self {
            avatar_url: lookup("avatar")?,
            banner_url: lookup("profile-background")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_assets_resolve_from_manifest() {
        let assets = ProfileAssets::resolve().expect("manifest covers profile assets");
        assert!(assets.avatar_url.ends_with("avatar.jpg"));
        assert!(assets.banner_url.ends_with("profile-background.jpg"));
    }

    #[test]
    fn unknown_name_is_reported_by_name() {
        let err = lookup("cover-photo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown asset `cover-photo`: not present in the bundle manifest"
        );
    }
}
