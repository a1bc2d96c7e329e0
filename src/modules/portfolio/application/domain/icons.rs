use serde::Serialize;

/// Icons a service may reference by name.
pub const ICON_CATALOG: &[&str] = &[
    "Layout",
    "Zap",
    "Code",
    "PenTool",
    "Palette",
    "Smartphone",
    "Monitor",
    "Globe",
    "Camera",
    "Video",
    "Film",
    "Briefcase",
    "Target",
    "Sparkles",
    "Star",
    "Megaphone",
    "ShoppingCart",
    "Layers",
];

pub const FALLBACK_ICON: &str = "Zap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIcon {
    pub name: &'static str,
    pub is_fallback: bool,
}

/// Unknown names resolve to the fallback icon rather than failing.
pub fn resolve_icon(name: &str) -> ResolvedIcon {
    match ICON_CATALOG.iter().find(|candidate| **candidate == name) {
        Some(found) => ResolvedIcon {
            name: found,
            is_fallback: false,
        },
        None => ResolvedIcon {
            name: FALLBACK_ICON,
            is_fallback: true,
        },
    }
}
