//! Target platforms and album resolution tiers.

use std::fmt;
use std::str::FromStr;

/// Social surfaces an image can be adapted for.
///
/// The platform alone fixes the aspect ratio sent to the model; no other
/// input influences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Instagram feed post, square.
    Instagram,
    /// `TikTok` vertical frame.
    TikTok,
    /// `YouTube` thumbnail, widescreen.
    YouTube,
    /// Xiaohongshu lifestyle post, portrait.
    Xiaohongshu,
    /// Album cover art, square.
    AlbumCover,
}

impl Platform {
    /// All supported platforms, in menu order.
    pub const ALL: [Self; 5] =
        [Self::Instagram, Self::TikTok, Self::YouTube, Self::Xiaohongshu, Self::AlbumCover];

    /// The aspect ratio requested from the model for this platform.
    #[must_use]
    pub fn aspect_ratio(self) -> &'static str {
        match self {
            Self::Instagram | Self::AlbumCover => "1:1",
            Self::TikTok => "9:16",
            Self::YouTube => "16:9",
            Self::Xiaohongshu => "3:4",
        }
    }

    /// Kebab-case name used on the command line and in output filenames.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::Xiaohongshu => "xiaohongshu",
            Self::AlbumCover => "album-cover",
        }
    }

    /// Human-readable label including the aspect ratio.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram (1:1)",
            Self::TikTok => "TikTok (9:16)",
            Self::YouTube => "YouTube (16:9)",
            Self::Xiaohongshu => "Xiaohongshu (3:4)",
            Self::AlbumCover => "Album Cover (1:1)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::TikTok),
            "youtube" => Ok(Self::YouTube),
            "xiaohongshu" => Ok(Self::Xiaohongshu),
            "album-cover" | "album" => Ok(Self::AlbumCover),
            _ => Err(format!(
                "Unknown platform '{s}'. Valid: instagram, tiktok, youtube, xiaohongshu, album-cover"
            )),
        }
    }
}

/// Output resolution tiers for album covers.
///
/// Only consulted when the platform is [`Platform::AlbumCover`]. The pixel
/// target feeds the prompt text; it never changes the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Standard distribution masters.
    Standard,
    /// HD masters.
    Hd,
    /// Ultra HD masters.
    UltraHd,
    /// `DistroKid`/Spotify submission size.
    #[default]
    Distro,
}

impl Resolution {
    /// All supported resolutions, in menu order.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Hd, Self::UltraHd, Self::Distro];

    /// Target edge length in pixels.
    #[must_use]
    pub fn pixels(self) -> u32 {
        match self {
            Self::Standard => 1400,
            Self::Hd => 1600,
            Self::UltraHd => 1800,
            Self::Distro => 3000,
        }
    }

    /// Kebab-case name used on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hd => "hd",
            Self::UltraHd => "ultra-hd",
            Self::Distro => "distro",
        }
    }

    /// Human-readable label including the pixel target.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard (1400px)",
            Self::Hd => "HD (1600px)",
            Self::UltraHd => "Ultra HD (1800px)",
            Self::Distro => "DistroKid/Spotify (3000px)",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "hd" => Ok(Self::Hd),
            "ultra-hd" => Ok(Self::UltraHd),
            "distro" => Ok(Self::Distro),
            _ => Err(format!("Unknown resolution '{s}'. Valid: standard, hd, ultra-hd, distro")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_per_platform() {
        assert_eq!(Platform::Instagram.aspect_ratio(), "1:1");
        assert_eq!(Platform::TikTok.aspect_ratio(), "9:16");
        assert_eq!(Platform::YouTube.aspect_ratio(), "16:9");
        assert_eq!(Platform::Xiaohongshu.aspect_ratio(), "3:4");
        assert_eq!(Platform::AlbumCover.aspect_ratio(), "1:1");
    }

    #[test]
    fn aspect_ratio_stays_in_supported_set() {
        let supported = ["1:1", "9:16", "16:9", "3:4"];
        for platform in Platform::ALL {
            assert!(supported.contains(&platform.aspect_ratio()));
        }
    }

    #[test]
    fn slug_round_trips_through_from_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.slug().parse::<Platform>().unwrap(), platform);
        }
        for resolution in Resolution::ALL {
            assert_eq!(resolution.slug().parse::<Resolution>().unwrap(), resolution);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TikTok".parse::<Platform>().unwrap(), Platform::TikTok);
        assert_eq!("ALBUM-COVER".parse::<Platform>().unwrap(), Platform::AlbumCover);
        assert_eq!("HD".parse::<Resolution>().unwrap(), Resolution::Hd);
    }

    #[test]
    fn album_alias_parses() {
        assert_eq!("album".parse::<Platform>().unwrap(), Platform::AlbumCover);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert!(err.contains("Unknown platform 'myspace'"));
    }

    #[test]
    fn unknown_resolution_is_rejected() {
        let err = "8k".parse::<Resolution>().unwrap_err();
        assert!(err.contains("Unknown resolution '8k'"));
    }

    #[test]
    fn resolution_pixel_targets() {
        assert_eq!(Resolution::Standard.pixels(), 1400);
        assert_eq!(Resolution::Hd.pixels(), 1600);
        assert_eq!(Resolution::UltraHd.pixels(), 1800);
        assert_eq!(Resolution::Distro.pixels(), 3000);
    }

    #[test]
    fn default_resolution_is_distro() {
        assert_eq!(Resolution::default(), Resolution::Distro);
    }
}
