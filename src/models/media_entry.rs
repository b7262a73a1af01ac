use std::fmt;

use uuid::Uuid;

/// Stable identifier of a media entry, generated once when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photo,
    Video { duration_seconds: u32 },
}

impl MediaKind {
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video { .. })
    }

    /// Duration badge text for videos, e.g. `2:10`.
    pub fn duration_label(&self) -> Option<String> {
        match *self {
            Self::Photo => None,
            Self::Video { duration_seconds } => Some(format!(
                "{}:{:02}",
                duration_seconds / 60,
                duration_seconds % 60
            )),
        }
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Parses `RGB`, `RRGGBB` or `AARRGGBB` hex. Non-alphanumeric characters
    /// are trimmed from both ends only, e.g. a leading `#`. The value is read
    /// from the longest hex-digit prefix; the trimmed length picks the format,
    /// and other lengths give opaque black.
    pub fn from_hex(input: &str) -> Self {
        let hex = input.trim_matches(|c: char| !c.is_alphanumeric());
        let value = hex
            .chars()
            .map_while(|c| c.to_digit(16))
            .fold(0u64, |acc, digit| acc.wrapping_mul(16).wrapping_add(u64::from(digit)));

        match hex.chars().count() {
            3 => Self {
                r: ((value >> 8) & 0xF) as u8 * 17,
                g: ((value >> 4) & 0xF) as u8 * 17,
                b: (value & 0xF) as u8 * 17,
                a: 255,
            },
            6 => Self {
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
                a: 255,
            },
            8 => Self {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            },
            _ => Self::BLACK,
        }
    }
}

/// Two-stop gradient used as the placeholder artwork of an entry.
/// The engine never inspects it; the renderer draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub start: Rgba,
    pub end: Rgba,
}

impl Gradient {
    pub fn from_hex(start: &str, end: &str) -> Self {
        Self {
            start: Rgba::from_hex(start),
            end: Rgba::from_hex(end),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntry {
    pub id: EntryId,
    pub kind: MediaKind,
    pub gradient: Gradient,
}

impl MediaEntry {
    /// Create a new entry with a freshly generated id
    pub fn new(kind: MediaKind, gradient: Gradient) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            gradient,
        }
    }

    pub fn photo(gradient: Gradient) -> Self {
        Self::new(MediaKind::Photo, gradient)
    }

    pub fn video(duration_seconds: u32, gradient: Gradient) -> Self {
        Self::new(MediaKind::Video { duration_seconds }, gradient)
    }

    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_label() {
        assert_eq!(MediaKind::Photo.duration_label(), None);
        assert_eq!(
            MediaKind::Video { duration_seconds: 15 }.duration_label(),
            Some("0:15".to_string())
        );
        assert_eq!(
            MediaKind::Video { duration_seconds: 130 }.duration_label(),
            Some("2:10".to_string())
        );
        assert_eq!(
            MediaKind::Video { duration_seconds: 0 }.duration_label(),
            Some("0:00".to_string())
        );
    }

    #[test]
    fn test_hex_six_digits() {
        let color = Rgba::from_hex("667eea");
        assert_eq!(
            color,
            Rgba {
                r: 0x66,
                g: 0x7e,
                b: 0xea,
                a: 255
            }
        );
        // Leading hash is stripped
        assert_eq!(Rgba::from_hex("#667eea"), color);
    }

    #[test]
    fn test_hex_short_and_argb() {
        assert_eq!(
            Rgba::from_hex("f80"),
            Rgba {
                r: 0xff,
                g: 0x88,
                b: 0x00,
                a: 255
            }
        );
        assert_eq!(
            Rgba::from_hex("80ff0000"),
            Rgba {
                r: 0xff,
                g: 0,
                b: 0,
                a: 0x80
            }
        );
    }

    #[test]
    fn test_hex_stops_at_first_non_hex_digit() {
        // Only "12" is read, but the length still selects the short form
        assert_eq!(
            Rgba::from_hex("12g"),
            Rgba {
                r: 0,
                g: 17,
                b: 34,
                a: 255
            }
        );
    }

    #[test]
    fn test_hex_inner_separator_not_stripped() {
        assert_eq!(Rgba::from_hex("66-7eea"), Rgba::BLACK);
        assert_eq!(
            Rgba::from_hex("  #667eea;"),
            Rgba {
                r: 0x66,
                g: 0x7e,
                b: 0xea,
                a: 255
            }
        );
    }

    #[test]
    fn test_hex_invalid_length() {
        assert_eq!(Rgba::from_hex("12345"), Rgba::BLACK);
        assert_eq!(Rgba::from_hex(""), Rgba::BLACK);
    }

    #[test]
    fn test_ids_are_unique() {
        let gradient = Gradient::from_hex("000", "fff");
        let a = MediaEntry::photo(gradient);
        let b = MediaEntry::photo(gradient);
        assert_ne!(a.id, b.id);
        assert!(!a.is_video());
        assert!(MediaEntry::video(10, gradient).is_video());
    }
}
