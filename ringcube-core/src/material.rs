/// Surface materials for rendering

/// An RGB color decoded from a packed 0xRRGGBB value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// CSS hex notation, e.g. `#736aff`
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.to_hex())
    }
}

/// A solid-color material rendered as a wireframe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireframeMaterial {
    color: Color,
    wireframe: bool,
}

impl WireframeMaterial {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            wireframe: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0x736AFF);
        assert_eq!(color.r, 0x73);
        assert_eq!(color.g, 0x6a);
        assert_eq!(color.b, 0xff);
    }

    #[test]
    fn test_color_round_trip() {
        assert_eq!(Color::from_hex(0x736AFF).to_hex(), 0x736AFF);
    }

    #[test]
    fn test_color_css_notation() {
        assert_eq!(Color::from_hex(0x736AFF).to_css(), "#736aff");
        assert_eq!(Color::from_hex(0x000012).to_css(), "#000012");
    }

    #[test]
    fn test_material_is_wireframe() {
        let material = WireframeMaterial::new(Color::from_hex(0x736AFF));
        assert!(material.wireframe());
        assert_eq!(material.color().to_hex(), 0x736AFF);
    }
}
