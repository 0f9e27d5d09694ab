use serde::{Deserialize, Serialize};

/// A single decorative point on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    /// Heading in radians.
    pub direction: f64,
    pub alpha: u8,
}

impl Particle {
    /// Visual representation of the particle; depends only on its state.
    pub fn sprite(&self) -> Sprite {
        Sprite {
            x: self.x,
            y: self.y,
            w: self.size,
            h: self.size,
            rgba: [255, 255, 255, self.alpha],
        }
    }
}

/// An ellipse inscribed in the rectangle `(x, y, w, h)`, filled with `rgba`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub rgba: [u8; 4],
}

/// Every sprite of the field for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
}
