use rand::Rng;
use std::time::Duration;

/// Shortest time a glyph takes to fall the full height
pub const MIN_FALL_SECS: f64 = 5.0;
/// Longest time a glyph takes to fall the full height
pub const MAX_FALL_SECS: f64 = 15.0;
/// Fraction of the fall spent fading in (and, mirrored, fading out)
const FADE_SPAN: f64 = 0.1;

/// One falling background character. Positions are fractions of the
/// drawable area, so the rain survives terminal resizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Horizontal position in [0, 1)
    pub x: f64,
    /// Vertical progress through the fall in [0, 1)
    pub phase: f64,
    /// Seconds for a full fall
    pub period: f64,
    pub ch: char,
}

impl Glyph {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random::<f64>(),
            phase: rng.random::<f64>(),
            period: rng.random_range(MIN_FALL_SECS..=MAX_FALL_SECS),
            ch: random_char(rng),
        }
    }

    /// Brightness in [0, 1]: ramps up over the first tenth of the fall and
    /// down over the last tenth.
    pub fn intensity(&self) -> f64 {
        if self.phase < FADE_SPAN {
            self.phase / FADE_SPAN
        } else if self.phase > 1.0 - FADE_SPAN {
            (1.0 - self.phase) / FADE_SPAN
        } else {
            1.0
        }
    }

    /// Advance the fall. Returns true when the glyph wrapped back to the top.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let next = self.phase + dt.as_secs_f64() / self.period;
        self.phase = next.rem_euclid(1.0);
        next >= 1.0
    }
}

/// Printable ASCII, `!` through `~`
fn random_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.random_range(33u8..=126))
}

/// The decorative falling-glyph backdrop
#[derive(Debug, Clone, Default)]
pub struct GlyphRain {
    glyphs: Vec<Glyph>,
}

impl GlyphRain {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            glyphs: (0..count).map(|_| Glyph::random(rng)).collect(),
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tick_with_rng(dt, &mut rand::rng());
    }

    /// Advance every glyph; wrapped glyphs reappear with a new character
    /// in a new column.
    pub fn tick_with_rng<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R) {
        for glyph in &mut self.glyphs {
            if glyph.advance(dt) {
                glyph.ch = random_char(rng);
                glyph.x = rng.random::<f64>();
            }
        }
    }
}
