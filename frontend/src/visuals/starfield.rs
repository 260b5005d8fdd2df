use std::f64::consts::PI;

pub const STAR_COUNT: usize = 400;
const BASE_SPEED: f64 = 0.05;
/// Frames between two shooting stars.
pub const SHOOTING_STAR_INTERVAL: u32 = 300;
const SHOOTING_STAR_LIFETIME: f64 = 60.0;
const TRAIL_FRAMES: f64 = 10.0;

/// Uniform numbers in `[0, 1)`. The canvas component feeds `Math.random`,
/// tests feed fixed sequences.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Depth in `[0.5, 2.5)`. Nearer stars drift faster and draw larger.
    pub z: f64,
    pub size: f64,
    pub base_alpha: f64,
    pub alpha: f64,
    twinkle_offset: f64,
}

impl Star {
    fn spawn(width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
        let base_alpha = rng.next_f64() * 0.7 + 0.3;
        Self {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            z: rng.next_f64() * 2.0 + 0.5,
            size: rng.next_f64() * 1.5,
            base_alpha,
            alpha: base_alpha,
            twinkle_offset: rng.next_f64() * PI * 2.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size * self.z * 0.6
    }

    pub fn has_glow(&self) -> bool {
        self.radius() > 1.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    /// 1.0 at spawn, fades to 0.0.
    pub life: f64,
}

impl ShootingStar {
    fn spawn(width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
        let speed = 8.0 + rng.next_f64() * 4.0;
        // between 20 and 40 degrees below the horizon, heading left
        let angle = (20.0 + rng.next_f64() * 20.0).to_radians();
        Self {
            x: width * (0.3 + rng.next_f64() * 0.7),
            y: rng.next_f64() * height * 0.4,
            vx: -speed * angle.cos(),
            vy: speed * angle.sin(),
            life: 1.0,
        }
    }

    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= 1.0 / SHOOTING_STAR_LIFETIME;
    }

    fn is_alive(&self, width: f64, height: f64) -> bool {
        self.life > 0.0 && self.x >= 0.0 && self.x <= width && self.y <= height
    }

    /// End point of the fading trail behind the head.
    pub fn tail(&self) -> (f64, f64) {
        (self.x - self.vx * TRAIL_FRAMES, self.y - self.vy * TRAIL_FRAMES)
    }
}

/// Particle state for the background canvas, advanced one frame at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub width: f64,
    pub height: f64,
    pub stars: Vec<Star>,
    pub shooting_stars: Vec<ShootingStar>,
    frame: u32,
}

impl Starfield {
    pub fn new(width: f64, height: f64, count: usize, rng: &mut impl RandomSource) -> Self {
        let stars = (0..count).map(|_| Star::spawn(width, height, rng)).collect();
        Self {
            width,
            height,
            stars,
            shooting_stars: Vec::new(),
            frame: 0,
        }
    }

    /// Reseeds every star for the new canvas size.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
        let count = self.stars.len();
        *self = Self::new(width, height, count, rng);
    }

    /// Moves every particle by one frame. `time_ms` drives twinkling.
    pub fn step(&mut self, time_ms: f64, rng: &mut impl RandomSource) {
        for star in self.stars.iter_mut() {
            star.y -= BASE_SPEED * star.z;
            if star.y < 0.0 {
                star.y = self.height;
                star.x = rng.next_f64() * self.width;
            }
            let twinkle = (time_ms * 0.001 + star.twinkle_offset).sin() * 0.2;
            star.alpha = (star.base_alpha + twinkle).clamp(0.0, 1.0);
        }

        self.frame = self.frame.wrapping_add(1);
        if self.frame % SHOOTING_STAR_INTERVAL == 0 {
            self.shooting_stars
                .push(ShootingStar::spawn(self.width, self.height, rng));
        }

        let (width, height) = (self.width, self.height);
        for shooting in self.shooting_stars.iter_mut() {
            shooting.advance();
        }
        self.shooting_stars.retain(|s| s.is_alive(width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn stars_are_spawned_inside_the_canvas() {
        let mut rng = constant(0.5);
        let field = Starfield::new(800.0, 600.0, 50, &mut rng);
        assert_eq!(field.stars.len(), 50);
        let star = &field.stars[0];
        assert_eq!((star.x, star.y), (400.0, 300.0));
        assert_eq!(star.z, 1.5);
        assert!(star.radius() > 0.0);
    }

    #[test]
    fn nearer_stars_drift_faster_and_wrap_to_the_bottom() {
        let mut rng = constant(0.5);
        let mut field = Starfield::new(100.0, 100.0, 2, &mut rng);
        field.stars[0].z = 0.5;
        field.stars[1].z = 2.5;
        field.step(0.0, &mut rng);
        let far_moved = 50.0 - field.stars[0].y;
        let near_moved = 50.0 - field.stars[1].y;
        assert!(near_moved > far_moved);

        field.stars[0].y = 0.01;
        field.step(0.0, &mut rng);
        assert_eq!(field.stars[0].y, 100.0);
        assert_eq!(field.stars[0].x, 50.0);
    }

    #[test]
    fn alpha_stays_in_range() {
        let mut rng = constant(0.0);
        let mut field = Starfield::new(10.0, 10.0, 3, &mut rng);
        for t in 0..200 {
            field.step(f64::from(t) * 250.0, &mut rng);
            assert!(field.stars.iter().all(|s| (0.0..=1.0).contains(&s.alpha)));
        }
    }

    #[test]
    fn shooting_star_appears_on_interval_and_burns_out() {
        let mut rng = constant(0.5);
        let mut field = Starfield::new(1_000.0, 1_000.0, 0, &mut rng);
        for _ in 0..SHOOTING_STAR_INTERVAL - 1 {
            field.step(0.0, &mut rng);
        }
        assert!(field.shooting_stars.is_empty());

        field.step(0.0, &mut rng);
        assert_eq!(field.shooting_stars.len(), 1);
        let (tail_x, tail_y) = field.shooting_stars[0].tail();
        assert!(tail_x > field.shooting_stars[0].x);
        assert!(tail_y < field.shooting_stars[0].y);

        for _ in 0..SHOOTING_STAR_LIFETIME as u32 {
            field.step(0.0, &mut rng);
        }
        assert!(field.shooting_stars.is_empty());
    }

    #[test]
    fn resize_keeps_star_count() {
        let mut rng = constant(0.25);
        let mut field = Starfield::new(100.0, 100.0, 12, &mut rng);
        field.resize(400.0, 200.0, &mut rng);
        assert_eq!(field.stars.len(), 12);
        assert_eq!(field.width, 400.0);
        assert_eq!(field.stars[0].x, 100.0);
    }
}
