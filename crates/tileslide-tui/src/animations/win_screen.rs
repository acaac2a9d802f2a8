use rand::prelude::SliceRandom;
use rand::Rng;

use super::particles::{random_confetti_color, Particle, CONFETTI_CHARS};

const WIN_MESSAGES: [&str; 8] = [
    "PUZZLE SOLVED!",
    "BRILLIANT!",
    "PICTURE PERFECT!",
    "CONGRATULATIONS!",
    "WELL DONE!",
    "INCREDIBLE!",
    "FLAWLESS!",
    "CHAMPION!",
];

/// How much of a particle's velocity survives each frame. Matches the web
/// original's confetti decay.
const DECAY: f32 = 0.85;
const GRAVITY: f32 = 0.08;
const BURST_SIZE: usize = 180;

/// The animated win screen: one big confetti burst from the upper middle of
/// the terminal, a rainbow banner, and, once the confetti has decayed, the
/// move-count stats overlay.
pub struct WinScreen {
    particles: Vec<Particle>,
    rainbow_offset: f32,
    message_index: usize,
    burst_fired: bool,
    pub width: u16,
    pub height: u16,
}

impl WinScreen {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            particles: Vec::new(),
            rainbow_offset: 0.0,
            message_index: rng.gen_range(0..WIN_MESSAGES.len()),
            burst_fired: false,
            width: 80,
            height: 24,
        }
    }

    pub fn reset(&mut self) {
        let mut rng = rand::thread_rng();
        self.particles.clear();
        self.rainbow_offset = 0.0;
        self.message_index = rng.gen_range(0..WIN_MESSAGES.len());
        self.burst_fired = false;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        self.rainbow_offset += 0.05;

        if !self.burst_fired {
            self.fire_burst();
            self.burst_fired = true;
        }

        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.vx *= DECAY;
            p.vy = p.vy * DECAY + GRAVITY;
            p.lifetime -= 0.016;
            p.lifetime > 0.0 && p.y < self.height as f32 + 2.0
        });
    }

    /// One 360-degree burst from the upper-center, like the original's
    /// confetti cannon at origin (0.5, 0.25).
    fn fire_burst(&mut self) {
        let mut rng = rand::thread_rng();
        let cx = self.width as f32 * 0.5;
        let cy = self.height as f32 * 0.25;

        for _ in 0..BURST_SIZE {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(0.8..3.0);
            self.particles.push(Particle {
                x: cx,
                y: cy,
                // Terminal cells are taller than wide; stretch x to
                // keep the burst visually round.
                vx: angle.cos() * speed * 2.0,
                vy: angle.sin() * speed,
                char: *CONFETTI_CHARS.choose(&mut rng).unwrap(),
                color: random_confetti_color(),
                lifetime: rng.gen_range(2.0..5.0),
            });
        }
    }

    /// Whether the burst has played out, which is when the stats overlay
    /// takes over (the original showed stats on confetti decay).
    pub fn is_decayed(&self) -> bool {
        self.burst_fired && self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn current_message(&self) -> &str {
        WIN_MESSAGES[self.message_index]
    }

    pub fn rainbow_offset(&self) -> f32 {
        self.rainbow_offset
    }
}

impl Default for WinScreen {
    fn default() -> Self {
        Self::new()
    }
}
