//! Waves background
//!
//! A grid of vertical lines. Every point drifts with 2-D noise over time and
//! is pushed around by a spring-damped cursor influence.

use std::fmt::Write;

use serde::Deserialize;

use super::noise::Noise2D;
use crate::utils::escape_html;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WavesConfig {
    pub line_color: String,
    pub background: String,
    pub wave_speed_x: f64,
    pub wave_speed_y: f64,
    pub wave_amp_x: f64,
    pub wave_amp_y: f64,
    pub x_gap: f64,
    pub y_gap: f64,
    pub friction: f64,
    pub tension: f64,
    pub max_cursor_move: f64,
}

impl Default for WavesConfig {
    fn default() -> Self {
        Self {
            line_color: "rgba(148, 163, 184, 0.35)".to_string(),
            background: "transparent".to_string(),
            wave_speed_x: 0.0125,
            wave_speed_y: 0.005,
            wave_amp_x: 32.0,
            wave_amp_y: 16.0,
            x_gap: 10.0,
            y_gap: 32.0,
            friction: 0.925,
            tension: 0.005,
            max_cursor_move: 100.0,
        }
    }
}

/// 额外绘制的边距，保证位移后边缘不露底
const OVERSCAN_X: f64 = 200.0;
const OVERSCAN_Y: f64 = 30.0;
/// 光标影响半径下限
const MIN_CURSOR_RADIUS: f64 = 175.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Spring {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
    wave_x: f64,
    wave_y: f64,
    cursor: Spring,
}

/// 平滑后的指针状态
#[derive(Debug, Clone, Copy, Default)]
struct Pointer {
    x: f64,
    y: f64,
    last_x: f64,
    last_y: f64,
    smooth_x: f64,
    smooth_y: f64,
    velocity: f64,
    angle: f64,
    active: bool,
}

#[derive(Debug, Clone)]
pub struct Waves {
    config: WavesConfig,
    width: f64,
    height: f64,
    lines: Vec<Vec<Point>>,
    noise: Noise2D,
    pointer: Pointer,
}

impl Waves {
    pub fn new(config: WavesConfig, width: f64, height: f64, noise: Noise2D) -> Self {
        let mut waves = Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            lines: Vec::new(),
            noise,
            pointer: Pointer::default(),
        };
        waves.rebuild();
        waves
    }

    /// 视口变化后重建网格
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.lines.clear();
        if self.width == 0.0
            || self.height == 0.0
            || self.config.x_gap <= 0.0
            || self.config.y_gap <= 0.0
        {
            return;
        }

        let total_lines = ((self.width + OVERSCAN_X) / self.config.x_gap).ceil() as usize;
        let total_points = ((self.height + OVERSCAN_Y) / self.config.y_gap).ceil() as usize;
        let x_start = (self.width - self.config.x_gap * total_lines as f64) / 2.0;
        let y_start = (self.height - self.config.y_gap * total_points as f64) / 2.0;

        for i in 0..=total_lines {
            let line = (0..=total_points)
                .map(|j| Point {
                    x: x_start + self.config.x_gap * i as f64,
                    y: y_start + self.config.y_gap * j as f64,
                    wave_x: 0.0,
                    wave_y: 0.0,
                    cursor: Spring::default(),
                })
                .collect();
            self.lines.push(line);
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let pointer = &mut self.pointer;
        pointer.x = x;
        pointer.y = y;
        if !pointer.active {
            pointer.smooth_x = x;
            pointer.smooth_y = y;
            pointer.last_x = x;
            pointer.last_y = y;
            pointer.active = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.active = false;
        self.pointer.velocity = 0.0;
    }

    /// 推进到时间 `time`（毫秒）
    pub fn step(&mut self, time: f64) {
        self.update_pointer();

        let config = &self.config;
        let pointer = self.pointer;
        let noise = &self.noise;

        for point in self.lines.iter_mut().flatten() {
            let movement = noise.get(
                (point.x + time * config.wave_speed_x) * 0.002,
                (point.y + time * config.wave_speed_y) * 0.0015,
            ) * 12.0;
            point.wave_x = movement.cos() * config.wave_amp_x;
            point.wave_y = movement.sin() * config.wave_amp_y;

            let spring = &mut point.cursor;
            if pointer.active {
                let dx = point.x - pointer.smooth_x;
                let dy = point.y - pointer.smooth_y;
                let distance = dx.hypot(dy);
                let radius = pointer.velocity.max(MIN_CURSOR_RADIUS);
                if distance < radius {
                    let strength = 1.0 - distance / radius;
                    let force = (distance * 0.001).cos() * strength;
                    spring.vx += pointer.angle.cos() * force * radius * pointer.velocity * 0.00065;
                    spring.vy += pointer.angle.sin() * force * radius * pointer.velocity * 0.00065;
                }
            }

            spring.vx += -spring.x * config.tension;
            spring.vy += -spring.y * config.tension;
            spring.vx *= config.friction;
            spring.vy *= config.friction;
            let limit = config.max_cursor_move;
            spring.x = (spring.x + spring.vx * 2.0).clamp(-limit, limit);
            spring.y = (spring.y + spring.vy * 2.0).clamp(-limit, limit);
        }
    }

    fn update_pointer(&mut self) {
        let pointer = &mut self.pointer;
        if !pointer.active {
            return;
        }
        pointer.smooth_x += (pointer.x - pointer.smooth_x) * 0.1;
        pointer.smooth_y += (pointer.y - pointer.smooth_y) * 0.1;

        let dx = pointer.x - pointer.last_x;
        let dy = pointer.y - pointer.last_y;
        let distance = dx.hypot(dy);
        pointer.velocity = (pointer.velocity + (distance - pointer.velocity) * 0.1).min(100.0);
        if distance > 0.0 {
            pointer.angle = dy.atan2(dx);
        }
        pointer.last_x = pointer.x;
        pointer.last_y = pointer.y;
    }

    /// 最大的光标位移，用于观察弹簧是否已经静止
    pub fn max_cursor_offset(&self) -> f64 {
        self.lines
            .iter()
            .flatten()
            .map(|p| p.cursor.x.abs().max(p.cursor.y.abs()))
            .fold(0.0, f64::max)
    }

    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="none">"#,
            w = self.width,
            h = self.height
        );
        let _ = write!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_html(&self.config.background)
        );
        let _ = write!(
            svg,
            r#"<g fill="none" stroke="{}" stroke-width="1">"#,
            escape_html(&self.config.line_color)
        );
        for line in &self.lines {
            let mut d = String::new();
            for (i, p) in line.iter().enumerate() {
                // 第一个点不受光标影响，线条从顶部稳定出发
                let (x, y) = if i == 0 {
                    (p.x + p.wave_x, p.y + p.wave_y)
                } else {
                    (
                        p.x + p.wave_x + p.cursor.x,
                        p.y + p.wave_y + p.cursor.y,
                    )
                };
                let _ = write!(d, "{}{:.2} {:.2}", if i == 0 { "M" } else { " L" }, x, y);
            }
            let _ = write!(svg, r#"<path d="{}"/>"#, d);
        }
        svg.push_str("</g></svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waves(width: f64, height: f64) -> Waves {
        Waves::new(WavesConfig::default(), width, height, Noise2D::with_seed(3))
    }

    #[test]
    fn test_grid_covers_viewport() {
        let waves = waves(800.0, 600.0);
        // (800 + 200) / 10 = 100 条，加上闭区间端点
        assert_eq!(waves.line_count(), 101);
        let svg = waves.to_svg();
        assert_eq!(svg.matches("<path").count(), 101);
    }

    #[test]
    fn test_zero_viewport_renders_nothing() {
        let mut waves = waves(0.0, 600.0);
        waves.step(16.0);
        assert_eq!(waves.line_count(), 0);
        assert!(!waves.to_svg().contains("<path"));
    }

    #[test]
    fn test_cursor_pushes_then_settles() {
        let mut waves = waves(400.0, 400.0);
        waves.pointer_move(100.0, 200.0);
        for i in 0..10 {
            waves.pointer_move(100.0 + i as f64 * 20.0, 200.0);
            waves.step(i as f64 * 16.0);
        }
        let pushed = waves.max_cursor_offset();
        assert!(pushed > 0.0);
        assert!(pushed <= 100.0);

        waves.pointer_leave();
        for i in 10..2000 {
            waves.step(i as f64 * 16.0);
        }
        assert!(waves.max_cursor_offset() < pushed);
    }

    #[test]
    fn test_frames_change_over_time() {
        let mut waves = waves(200.0, 200.0);
        waves.step(0.0);
        let first = waves.to_svg();
        waves.step(50_000.0);
        assert_ne!(first, waves.to_svg());
    }
}
