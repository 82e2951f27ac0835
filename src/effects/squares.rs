use std::fmt::Write;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use crate::utils::escape_html;

/// 网格漂移方向
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Left,
    Up,
    Down,
    Diagonal,
}

impl Direction {
    /// 每步网格偏移的方向
    fn delta(self) -> (f64, f64) {
        match self {
            Direction::Right => (-1.0, 0.0),
            Direction::Left => (1.0, 0.0),
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Diagonal => (-1.0, -1.0),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "diagonal" => Ok(Self::Diagonal),
            _ => Err(format!(
                "Invalid direction '{}'. Valid options: right, left, up, down, diagonal",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SquaresConfig {
    pub direction: Direction,
    pub speed: f64,
    pub square_size: f64,
    pub border_color: String,
    pub hover_fill_color: String,
    pub background: String,
}

impl Default for SquaresConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            speed: 1.0,
            square_size: 40.0,
            border_color: "#999".to_string(),
            hover_fill_color: "#222".to_string(),
            background: "#060606".to_string(),
        }
    }
}

pub const MIN_SPEED: f64 = 0.1;

fn wrap(value: f64, size: f64) -> f64 {
    let wrapped = value.rem_euclid(size);
    if wrapped >= size { 0.0 } else { wrapped }
}

#[derive(Debug, Clone)]
pub struct Squares {
    config: SquaresConfig,
    width: f64,
    height: f64,
    offset: (f64, f64),
    hovered: Option<(i64, i64)>,
}

impl Squares {
    pub fn new(config: SquaresConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            offset: (0.0, 0.0),
            hovered: None,
        }
    }

    fn size(&self) -> f64 {
        self.config.square_size.max(1.0)
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn hovered(&self) -> Option<(i64, i64)> {
        self.hovered
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// 推进一帧，偏移始终保持在 `[0, square_size)`
    pub fn step(&mut self) {
        self.step_n(1);
    }

    /// 速度限制在 `[MIN_SPEED, square_size]`，位移先对格子大小取模再累加
    pub fn step_n(&mut self, frames: u64) {
        let size = self.size();
        let speed = self.speed();
        let (dx, dy) = self.config.direction.delta();
        let distance = (speed * frames as f64).rem_euclid(size);
        self.offset = (
            wrap(self.offset.0 + dx * distance, size),
            wrap(self.offset.1 + dy * distance, size),
        );
    }

    fn speed(&self) -> f64 {
        let speed = self.config.speed;
        if speed.is_finite() {
            speed.clamp(MIN_SPEED, self.size())
        } else {
            MIN_SPEED
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if x < 0.0 || y < 0.0 || x > self.width || y > self.height {
            self.hovered = None;
            return;
        }
        let size = self.size();
        self.hovered = Some((
            ((x + self.offset.0) / size).floor() as i64,
            ((y + self.offset.1) / size).floor() as i64,
        ));
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    pub fn to_svg(&self) -> String {
        let size = self.size();
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let background = escape_html(&self.config.background);
        let _ = write!(
            svg,
            r#"<defs><radialGradient id="vignette" cx="50%" cy="50%" r="70%"><stop offset="0%" stop-color="{bg}" stop-opacity="0"/><stop offset="100%" stop-color="{bg}" stop-opacity="1"/></radialGradient></defs>"#,
            bg = background
        );
        let _ = write!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            background
        );

        if self.width > 0.0 && self.height > 0.0 {
            let _ = write!(
                svg,
                r#"<g stroke="{}" stroke-width="0.5">"#,
                escape_html(&self.config.border_color)
            );
            let hover_fill = escape_html(&self.config.hover_fill_color);
            let columns = (self.width / size).ceil() as i64 + 1;
            let rows = (self.height / size).ceil() as i64 + 1;
            for col in 0..columns {
                for row in 0..rows {
                    let x = col as f64 * size - self.offset.0;
                    let y = row as f64 * size - self.offset.1;
                    let fill = if self.hovered == Some((col, row)) {
                        hover_fill.as_str()
                    } else {
                        "none"
                    };
                    let _ = write!(
                        svg,
                        r#"<rect x="{:.2}" y="{:.2}" width="{s}" height="{s}" fill="{}"/>"#,
                        x,
                        y,
                        fill,
                        s = size
                    );
                }
            }
            svg.push_str("</g>");
            svg.push_str(r#"<rect width="100%" height="100%" fill="url(#vignette)"/>"#);
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn squares(direction: Direction, speed: f64) -> Squares {
        Squares::new(
            SquaresConfig {
                direction,
                speed,
                ..Default::default()
            },
            400.0,
            200.0,
        )
    }

    #[test]
    fn test_offset_wraps_for_every_direction() {
        for direction in Direction::iter() {
            let mut grid = squares(direction, 3.0);
            for _ in 0..500 {
                grid.step();
                let (x, y) = grid.offset();
                assert!((0.0..40.0).contains(&x), "{:?} x={}", direction, x);
                assert!((0.0..40.0).contains(&y), "{:?} y={}", direction, y);
            }
        }
    }

    #[test]
    fn test_direction_signs() {
        let mut right = squares(Direction::Right, 1.0);
        right.step();
        assert_eq!(right.offset(), (39.0, 0.0));

        let mut up = squares(Direction::Up, 1.0);
        up.step();
        assert_eq!(up.offset(), (0.0, 1.0));

        let mut diagonal = squares(Direction::Diagonal, 2.0);
        diagonal.step_n(3);
        assert_eq!(diagonal.offset(), (34.0, 34.0));
    }

    #[test]
    fn test_minimum_speed() {
        let mut grid = squares(Direction::Left, 0.0);
        grid.step();
        assert!(grid.offset().0 > 0.0);
    }

    #[test]
    fn test_hovered_cell() {
        let mut grid = squares(Direction::Right, 1.0);
        grid.pointer_move(85.0, 10.0);
        assert_eq!(grid.hovered(), Some((2, 0)));
        assert!(grid.to_svg().contains(r##"fill="#222""##));

        grid.pointer_move(-5.0, 10.0);
        assert_eq!(grid.hovered(), None);
        grid.pointer_move(10.0, 10.0);
        grid.pointer_leave();
        assert_eq!(grid.hovered(), None);
    }

    #[test]
    fn test_svg_grid_and_vignette() {
        let svg = squares(Direction::Right, 1.0).to_svg();
        // 11 列 x 6 行
        assert_eq!(svg.matches(r#"fill="none""#).count(), 66);
        assert!(svg.contains("url(#vignette)"));

        let empty = Squares::new(SquaresConfig::default(), 0.0, 0.0).to_svg();
        assert!(!empty.contains("url(#vignette)"));
    }

    #[test]
    fn test_huge_speed_stays_inside_cell() {
        let mut grid = Squares::new(
            SquaresConfig {
                speed: 1e308,
                ..Default::default()
            },
            100.0,
            100.0,
        );
        grid.step_n(6000);
        let (x, y) = grid.offset();
        assert!((0.0..40.0).contains(&x), "x={}", x);
        assert!((0.0..40.0).contains(&y), "y={}", y);
        assert!(!grid.to_svg().contains("NaN"));

        grid.step_n(u64::MAX);
        assert!(grid.offset().0.is_finite());
    }
}
