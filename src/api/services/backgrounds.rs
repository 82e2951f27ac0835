//! Decorative background frames
//!
//! The page script refreshes these SVG frames at the configured frame rate.
//! Each request rebuilds the effect from its query and advances it to `t`
//! milliseconds, so frames are stateless on the server.

use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::trace;

use super::AppState;
use crate::api::types::validation_response;
use crate::effects::squares::MIN_SPEED;
use crate::effects::{Direction, Noise2D, Squares, SquaresConfig, Waves, WavesConfig};
use crate::validation::FieldErrors;

const DEFAULT_WIDTH: f64 = 1440.0;
const DEFAULT_HEIGHT: f64 = 900.0;
const MAX_WIDTH: f64 = 3840.0;
const MAX_HEIGHT: f64 = 2160.0;
/// 60fps 下的一帧
const FRAME_MS: f64 = 1000.0 / 60.0;
/// 指针滑入的帧数与距离，让弹簧获得速度
const POINTER_FRAMES: usize = 8;
const POINTER_TRAIL: f64 = 60.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackgroundQuery {
    /// 动画时间（毫秒）
    pub t: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub direction: Option<String>,
    pub speed: Option<f64>,
}

impl BackgroundQuery {
    fn finite(value: Option<f64>) -> Option<f64> {
        value.filter(|v| v.is_finite())
    }

    pub fn time(&self) -> f64 {
        Self::finite(self.t).unwrap_or(0.0).max(0.0)
    }

    /// 宽高限制在 `[1, MAX]`
    pub fn size(&self) -> (f64, f64) {
        (
            Self::finite(self.w)
                .unwrap_or(DEFAULT_WIDTH)
                .clamp(1.0, MAX_WIDTH),
            Self::finite(self.h)
                .unwrap_or(DEFAULT_HEIGHT)
                .clamp(1.0, MAX_HEIGHT),
        )
    }

    /// 每帧位移限制在 `[MIN_SPEED, square_size]`
    pub fn speed(&self, square_size: f64) -> Option<f64> {
        Self::finite(self.speed).map(|v| v.clamp(MIN_SPEED, square_size.max(MIN_SPEED)))
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        Self::finite(self.x).zip(Self::finite(self.y))
    }
}

pub struct BackgroundService;

impl BackgroundService {
    pub async fn waves(
        query: web::Query<BackgroundQuery>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let (width, height) = query.size();
        let time = query.time();
        trace!("Waves frame {}x{} at t={}", width, height, time);

        let noise = Noise2D::with_seed(state.noise_seed);
        let mut waves = Waves::new(WavesConfig::default(), width, height, noise);

        if let Some((x, y)) = query.pointer() {
            waves.pointer_move(x - POINTER_TRAIL, y);
            for i in 0..POINTER_FRAMES {
                let progress = (i + 1) as f64 / POINTER_FRAMES as f64;
                waves.pointer_move(x - POINTER_TRAIL * (1.0 - progress), y);
                waves.step((time - FRAME_MS * (POINTER_FRAMES - i) as f64).max(0.0));
            }
        }
        waves.step(time);

        svg_response(waves.to_svg())
    }

    pub async fn squares(query: web::Query<BackgroundQuery>) -> impl Responder {
        let direction = match query.direction.as_deref() {
            None | Some("") => Direction::default(),
            Some(raw) => match raw.parse::<Direction>() {
                Ok(direction) => direction,
                Err(e) => {
                    let mut errors = FieldErrors::new();
                    errors.add("direction", e);
                    return validation_response(&errors);
                }
            },
        };

        let mut config = SquaresConfig {
            direction,
            ..Default::default()
        };
        if let Some(speed) = query.speed(config.square_size) {
            config.speed = speed;
        }

        let (width, height) = query.size();
        let mut squares = Squares::new(config, width, height);
        squares.step_n((query.time() / FRAME_MS).floor() as u64);
        if let Some((x, y)) = query.pointer() {
            squares.pointer_move(x, y);
        }

        svg_response(squares.to_svg())
    }
}

fn svg_response(svg: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .append_header(("Cache-Control", "no-store"))
        .body(svg)
}
