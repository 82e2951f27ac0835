/// 帧率限制器
///
/// 喂入 `requestAnimationFrame` 时间戳（毫秒），决定这一帧是否需要绘制。
/// `max_fps` 为 0 时不限制。
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    last: Option<f64>,
    frames: u64,
}

impl FrameClock {
    pub fn new(max_fps: u32) -> Self {
        Self {
            interval_ms: if max_fps == 0 {
                0.0
            } else {
                1000.0 / max_fps as f64
            },
            last: None,
            frames: 0,
        }
    }

    pub fn uncapped() -> Self {
        Self::new(0)
    }

    /// 两帧之间的最小间隔（毫秒），不限制时为 0
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// 需要绘制时返回距上一帧的间隔
    pub fn advance(&mut self, now: f64) -> Option<f64> {
        let Some(last) = self.last else {
            self.last = Some(now);
            self.frames += 1;
            return Some(0.0);
        };

        let elapsed = now - last;
        if elapsed < 0.0 {
            // 时间戳回退，重新对齐
            self.last = Some(now);
            return None;
        }
        if self.interval_ms > 0.0 && elapsed < self.interval_ms {
            return None;
        }

        // 保留余数，避免帧率慢慢漂低
        let drift = if self.interval_ms > 0.0 {
            elapsed % self.interval_ms
        } else {
            0.0
        };
        self.last = Some(now - drift);
        self.frames += 1;
        Some(elapsed)
    }

    pub fn should_render(&mut self, now: f64) -> bool {
        self.advance(now).is_some()
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_at_30_fps() {
        let mut clock = FrameClock::new(30);
        // 60Hz 的 rAF
        let rendered = (0..60)
            .map(|i| i as f64 * (1000.0 / 60.0))
            .filter(|t| clock.should_render(*t))
            .count();
        assert!((29..=31).contains(&rendered), "rendered {}", rendered);
    }

    #[test]
    fn test_uncapped_renders_every_frame() {
        let mut clock = FrameClock::uncapped();
        assert!((0..10).all(|i| clock.should_render(i as f64)));
        assert_eq!(clock.frames(), 10);
    }

    #[test]
    fn test_backwards_timestamp_skipped() {
        let mut clock = FrameClock::new(60);
        assert!(clock.should_render(1000.0));
        assert!(!clock.should_render(900.0));
        assert!(clock.should_render(920.0));
    }
}
