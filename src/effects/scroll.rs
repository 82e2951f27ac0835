//! Smooth scrolling
//!
//! A `SmoothScroller` owns the document scroll position while an animation
//! runs. Each `requestAnimationFrame` timestamp is fed to [`SmoothScroller::tick`],
//! which returns the position to apply. A new request always replaces the
//! in-flight animation and starts from wherever the previous one stopped.

use std::collections::HashMap;

use super::easing::{Easing, expo_out};

pub const DEFAULT_OFFSET: f64 = 80.0;
pub const DEFAULT_DURATION: f64 = 1.2;

/// selector -> 元素距文档顶部的距离
pub trait ScrollTargets {
    fn top_of(&self, selector: &str) -> Option<f64>;
}

impl ScrollTargets for HashMap<String, f64> {
    fn top_of(&self, selector: &str) -> Option<f64> {
        self.get(selector).copied()
    }
}

impl ScrollTargets for [(&str, f64)] {
    fn top_of(&self, selector: &str) -> Option<f64> {
        self.iter().find(|(s, _)| *s == selector).map(|(_, top)| *top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget<'a> {
    Selector(&'a str),
    Position(f64),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollOptions {
    /// 固定头部的高度，默认 80px；0 同样视为未设置
    pub offset: Option<f64>,
    /// 秒，默认 1.2
    pub duration: Option<f64>,
    pub easing: Option<Easing>,
}

impl ScrollOptions {
    fn header_offset(&self) -> f64 {
        self.offset.filter(|o| *o != 0.0).unwrap_or(DEFAULT_OFFSET)
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

/// 每帧回调的注册句柄，`destroy` 时释放
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

#[derive(Debug)]
pub struct SmoothScroller {
    position: f64,
    limit: f64,
    animation: Option<Animation>,
    stopped: bool,
    frame: Option<FrameHandle>,
}

impl SmoothScroller {
    /// 挂载，`limit` 为可滚动的最大距离
    pub fn mount(limit: f64, handle: u64) -> Self {
        Self {
            position: 0.0,
            limit: limit.max(0.0),
            animation: None,
            stopped: false,
            frame: Some(FrameHandle(handle)),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn frame_handle(&self) -> Option<FrameHandle> {
        self.frame
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.position = self.position.min(self.limit);
    }

    fn accepts_input(&self) -> bool {
        self.frame.is_some() && !self.stopped
    }

    /// 用户原生滚动，会打断动画
    pub fn on_native_scroll(&mut self, y: f64) {
        if self.accepts_input() {
            self.animation = None;
            self.position = y.clamp(0.0, self.limit);
        }
    }

    /// 滚动到目标；未知的 selector 静默忽略
    pub fn scroll_to<T>(&mut self, target: ScrollTarget<'_>, options: ScrollOptions, targets: &T)
    where
        T: ScrollTargets + ?Sized,
    {
        if !self.accepts_input() {
            return;
        }

        let destination = match target {
            ScrollTarget::Selector(selector) => match targets.top_of(selector) {
                Some(top) => top - options.header_offset(),
                None => return,
            },
            ScrollTarget::Position(y) => y,
        };

        self.animation = Some(Animation {
            from: self.position,
            to: destination.clamp(0.0, self.limit),
            duration_ms: options.duration.unwrap_or(DEFAULT_DURATION).max(0.0) * 1000.0,
            easing: options.easing.unwrap_or(expo_out),
            started_at: None,
        });
    }

    pub fn scroll_to_top(&mut self, duration: Option<f64>) {
        let options = ScrollOptions {
            duration,
            ..Default::default()
        };
        let no_targets: &[(&str, f64)] = &[];
        self.scroll_to(ScrollTarget::Position(0.0), options, no_targets);
    }

    /// 推进一帧，`now` 为 rAF 时间戳（毫秒）
    pub fn tick(&mut self, now: f64) -> f64 {
        if self.stopped {
            return self.position;
        }
        let Some(animation) = self.animation.as_mut() else {
            return self.position;
        };

        let started_at = *animation.started_at.get_or_insert(now);
        let progress = if animation.duration_ms <= 0.0 {
            1.0
        } else {
            ((now - started_at) / animation.duration_ms).clamp(0.0, 1.0)
        };

        if progress >= 1.0 {
            self.position = animation.to;
            self.animation = None;
        } else {
            let eased = (animation.easing)(progress);
            self.position = animation.from + (animation.to - animation.from) * eased;
        }
        self.position
    }

    /// 冻结当前位置，之后的请求被忽略
    pub fn stop(&mut self) {
        self.stopped = true;
        self.animation = None;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// 释放每帧回调，返回被释放的句柄
    pub fn destroy(&mut self) -> Option<FrameHandle> {
        self.animation = None;
        self.frame.take()
    }
}
