/// 缓动函数，输入输出均在 `[0, 1]`
pub type Easing = fn(f64) -> f64;

/// 默认的指数缓出：`min(1, 1.001 - 2^(-10t))`
pub fn expo_out(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
