//! Small interactive widgets: expandable tabs, glare card, liquid-glass button.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 可展开标签栏，最多一个选中项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableTabs {
    titles: Vec<String>,
    selected: Option<usize>,
}

impl ExpandableTabs {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// 再次选择已选中的项会收起；越界的索引被忽略
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.titles.len() {
            self.selected = if self.selected == Some(index) {
                None
            } else {
                Some(index)
            };
        }
        self.selected
    }

    pub fn click_outside(&mut self) {
        self.selected = None;
    }
}

/// 光泽卡片的指针状态，数值均为百分比
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlareState {
    pub glare_x: f64,
    pub glare_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub opacity: f64,
}

impl Default for GlareState {
    fn default() -> Self {
        Self {
            glare_x: 50.0,
            glare_y: 50.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            opacity: 0.0,
        }
    }
}

const MAX_ROTATION: f64 = 10.0;

impl GlareState {
    /// 指针相对卡片左上角的位置
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let px = (x / width * 100.0).clamp(0.0, 100.0);
        let py = (y / height * 100.0).clamp(0.0, 100.0);
        Self {
            glare_x: px,
            glare_y: py,
            rotate_x: -(py - 50.0) / 50.0 * MAX_ROTATION,
            rotate_y: (px - 50.0) / 50.0 * MAX_ROTATION,
            opacity: 1.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "--glare-x:{:.1}%;--glare-y:{:.1}%;--glare-opacity:{:.2};transform:perspective(700px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.glare_x, self.glare_y, self.opacity, self.rotate_x, self.rotate_y
        )
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    Icon,
}

/// 液态玻璃按钮的 class 列表
pub fn liquid_button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant_class = match variant {
        ButtonVariant::Default => "liquid-btn--default",
        ButtonVariant::Outline => "liquid-btn--outline",
        ButtonVariant::Ghost => "liquid-btn--ghost",
    };
    let size_class = match size {
        ButtonSize::Sm => "liquid-btn--sm",
        ButtonSize::Default => "liquid-btn--md",
        ButtonSize::Lg => "liquid-btn--lg",
        ButtonSize::Icon => "liquid-btn--icon",
    };
    format!("liquid-btn {} {}", variant_class, size_class)
}
