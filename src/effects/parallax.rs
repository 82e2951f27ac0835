use serde::Serialize;

/// 视口尺寸
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ParallaxValues {
    /// `[-1, 1]`，指针相对视口中心
    pub offset_x: f64,
    pub offset_y: f64,
    pub scroll_y: f64,
}

/// 已挂载的事件监听器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listeners {
    pub pointer_move: bool,
    pub scroll: bool,
    pub passive: bool,
}

/// 背景层：指针位移强度与滚动系数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub depth: f64,
    pub scroll_factor: f64,
}

pub const LAYERS: [ParallaxLayer; 3] = [
    ParallaxLayer {
        depth: 15.0,
        scroll_factor: 0.05,
    },
    ParallaxLayer {
        depth: 25.0,
        scroll_factor: 0.08,
    },
    ParallaxLayer {
        depth: 35.0,
        scroll_factor: 0.12,
    },
];

#[derive(Debug)]
pub struct Parallax {
    viewport: Viewport,
    values: ParallaxValues,
    listeners: Option<Listeners>,
}

impl Parallax {
    /// 挂载时注册监听器并读取一次当前滚动位置
    pub fn mount(viewport: Viewport, scroll_y: f64) -> Self {
        Self {
            viewport,
            values: ParallaxValues {
                scroll_y,
                ..Default::default()
            },
            listeners: Some(Listeners {
                pointer_move: true,
                scroll: true,
                passive: true,
            }),
        }
    }

    pub fn values(&self) -> ParallaxValues {
        self.values
    }

    pub fn offset_x(&self) -> f64 {
        self.values.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.values.offset_y
    }

    pub fn scroll_y(&self) -> f64 {
        self.values.scroll_y
    }

    pub fn listeners(&self) -> Option<Listeners> {
        self.listeners
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        if self.listeners.is_none() || self.viewport.is_empty() {
            return;
        }
        self.values.offset_x = normalize(client_x, self.viewport.width);
        self.values.offset_y = normalize(client_y, self.viewport.height);
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if self.listeners.is_some() {
            self.values.scroll_y = scroll_y;
        }
    }

    /// 卸载并移除监听器，返回被移除的监听器
    pub fn unmount(&mut self) -> Option<Listeners> {
        self.listeners.take()
    }

    /// 某一层的 CSS transform
    pub fn transform(&self, layer: ParallaxLayer) -> String {
        let x = self.values.offset_x * -layer.depth;
        let y = self.values.offset_y * -layer.depth + self.values.scroll_y * layer.scroll_factor;
        format!("translate3d({:.2}px, {:.2}px, 0)", x, y)
    }
}

fn normalize(client: f64, extent: f64) -> f64 {
    ((client / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
}
