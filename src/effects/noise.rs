/// 2D 梯度噪声（Perlin），输出约在 `[-1, 1]`
#[derive(Debug, Clone)]
pub struct Noise2D {
    perm: [u8; 512],
}

const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

impl Noise2D {
    /// 固定种子，输出可复现
    pub fn with_seed(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut state = seed;
        for i in (1..table.len()).rev() {
            let j = (split_mix(&mut state) % (i as u64 + 1)) as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    pub fn random() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    pub fn get(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let dx = x - xf;
        let dy = y - yf;

        let n00 = self.dot(xi, yi, dx, dy);
        let n01 = self.dot(xi, yi + 1, dx, dy - 1.0);
        let n10 = self.dot(xi + 1, yi, dx - 1.0, dy);
        let n11 = self.dot(xi + 1, yi + 1, dx - 1.0, dy - 1.0);

        let u = fade(dx);
        let v = fade(dy);
        lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
    }

    fn dot(&self, xi: usize, yi: usize, dx: f64, dy: f64) -> f64 {
        let hash = self.perm[xi + self.perm[yi] as usize];
        let (gx, gy) = GRADIENTS[(hash & 7) as usize];
        gx * dx + gy * dy
    }
}

fn split_mix(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
