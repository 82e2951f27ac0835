//! Visual effects
//!
//! Frame-driven state machines for the page's motion: smooth scrolling,
//! pointer parallax, frame-rate capping and the two decorative backgrounds.
//! Nothing here touches a clock on its own; callers feed timestamps in.
//! The server drives them to render frames, curves and the frame interval;
//! `assets/site.js` replays the same rules live in the browser.

pub mod easing;
pub mod frame;
pub mod noise;
pub mod parallax;
pub mod scroll;
pub mod squares;
pub mod waves;

pub use easing::{Easing, expo_out};
pub use frame::FrameClock;
pub use noise::Noise2D;
pub use parallax::{LAYERS, Listeners, Parallax, ParallaxLayer, ParallaxValues, Viewport};
pub use scroll::{ScrollOptions, ScrollTarget, ScrollTargets, SmoothScroller};
pub use squares::{Direction, Squares, SquaresConfig};
pub use waves::{Waves, WavesConfig};
