//! # quantfix
//!
//! Deterministic fixed-point option pricing library.
//!
//! Provides the full pipeline: 18-decimal fixed-point arithmetic →
//! Black-Scholes-Merton pricing and Greeks → EWMA volatility estimation →
//! volatility surface adjustments → invariant and precision diagnostics.
//! Every result is bit-for-bit reproducible across platforms: no `f64`
//! enters any computation path.
//!
//! ## Architecture
//!
//! - **`fixed`** — Signed 18-decimal fixed point on an `i128` mantissa
//!   (256-bit mul/div intermediates, `exp`/`ln`/`log2`/`sqrt`)
//! - **`normal`** — Standard normal pdf and Abramowitz-Stegun cdf
//! - **`pricing`** — BSM call/put premiums, d₁/d₂, parallel strike grids
//! - **`greeks`** — Delta, gamma, vega, theta from the shared intermediates
//! - **`ewma`** — Exponentially weighted volatility estimation
//! - **`surface`** — Moneyness skew and utilization premium adjustments
//! - **`invariant`** — Self-diagnostic checks over a pricing evaluation
//! - **`precision`** — Error measurement against trusted references
//!
//! ## Design
//!
//! - **Deterministic.** All arithmetic is scaled-integer with truncation
//!   toward zero. The same inputs produce the same mantissas everywhere.
//! - **No panics on validated inputs.** Every entry point validates its
//!   parameters and returns [`Result`]. Arithmetic operators panic only
//!   outside the documented operating range, like built-in integer
//!   overflow; `checked_*` variants are provided.
//! - **Stateless.** Every function is pure: no caches, no globals, no
//!   interior mutability. Values are `Copy` snapshots.
//! - **Thread-safe.** Everything is `Send + Sync`; batch pricing fans out
//!   over rayon with no shared state.
//! - **Serializable.** All value types implement Serde
//!   `Serialize` / `Deserialize`; [`Fixed`] serializes as its raw mantissa.

pub mod error;
pub mod ewma;
pub mod fixed;
pub mod greeks;
pub mod invariant;
pub mod normal;
pub mod precision;
pub mod pricing;
pub mod surface;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{QuantFixError, Result};
#[doc(inline)]
pub use fixed::Fixed;
#[doc(inline)]
pub use types::{
    Greeks, InvariantReport, OptionParameters, PrecisionReport, PricingResult, VolSurfacePoint,
};
