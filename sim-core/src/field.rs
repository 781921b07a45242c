//! Vector-field definitions for the supported chaotic systems.
//!
//! Each system is one variant of [`FieldKind`], carrying its own
//! parameter struct. [`FieldKind::derivative`] is a pure function of
//! the state and the current parameters; it never validates, clamps,
//! or fails. [`VectorField`] wraps a [`FieldKind`] with the
//! display-side metadata a viewer needs (color, spatial scale, chart
//! ranges, parameter edit bounds).

use crate::types::Rgb;
use glam::DVec3;

/// Inclusive display range of one coordinate axis.
///
/// Consumed by chart displays for fixed y-axis scaling; the
/// simulation itself never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Edit bounds for a single parameter.
///
/// Consumed by parameter-editing UIs only. [`FieldKind::derivative`]
/// and [`FieldKind::set_param`] never enforce them; out-of-range
/// values are accepted and simply integrated.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    /// Key accepted by [`FieldKind::set_param`].
    pub name: &'static str,
    /// Symbol shown next to the edit box (e.g. `σ` for `sigma`).
    pub symbol: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RosslerParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for RosslerParams {
    fn default() -> Self {
        Self {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AizawaParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for AizawaParams {
    fn default() -> Self {
        Self {
            a: 0.95,
            b: 0.7,
            c: 0.6,
            d: 3.5,
            e: 0.25,
            f: 0.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThomasParams {
    pub b: f64,
}

impl Default for ThomasParams {
    fn default() -> Self {
        Self { b: 0.208186 }
    }
}

const LORENZ_SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "sigma",
        symbol: "σ",
        min: 0.0,
        max: 30.0,
        step: 0.1,
    },
    ParamSpec {
        name: "rho",
        symbol: "ρ",
        min: 0.0,
        max: 100.0,
        step: 0.1,
    },
    ParamSpec {
        name: "beta",
        symbol: "β",
        min: 0.0,
        max: 10.0,
        step: 0.01,
    },
];

const ROSSLER_SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "a",
        symbol: "a",
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
    ParamSpec {
        name: "b",
        symbol: "b",
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
    ParamSpec {
        name: "c",
        symbol: "c",
        min: 0.0,
        max: 20.0,
        step: 0.1,
    },
];

const AIZAWA_SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "a",
        symbol: "a",
        min: 0.0,
        max: 2.0,
        step: 0.01,
    },
    ParamSpec {
        name: "b",
        symbol: "b",
        min: 0.0,
        max: 2.0,
        step: 0.01,
    },
    ParamSpec {
        name: "c",
        symbol: "c",
        min: 0.0,
        max: 2.0,
        step: 0.01,
    },
    ParamSpec {
        name: "d",
        symbol: "d",
        min: 0.0,
        max: 10.0,
        step: 0.1,
    },
    ParamSpec {
        name: "e",
        symbol: "e",
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
    ParamSpec {
        name: "f",
        symbol: "f",
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
];

const THOMAS_SPECS: &[ParamSpec] = &[ParamSpec {
    name: "b",
    symbol: "b",
    min: 0.1,
    max: 0.5,
    step: 0.001,
}];

/// A parameterized chaotic system, tagged by variant.
///
/// Dispatching through an enum keeps the registry pluggable without
/// dynamic dispatch or closures capturing mutable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Lorenz(LorenzParams),
    Rossler(RosslerParams),
    Aizawa(AizawaParams),
    Thomas(ThomasParams),
}

impl FieldKind {
    /// Evaluates the instantaneous rate of change at `p`.
    ///
    /// Pure in `p` and the variant's current parameters; total over the
    /// real domain. Parameters that drive the system to blow up produce
    /// non-finite components, which are returned unmodified.
    pub fn derivative(&self, p: DVec3) -> DVec3 {
        let (x, y, z) = (p.x, p.y, p.z);
        match self {
            FieldKind::Lorenz(q) => DVec3::new(
                q.sigma * (y - x),
                x * (q.rho - z) - y,
                x * y - q.beta * z,
            ),
            FieldKind::Rossler(q) => DVec3::new(-y - z, x + q.a * y, q.b + z * (x - q.c)),
            FieldKind::Aizawa(q) => DVec3::new(
                (z - q.b) * x - q.d * y,
                q.d * x + (z - q.b) * y,
                q.c + q.a * z - z.powi(3) / 3.0 - (x * x + y * y) * (1.0 + q.e * z)
                    + q.f * z * x.powi(3),
            ),
            FieldKind::Thomas(q) => {
                DVec3::new(y.sin() - q.b * x, z.sin() - q.b * y, x.sin() - q.b * z)
            }
        }
    }

    /// Current parameter values in declaration order.
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match self {
            FieldKind::Lorenz(q) => vec![("sigma", q.sigma), ("rho", q.rho), ("beta", q.beta)],
            FieldKind::Rossler(q) => vec![("a", q.a), ("b", q.b), ("c", q.c)],
            FieldKind::Aizawa(q) => vec![
                ("a", q.a),
                ("b", q.b),
                ("c", q.c),
                ("d", q.d),
                ("e", q.e),
                ("f", q.f),
            ],
            FieldKind::Thomas(q) => vec![("b", q.b)],
        }
    }

    /// Sets the named parameter to `value`, without bounds checking.
    ///
    /// Returns `false` if the variant has no parameter of that name,
    /// in which case nothing changes.
    pub fn set_param(&mut self, name: &str, value: f64) -> bool {
        match self {
            FieldKind::Lorenz(q) => match name {
                "sigma" => q.sigma = value,
                "rho" => q.rho = value,
                "beta" => q.beta = value,
                _ => return false,
            },
            FieldKind::Rossler(q) => match name {
                "a" => q.a = value,
                "b" => q.b = value,
                "c" => q.c = value,
                _ => return false,
            },
            FieldKind::Aizawa(q) => match name {
                "a" => q.a = value,
                "b" => q.b = value,
                "c" => q.c = value,
                "d" => q.d = value,
                "e" => q.e = value,
                "f" => q.f = value,
                _ => return false,
            },
            FieldKind::Thomas(q) => match name {
                "b" => q.b = value,
                _ => return false,
            },
        }
        true
    }

    /// Edit bounds for this variant's parameters, in declaration order.
    pub fn param_specs(&self) -> &'static [ParamSpec] {
        match self {
            FieldKind::Lorenz(_) => LORENZ_SPECS,
            FieldKind::Rossler(_) => ROSSLER_SPECS,
            FieldKind::Aizawa(_) => AIZAWA_SPECS,
            FieldKind::Thomas(_) => THOMAS_SPECS,
        }
    }
}

/// A catalog entry: one chaotic system plus its display metadata.
#[derive(Clone, Debug)]
pub struct VectorField {
    /// Registry key.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    pub description: &'static str,
    pub color: Rgb,
    /// Cosmetic multiplier applied to positions before spatial display.
    /// Never fed back into the integration.
    pub scale: f64,
    /// Fixed chart ranges for the x, y and z histories.
    pub graph_ranges: [AxisRange; 3],
    pub kind: FieldKind,
}

impl VectorField {
    pub fn lorenz() -> Self {
        Self {
            id: "lorenz",
            name: "LORENZ SYSTEM",
            description: "The Lorenz system is a system of ordinary differential equations \
                first studied by Edward Lorenz. It is notable for having chaotic solutions \
                for certain parameter values and initial conditions.",
            color: [0x00, 0xb8, 0x94],
            scale: 1.0,
            graph_ranges: [
                AxisRange {
                    min: -25.0,
                    max: 25.0,
                },
                AxisRange {
                    min: -35.0,
                    max: 35.0,
                },
                AxisRange {
                    min: 0.0,
                    max: 60.0,
                },
            ],
            kind: FieldKind::Lorenz(LorenzParams::default()),
        }
    }

    pub fn rossler() -> Self {
        Self {
            id: "rossler",
            name: "ROSSLER SYSTEM",
            description: "The Rossler system is a system of three non-linear ordinary \
                differential equations originally studied by Otto Rossler. These \
                differential equations define a continuous-time dynamical system that \
                exhibits chaotic dynamics.",
            color: [0x74, 0xb9, 0xff],
            scale: 5.0,
            graph_ranges: [
                AxisRange {
                    min: -15.0,
                    max: 15.0,
                },
                AxisRange {
                    min: -15.0,
                    max: 15.0,
                },
                AxisRange {
                    min: 0.0,
                    max: 25.0,
                },
            ],
            kind: FieldKind::Rossler(RosslerParams::default()),
        }
    }

    pub fn aizawa() -> Self {
        Self {
            id: "aizawa",
            name: "AIZAWA SYSTEM",
            description: "The Aizawa system is a strange attractor with a distinctive \
                torus-like shape. It was discovered by Yoji Aizawa and features complex \
                dynamics with multiple loops and spirals.",
            color: [0xe1, 0x70, 0x55],
            scale: 15.0,
            graph_ranges: [
                AxisRange {
                    min: -2.0,
                    max: 2.0,
                },
                AxisRange {
                    min: -2.0,
                    max: 2.0,
                },
                AxisRange {
                    min: -0.5,
                    max: 3.0,
                },
            ],
            kind: FieldKind::Aizawa(AizawaParams::default()),
        }
    }

    pub fn thomas() -> Self {
        Self {
            id: "thomas",
            name: "THOMAS SYSTEM",
            description: "The Thomas attractor is a 3D strange attractor first described \
                by René Thomas. It produces elegant spiral patterns and is defined by a \
                single parameter that controls the damping in the system.",
            color: [0x6c, 0x5c, 0xe7],
            scale: 8.0,
            graph_ranges: [
                AxisRange {
                    min: -3.0,
                    max: 3.0,
                },
                AxisRange {
                    min: -3.0,
                    max: 3.0,
                },
                AxisRange {
                    min: -3.0,
                    max: 3.0,
                },
            ],
            kind: FieldKind::Thomas(ThomasParams::default()),
        }
    }
}
