//! 2D radial/depth profile of the proposed well
//!
//! Three legs:
//! 1. Vertical, from the wellhead down to the kick-off point
//! 2. Build-up, one-degree straight increments approximating an arc
//! 3. Slanted, straight to the well bottom at the final dip

use tracing::{debug, warn};

use crate::config::defaults::SAMPLES_PER_LEG;
use crate::error::GeometryError;
use crate::numeric::{cosd, count_below, linspace, sind};
use crate::types::{CasingSplit, DrillingParameters, Profile};

/// One sampled leg: radial offset, vertical depth and along-hole length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Leg {
    pub r: Vec<f64>,
    pub z: Vec<f64>,
    pub along_hole: Vec<f64>,
}

impl Leg {
    fn last_r(&self) -> f64 {
        self.r.last().copied().unwrap_or(0.0)
    }

    fn last_z(&self) -> f64 {
        self.z.last().copied().unwrap_or(0.0)
    }
}

/// Build the `(r, z)` profile and locate the casing split.
///
/// Parameters are validated first; nothing is sampled for invalid input.
pub fn build_profile(params: &DrillingParameters) -> Result<Profile, GeometryError> {
    params.validate()?;

    let z_surface = params.surface_elevation;
    let kop = params.kop();
    let shifted_cd = params.casing_depth - z_surface;

    let z1 = linspace(-z_surface, kop - z_surface, SAMPLES_PER_LEG);
    let r1 = vec![0.0; z1.len()];

    if !params.is_directional() {
        let index = clamp_to_path(count_below(&z1, shifted_cd), z1.len());
        debug!(samples = z1.len(), casing_split = index, "Built vertical profile");
        return Ok(Profile {
            r: r1,
            z: z1,
            casing_split: CasingSplit::Resolved { index },
        });
    }

    let buildup = buildup_leg(kop - z_surface, params.dip, params.build_up_rate);
    let slanted = slanted_leg(buildup.last_r(), buildup.last_z(), params);

    let total = z1.len() + buildup.z.len() + slanted.z.len();
    let casing_split = resolve_casing_split(params, &z1, &buildup, &slanted, total);

    debug!(
        vertical = z1.len(),
        buildup = buildup.z.len(),
        slanted = slanted.z.len(),
        slanted_length_m = params.slanted_length(),
        casing_split = casing_split.index(),
        "Built directional profile"
    );

    let mut r = r1;
    r.extend_from_slice(&buildup.r);
    r.extend_from_slice(&slanted.r);
    let mut z = z1;
    z.extend_from_slice(&buildup.z);
    z.extend_from_slice(&slanted.z);

    Ok(Profile { r, z, casing_split })
}

/// Build-up leg of `dip - 1` samples.
///
/// Sample `i` advances one degree of inclination over `1 / bu` of hole:
/// `r[i] = r[i-1] + sin(i)/bu`, `z[i] = z[i-1] + cos(i)/bu`. Both `z` and
/// the along-hole length start at `start_z`; `r` starts at zero.
pub(crate) fn buildup_leg(start_z: f64, dip: u32, build_up_rate: f64) -> Leg {
    let n = dip.saturating_sub(1) as usize;
    let mut r = vec![0.0; n];
    let mut z = vec![0.0; n];
    let mut along_hole = vec![0.0; n];
    if n == 0 {
        return Leg { r, z, along_hole };
    }

    z[0] = start_z;
    along_hole[0] = start_z;
    for i in 1..n {
        let deg = i as f64;
        r[i] = r[i - 1] + sind(deg) / build_up_rate;
        z[i] = z[i - 1] + cosd(deg) / build_up_rate;
        along_hole[i] = along_hole[i - 1] + 1.0 / build_up_rate;
    }

    Leg { r, z, along_hole }
}

/// Straight slanted leg to the well bottom.
///
/// The remaining length is `L2 = mmd - kop - dip/bu`. `r` runs from the
/// end of build-up to `L2·sin(dip)`, and `z` follows the straight line from
/// the end of build-up down by `L2·cos(dip)`.
fn slanted_leg(start_r: f64, start_z: f64, params: &DrillingParameters) -> Leg {
    let dip = f64::from(params.dip);
    let l2 = params.slanted_length();

    let r = linspace(start_r, l2 * sind(dip), SAMPLES_PER_LEG);
    let z: Vec<f64> = linspace(0.0, l2 * cosd(dip), SAMPLES_PER_LEG)
        .into_iter()
        .map(|v| start_z + v)
        .collect();
    let along_hole = z.iter().map(|v| v / cosd(dip)).collect();

    Leg { r, z, along_hole }
}

/// Locate the sample where the casing ends.
///
/// `casing_depth` is compared against the kick-off point and the end of the
/// build-up leg to pick the leg, then the samples of that leg lying above
/// `casing_depth - Z` are counted, offset by the legs before it.
fn resolve_casing_split(
    params: &DrillingParameters,
    vertical_z: &[f64],
    buildup: &Leg,
    slanted: &Leg,
    total: usize,
) -> CasingSplit {
    let cd = params.casing_depth;
    let kop = params.kop();
    let shifted_cd = cd - params.surface_elevation;
    let vertical_len = vertical_z.len();
    let buildup_end = buildup
        .along_hole
        .last()
        .copied()
        .unwrap_or(kop - params.surface_elevation);

    let index = if cd <= kop {
        count_below(vertical_z, shifted_cd)
    } else if kop < cd && cd < buildup_end {
        count_below(&buildup.along_hole, shifted_cd) + vertical_len
    } else if buildup_end < cd {
        buildup.along_hole.len() + count_below(&slanted.along_hole, shifted_cd) + vertical_len
    } else {
        let fallback = clamp_to_path(vertical_len + buildup.along_hole.len(), total);
        warn!(
            casing_depth_m = cd,
            kick_off_point_m = kop,
            buildup_end_m = buildup_end,
            fallback,
            "Casing depth matches no trajectory leg, splitting at the start of the slanted leg"
        );
        return CasingSplit::Unresolved { fallback };
    };

    CasingSplit::Resolved {
        index: clamp_to_path(index, total),
    }
}

/// Keep an index inside `0 ..= len - 1`.
fn clamp_to_path(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
