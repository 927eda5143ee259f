//! Forehead, brows and temples.

use mesh_region::{CoarseRegion, RegionSelector};
use mesh_types::Axis;
use tracing::debug;

use super::Context;
use crate::zone::ClinicalZone;
use crate::zone_map::ZoneMap;

pub(super) fn subdivide(ctx: &Context<'_>, zones: &mut ZoneMap) {
    let forehead = ctx.coarse(CoarseRegion::Forehead);
    if forehead.is_empty() {
        return;
    }
    let params = &ctx.params.forehead;
    let x = ctx.samples(forehead, Axis::X);
    let y = ctx.samples(forehead, Axis::Y);

    zones.set_region(ClinicalZone::Forehead, forehead.clone());

    // Thirds of the central x band.
    let lo = x.percentile(params.band_low_pct);
    let hi = x.percentile(params.band_high_pct);
    let third = (hi - lo) / 3.0;
    let left = RegionSelector::above(Axis::X, hi - third);
    let right = RegionSelector::below(Axis::X, lo + third);
    let center = left.clone().or(right.clone()).not();
    zones.set_region(
        ClinicalZone::ForeheadLeft,
        ctx.select(&left, forehead, ClinicalZone::ForeheadLeft),
    );
    zones.set_region(
        ClinicalZone::ForeheadRight,
        ctx.select(&right, forehead, ClinicalZone::ForeheadRight),
    );
    zones.set_region(
        ClinicalZone::ForeheadCenter,
        ctx.select(&center, forehead, ClinicalZone::ForeheadCenter),
    );

    let base = y.percentile(params.brow_base_pct);
    let brow_top = base + (y.median() - base) * params.brow_blend;
    let brows =
        RegionSelector::at_or_below(Axis::Y, brow_top).select(ctx.positions, forehead, "brows");
    let (brow_left, brow_right) =
        ctx.split_sides(&brows, (ClinicalZone::BrowLeft, ClinicalZone::BrowRight));

    let reach = (hi - lo) * params.inner_brow_reach;
    let inner_left = RegionSelector::below(Axis::X, ctx.midline + reach);
    let inner_right = RegionSelector::above(Axis::X, ctx.midline - reach);
    zones.set_region(
        ClinicalZone::BrowInnerLeft,
        ctx.select(&inner_left, &brow_left, ClinicalZone::BrowInnerLeft),
    );
    zones.set_region(
        ClinicalZone::BrowInnerRight,
        ctx.select(&inner_right, &brow_right, ClinicalZone::BrowInnerRight),
    );
    zones.set_region(ClinicalZone::BrowLeft, brow_left);
    zones.set_region(ClinicalZone::BrowRight, brow_right);

    let band = RegionSelector::between(
        Axis::Y,
        y.percentile(params.temple_low_pct),
        y.percentile(params.temple_high_pct),
    );
    let temple_left = band
        .clone()
        .and(RegionSelector::above(Axis::X, x.percentile(params.temple_outer_pct)));
    let temple_right = band.and(RegionSelector::below(
        Axis::X,
        x.percentile(100.0 - params.temple_outer_pct),
    ));
    zones.set_region(
        ClinicalZone::TempleLeft,
        ctx.select(&temple_left, forehead, ClinicalZone::TempleLeft),
    );
    zones.set_region(
        ClinicalZone::TempleRight,
        ctx.select(&temple_right, forehead, ClinicalZone::TempleRight),
    );

    debug!(
        vertices = forehead.vertex_count(),
        brow_top,
        brows = brows.vertex_count(),
        "forehead subdivided"
    );
}
