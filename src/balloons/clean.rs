use crate::balloons::types::BalloonFix;

/// Drop fixes with non-finite or out-of-range values. Implausible fixes
/// are filtered silently; the feed regularly carries a few.
pub fn clean_fixes(fixes: Vec<BalloonFix>) -> Vec<BalloonFix> {
    fixes.into_iter().filter(is_plausible).collect()
}

fn is_plausible(fix: &BalloonFix) -> bool {
    fix.latitude.is_finite()
        && fix.longitude.is_finite()
        && fix.altitude_km.is_finite()
        && (-90.0..=90.0).contains(&fix.latitude)
        && (-180.0..=180.0).contains(&fix.longitude)
        && fix.altitude_km >= 0.0
}
