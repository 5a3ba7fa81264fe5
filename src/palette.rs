//! Color palette matching the GymTrack Pro app theme.

use image::Rgb;

pub const BACKGROUND: Rgb<u8> = Rgb([15, 23, 42]); // #0F172A
pub const CARD: Rgb<u8> = Rgb([30, 41, 59]); // #1E293B
pub const PRIMARY: Rgb<u8> = Rgb([99, 102, 241]); // #6366F1 indigo
pub const PRIMARY_LIGHT: Rgb<u8> = Rgb([129, 140, 248]); // #818CF8
pub const ACCENT: Rgb<u8> = Rgb([34, 211, 238]); // #22D3EE cyan
pub const WHITE: Rgb<u8> = Rgb([248, 250, 252]); // #F8FAFC

/// Linear blend between two colors, truncating each channel.
///
/// `ratio` 0.0 yields `from` and 1.0 yields `to`; callers are responsible
/// for keeping `ratio` within [0, 1].
pub fn interpolate(from: Rgb<u8>, to: Rgb<u8>, ratio: f64) -> Rgb<u8> {
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let a = f64::from(from.0[i]);
        let b = f64::from(to.0[i]);
        *channel = (a + (b - a) * ratio) as u8;
    }
    Rgb(channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(PRIMARY, ACCENT, 0.0), PRIMARY);
        assert_eq!(interpolate(PRIMARY, ACCENT, 1.0), ACCENT);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mid = interpolate(Rgb([0, 100, 200]), Rgb([100, 0, 250]), 0.5);
        assert_eq!(mid, Rgb([50, 50, 225]));
    }

    #[test]
    fn test_interpolate_channels_stay_bounded() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let from = Rgb([rng.gen(), rng.gen(), rng.gen()]);
            let to = Rgb([rng.gen(), rng.gen(), rng.gen()]);
            let ratio: f64 = rng.gen();
            let out = interpolate(from, to, ratio);
            for i in 0..3 {
                let lo = from.0[i].min(to.0[i]);
                let hi = from.0[i].max(to.0[i]);
                assert!(
                    out.0[i] >= lo && out.0[i] <= hi,
                    "channel {} of {:?} outside [{}, {}] for ratio {}",
                    i,
                    out,
                    lo,
                    hi,
                    ratio
                );
            }
        }
    }
}
