use strum::IntoEnumIterator;

/// Expands `value` into one flag per variant of `E`, in declaration order.
pub fn one_hot<E>(value: E) -> impl Iterator<Item = f64>
where
    E: IntoEnumIterator + PartialEq + Copy,
{
    E::iter().map(move |category| if category == value { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CloudCover, Location, Season, UvIndexBin};

    fn assert_single_flag<E>(value: E, position: usize, width: usize)
    where
        E: IntoEnumIterator + PartialEq + Copy,
    {
        let flags: Vec<f64> = one_hot(value).collect();
        assert_eq!(flags.len(), width);
        assert_eq!(flags.iter().filter(|&&f| f == 1.0).count(), 1);
        assert_eq!(flags[position], 1.0);
    }

    #[test]
    fn every_cloud_cover_sets_exactly_one_flag() {
        for (i, cover) in CloudCover::iter().enumerate() {
            assert_single_flag(cover, i, 4);
        }
        assert_single_flag(CloudCover::PartlyCloudy, 3, 4);
    }

    #[test]
    fn every_season_sets_exactly_one_flag() {
        for (i, season) in Season::iter().enumerate() {
            assert_single_flag(season, i, 4);
        }
        assert_single_flag(Season::Winter, 3, 4);
    }

    #[test]
    fn every_location_sets_exactly_one_flag() {
        for (i, location) in Location::iter().enumerate() {
            assert_single_flag(location, i, 3);
        }
    }

    #[test]
    fn every_uv_bin_sets_exactly_one_flag() {
        for (i, bin) in UvIndexBin::iter().enumerate() {
            assert_single_flag(bin, i, 5);
        }
        assert_single_flag(UvIndexBin::from_value(10.0), 4, 5);
    }
}
