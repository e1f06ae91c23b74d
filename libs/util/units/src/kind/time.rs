// This file is part of Quanta.
//
// Quanta is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Quanta is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Quanta.  If not, see <http://www.gnu.org/licenses/>.

/// Seconds from the Unix epoch to 2000-01-01T12:00:00 UTC.
const J2000_EPOCH_SECONDS: f64 = 946_728_000.0;

define_kind! {
    /// Elapsed time.
    Duration, DurationUnit: relative, "s", standard = DurationUnit::SECOND;
    SECOND: "second", "s", SiBase => root();
    NANOSECOND: "nanosecond", "ns", SiBase => scaled(1.0e-9);
    MICROSECOND: "microsecond", "μs", SiBase => scaled(1.0e-6);
    MILLISECOND: "millisecond", "ms", SiBase => scaled(1.0e-3);
    MINUTE: "minute", "min", SiAccepted => scaled_from(DurationUnit::SECOND, 60.0);
    HOUR: "hour", "h", SiAccepted => scaled_from(DurationUnit::MINUTE, 60.0);
    DAY: "day", "day", SiAccepted => scaled_from(DurationUnit::HOUR, 24.0);
    WEEK: "week", "wk", Other => scaled_from(DurationUnit::DAY, 7.0);
}

define_kind! {
    /// A point in time. The base units count from the Unix epoch, the J2000
    /// units from noon UTC on 2000-01-01.
    Time, TimeUnit: absolute(Duration), "s", standard = TimeUnit::BASE_SECOND;
    BASE_SECOND: "second", "s", SiBase => absolute(1.0, 0.0, DurationUnit::SECOND);
    BASE_MILLISECOND: "millisecond", "ms", SiBase =>
        absolute(1.0e-3, 0.0, DurationUnit::MILLISECOND);
    BASE_MINUTE: "minute", "min", SiAccepted => absolute(60.0, 0.0, DurationUnit::MINUTE);
    BASE_HOUR: "hour", "h", SiAccepted => absolute(3600.0, 0.0, DurationUnit::HOUR);
    BASE_DAY: "day", "day", SiAccepted => absolute(86_400.0, 0.0, DurationUnit::DAY);
    J2000_SECOND: "second since J2000", "s(Y2000)", Other =>
        absolute(1.0, J2000_EPOCH_SECONDS, DurationUnit::SECOND);
    J2000_HOUR: "hour since J2000", "h(Y2000)", Other =>
        absolute(3600.0, J2000_EPOCH_SECONDS / 3600.0, DurationUnit::HOUR);
    J2000_DAY: "day since J2000", "day(Y2000)", Other =>
        absolute(86_400.0, J2000_EPOCH_SECONDS / 86_400.0, DurationUnit::DAY);
}

define_kind! {
    /// Occurrences per unit time.
    Frequency, FrequencyUnit: relative, "1/s", standard = FrequencyUnit::HERTZ;
    HERTZ: "hertz", "Hz", SiDerived => duration(DurationUnit::SECOND);
    KILOHERTZ: "kilohertz", "kHz", SiDerived => scaled_from(FrequencyUnit::HERTZ, 1.0e3);
    MEGAHERTZ: "megahertz", "MHz", SiDerived => scaled_from(FrequencyUnit::HERTZ, 1.0e6);
    GIGAHERTZ: "gigahertz", "GHz", SiDerived => scaled_from(FrequencyUnit::HERTZ, 1.0e9);
    PER_MILLISECOND: "per millisecond", "/ms", SiDerived => duration(DurationUnit::MILLISECOND);
    PER_MINUTE: "per minute", "/min", SiAccepted => duration(DurationUnit::MINUTE);
    PER_HOUR: "per hour", "/h", SiAccepted => duration(DurationUnit::HOUR);
    PER_DAY: "per day", "/day", SiAccepted => duration(DurationUnit::DAY);
    PER_WEEK: "per week", "/wk", Other => duration(DurationUnit::WEEK);
    RPM: "revolutions per minute", "rpm", Other => scaled(1.0 / 60.0);
}

derivations! {
    Frequency {
        /// The reciprocal of a duration.
        duration(duration: Duration ^ -1);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hour_resolves_through_minute() {
        assert_eq!(DurationUnit::MINUTE.scale_factor(), 60.0);
        assert_eq!(DurationUnit::HOUR.scale_factor(), 3600.0);
        assert_eq!(DurationUnit::WEEK.scale_factor(), 604_800.0);
    }

    #[test]
    fn test_reciprocal_durations() {
        assert_eq!(FrequencyUnit::HERTZ.scale_factor(), 1.0);
        assert_eq!(FrequencyUnit::PER_MINUTE.scale_factor(), 1.0 / 60.0);
        assert_eq!(FrequencyUnit::PER_MINUTE, FrequencyUnit::RPM);
    }

    #[test]
    fn test_j2000_origin() {
        assert_eq!(TimeUnit::J2000_SECOND.to_standard(0.0), J2000_EPOCH_SECONDS);
        assert_relative_eq!(
            TimeUnit::J2000_DAY.to_standard(1.0),
            J2000_EPOCH_SECONDS + 86_400.0,
            max_relative = 1e-15
        );
        assert_eq!(TimeUnit::BASE_HOUR.relative_unit(), DurationUnit::HOUR);
    }
}
