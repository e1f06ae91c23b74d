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

// Money is measured in whatever currency is the current standard; every
// currency converts 1:1, since exchange rates are not a property of the unit.
// The money-per-X kinds count currency per SI unit of X, so their standard
// units (e.g. US$/h) need not have a factor of one.
use crate::{
    builder::UnitBuilder,
    kind::{
        Area, AreaUnit, Duration, DurationUnit, Energy, EnergyUnit, Length, LengthUnit, Mass,
        MassUnit, Volume, VolumeUnit,
    },
    unit::Unit,
};

define_kind! {
    /// An amount of some currency.
    Money, MoneyUnit: monetary, "1", standard = crate::money::STANDARDS.read().money;
    US_DOLLAR: "US dollar", "US$", Other => scaled(1.0).currency("USD", 840);
    EURO: "euro", "€", Other => scaled(1.0).currency("EUR", 978);
    POUND_STERLING: "pound sterling", "£", Other => scaled(1.0).currency("GBP", 826);
    YEN: "yen", "¥", Other => scaled(1.0).currency("JPY", 392);
    SWISS_FRANC: "Swiss franc", "CHF", Other => scaled(1.0).currency("CHF", 756);
    RENMINBI: "renminbi", "CN¥", Other => scaled(1.0).currency("CNY", 156);
    CANADIAN_DOLLAR: "Canadian dollar", "CA$", Other => scaled(1.0).currency("CAD", 124);
    AUSTRALIAN_DOLLAR: "Australian dollar", "A$", Other => scaled(1.0).currency("AUD", 36);
    INDIAN_RUPEE: "Indian rupee", "₹", Other => scaled(1.0).currency("INR", 356);
    SWEDISH_KRONA: "Swedish krona", "kr", Other => scaled(1.0).currency("SEK", 752);
}

// Each money-per-X kind gets one composition path, `money_x(money, per)`,
// which also carries the currency of `money` into the new unit.
macro_rules! money_per {
    ($($Kind:ident / $Per:ident),+) => {
        paste::paste! {
            $(
                impl UnitBuilder<$Kind> {
                    pub const fn [<money_ $Per:snake>](self, money: Unit<Money>, per: Unit<$Per>) -> Self {
                        self.derived(&[(money.scale_factor(), 1), (per.scale_factor(), -1)])
                            .priced(money)
                    }
                }
            )+
        }
    };
}

money_per!(
    MoneyPerArea / Area,
    MoneyPerEnergy / Energy,
    MoneyPerLength / Length,
    MoneyPerMass / Mass,
    MoneyPerDuration / Duration,
    MoneyPerVolume / Volume
);

define_kind! {
    MoneyPerArea, MoneyPerAreaUnit: monetary, "1/m2", standard = crate::money::STANDARDS.read().per_area;
    USD_PER_SQUARE_METER: "US dollar per square meter", "US$/m2", Other =>
        money_area(MoneyUnit::US_DOLLAR, AreaUnit::SQUARE_METER);
    EUR_PER_SQUARE_METER: "euro per square meter", "€/m2", Other =>
        money_area(MoneyUnit::EURO, AreaUnit::SQUARE_METER);
    USD_PER_HECTARE: "US dollar per hectare", "US$/ha", Other =>
        money_area(MoneyUnit::US_DOLLAR, AreaUnit::HECTARE);
    USD_PER_ACRE: "US dollar per acre", "US$/ac", Other =>
        money_area(MoneyUnit::US_DOLLAR, AreaUnit::ACRE);
    USD_PER_SQUARE_FOOT: "US dollar per square foot", "US$/ft2", Other =>
        money_area(MoneyUnit::US_DOLLAR, AreaUnit::SQUARE_FOOT);
}

define_kind! {
    MoneyPerEnergy, MoneyPerEnergyUnit: monetary, "s2/kgm2", standard = crate::money::STANDARDS.read().per_energy;
    USD_PER_KILOWATT_HOUR: "US dollar per kilowatt hour", "US$/kWh", Other =>
        money_energy(MoneyUnit::US_DOLLAR, EnergyUnit::KILOWATT_HOUR);
    EUR_PER_KILOWATT_HOUR: "euro per kilowatt hour", "€/kWh", Other =>
        money_energy(MoneyUnit::EURO, EnergyUnit::KILOWATT_HOUR);
    USD_PER_MEGAWATT_HOUR: "US dollar per megawatt hour", "US$/MWh", Other =>
        money_energy(MoneyUnit::US_DOLLAR, EnergyUnit::MEGAWATT_HOUR);
    EUR_PER_MEGAWATT_HOUR: "euro per megawatt hour", "€/MWh", Other =>
        money_energy(MoneyUnit::EURO, EnergyUnit::MEGAWATT_HOUR);
    USD_PER_JOULE: "US dollar per joule", "US$/J", Other =>
        money_energy(MoneyUnit::US_DOLLAR, EnergyUnit::JOULE);
}

define_kind! {
    MoneyPerLength, MoneyPerLengthUnit: monetary, "1/m", standard = crate::money::STANDARDS.read().per_length;
    USD_PER_METER: "US dollar per meter", "US$/m", Other =>
        money_length(MoneyUnit::US_DOLLAR, LengthUnit::METER);
    EUR_PER_METER: "euro per meter", "€/m", Other =>
        money_length(MoneyUnit::EURO, LengthUnit::METER);
    USD_PER_KILOMETER: "US dollar per kilometer", "US$/km", Other =>
        money_length(MoneyUnit::US_DOLLAR, LengthUnit::KILOMETER);
    EUR_PER_KILOMETER: "euro per kilometer", "€/km", Other =>
        money_length(MoneyUnit::EURO, LengthUnit::KILOMETER);
    USD_PER_MILE: "US dollar per mile", "US$/mi", Other =>
        money_length(MoneyUnit::US_DOLLAR, LengthUnit::MILE);
}

define_kind! {
    MoneyPerMass, MoneyPerMassUnit: monetary, "1/kg", standard = crate::money::STANDARDS.read().per_mass;
    USD_PER_KILOGRAM: "US dollar per kilogram", "US$/kg", Other =>
        money_mass(MoneyUnit::US_DOLLAR, MassUnit::KILOGRAM);
    EUR_PER_KILOGRAM: "euro per kilogram", "€/kg", Other =>
        money_mass(MoneyUnit::EURO, MassUnit::KILOGRAM);
    USD_PER_TONNE: "US dollar per tonne", "US$/t", Other =>
        money_mass(MoneyUnit::US_DOLLAR, MassUnit::TONNE);
    EUR_PER_TONNE: "euro per tonne", "€/t", Other =>
        money_mass(MoneyUnit::EURO, MassUnit::TONNE);
    USD_PER_POUND: "US dollar per pound", "US$/lb", Other =>
        money_mass(MoneyUnit::US_DOLLAR, MassUnit::POUND);
}

define_kind! {
    MoneyPerDuration, MoneyPerDurationUnit: monetary, "1/s", standard = crate::money::STANDARDS.read().per_duration;
    USD_PER_HOUR: "US dollar per hour", "US$/h", Other =>
        money_duration(MoneyUnit::US_DOLLAR, DurationUnit::HOUR);
    EUR_PER_HOUR: "euro per hour", "€/h", Other =>
        money_duration(MoneyUnit::EURO, DurationUnit::HOUR);
    USD_PER_SECOND: "US dollar per second", "US$/s", Other =>
        money_duration(MoneyUnit::US_DOLLAR, DurationUnit::SECOND);
    EUR_PER_SECOND: "euro per second", "€/s", Other =>
        money_duration(MoneyUnit::EURO, DurationUnit::SECOND);
    USD_PER_DAY: "US dollar per day", "US$/day", Other =>
        money_duration(MoneyUnit::US_DOLLAR, DurationUnit::DAY);
    EUR_PER_DAY: "euro per day", "€/day", Other =>
        money_duration(MoneyUnit::EURO, DurationUnit::DAY);
}

define_kind! {
    MoneyPerVolume, MoneyPerVolumeUnit: monetary, "1/m3", standard = crate::money::STANDARDS.read().per_volume;
    USD_PER_CUBIC_METER: "US dollar per cubic meter", "US$/m3", Other =>
        money_volume(MoneyUnit::US_DOLLAR, VolumeUnit::CUBIC_METER);
    EUR_PER_CUBIC_METER: "euro per cubic meter", "€/m3", Other =>
        money_volume(MoneyUnit::EURO, VolumeUnit::CUBIC_METER);
    USD_PER_LITER: "US dollar per liter", "US$/L", Other =>
        money_volume(MoneyUnit::US_DOLLAR, VolumeUnit::LITER);
    EUR_PER_LITER: "euro per liter", "€/L", Other =>
        money_volume(MoneyUnit::EURO, VolumeUnit::LITER);
    USD_PER_GALLON_US: "US dollar per US gallon", "US$/gal(US)", Other =>
        money_volume(MoneyUnit::US_DOLLAR, VolumeUnit::GALLON_US);
}
