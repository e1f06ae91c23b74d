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

// Declares a kind, its `XxxUnit` alias, and its library units.
//
//   define_kind! {
//       /// Distance.
//       Length, LengthUnit: relative, "m", standard = LengthUnit::METER;
//       METER: "meter", "m", SiBase => root();
//       KILOMETER: "kilometer", "km", SiBase => scaled_from(LengthUnit::METER, 1000.0);
//   }
//
// The first unit listed should be the standard unit. The kind may be
// `relative`, `monetary`, or `absolute(RelativeKind)`. Each unit row is a
// chain of `UnitBuilder` calls evaluated at compile time.
macro_rules! define_kind {
    (
        $(#[$meta:meta])*
        $Kind:ident, $Alias:ident: relative, $signature:literal, standard = $standard:expr;
        $($rows:tt)+
    ) => {
        define_kind!(@kind [$(#[$meta])*] $Kind, $Alias, $signature, $standard; $($rows)+);
        impl $crate::unit::RelativeKind for $Kind {}
        define_kind!(@tests $Kind, true);
    };

    (
        $(#[$meta:meta])*
        $Kind:ident, $Alias:ident: monetary, $signature:literal, standard = $standard:expr;
        $($rows:tt)+
    ) => {
        define_kind!(@kind [$(#[$meta])*] $Kind, $Alias, $signature, $standard; $($rows)+);
        impl $crate::unit::RelativeKind for $Kind {}
        impl $crate::unit::MonetaryKind for $Kind {}
        define_kind!(@tests $Kind, false);
    };

    (
        $(#[$meta:meta])*
        $Kind:ident, $Alias:ident: absolute($Relative:ty), $signature:literal, standard = $standard:expr;
        $($rows:tt)+
    ) => {
        define_kind!(@kind [$(#[$meta])*] $Kind, $Alias, $signature, $standard; $($rows)+);
        impl $crate::unit::AbsoluteKind for $Kind {
            type Relative = $Relative;
        }
        define_kind!(@tests $Kind, true);
    };

    (@kind [$(#[$meta:meta])*] $Kind:ident, $Alias:ident, $signature:literal, $standard:expr;
        $(
            $(#[$umeta:meta])*
            $UNIT:ident: $name:literal, $abbr:literal, $system:ident => $($method:ident($($arg:expr),*)).+;
        )+
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $Kind;

        pub type $Alias = $crate::unit::Unit<$Kind>;

        impl $crate::unit::Kind for $Kind {
            const NAME: &'static str = stringify!($Kind);
            const SI_SIGNATURE: &'static str = $signature;
            const LIBRARY_UNITS: &'static [$crate::unit::Unit<Self>] = &[$($Alias::$UNIT),+];

            fn standard_unit() -> $crate::unit::Unit<Self> {
                $standard
            }
        }

        impl $crate::unit::Unit<$Kind> {
            $(
                $(#[$umeta])*
                pub const $UNIT: Self = Self::from_static({
                    const DEF: $crate::unit::UnitDef =
                        $crate::builder::UnitBuilder::<$Kind>::new(
                            $name,
                            $abbr,
                            $crate::unit_system::UnitSystem::$system,
                        )
                        $(.$method($($arg),*))+
                        .definition();
                    &DEF
                });
            )+
        }
    };

    (@tests $Kind:ident, $identity_standard:literal) => {
        #[cfg(test)]
        paste::paste! {
            #[test]
            fn [<$Kind:snake _library_units>]() {
                use $crate::unit::Kind;

                let units = <$Kind as Kind>::LIBRARY_UNITS;
                for unit in units {
                    for x in [0.0, 1.0, -1.0, 42.5, 1.0e12, 1.0e-12] {
                        approx::assert_relative_eq!(
                            unit.from_standard(unit.to_standard(x)),
                            x,
                            epsilon = 1e-9,
                            max_relative = 1e-9
                        );
                    }
                    assert_eq!(unit.si_signature(), <$Kind as Kind>::SI_SIGNATURE);
                    assert!(unit.is_standard_unit());
                    assert_eq!(
                        units.iter().filter(|u| u.abbreviation() == unit.abbreviation()).count(),
                        1,
                        "duplicate abbreviation {}",
                        unit.abbreviation()
                    );
                }

                let signature = $crate::si::SiDimensions::parse(<$Kind as Kind>::SI_SIGNATURE)
                    .expect("declared signature parses");
                assert_eq!(signature.to_string(), <$Kind as Kind>::SI_SIGNATURE);

                if $identity_standard {
                    let standard = <$Kind as Kind>::standard_unit();
                    assert_eq!(standard.abbreviation(), units[0].abbreviation());
                    assert_eq!(standard.scale_factor(), 1.0);
                    assert_eq!(standard.to_standard(0.0), 0.0);
                }
            }
        }
    };
}

// Declares the composition paths of a derived kind. Each path becomes a
// `const fn` on `UnitBuilder<Kind>` taking one unit per constituent, plus a
// test that checks the resolved factor against the product of the
// constituent factors and the declared signature against the product of
// the constituent signatures.
//
//   derivations! {
//       Power {
//           mass_length_duration(mass: Mass ^ 1, length: Length ^ 2, duration: Duration ^ -3);
//       }
//   }
macro_rules! derivations {
    ($Kind:ident {
        $(
            $(#[$meta:meta])*
            $path:ident($($arg:ident: $Constituent:ident ^ $exp:literal),+);
        )+
    }) => {
        impl $crate::builder::UnitBuilder<$Kind> {
            $(
                $(#[$meta])*
                pub const fn $path(self, $($arg: $crate::unit::Unit<$Constituent>),+) -> Self {
                    self.derived(&[$(($arg.scale_factor(), $exp)),+])
                }
            )+
        }

        $(
            derivations!(@test $Kind, $path, $($arg: $Constituent ^ $exp),+);
        )+
    };

    (@test $Kind:ident, $path:ident, $($arg:ident: $Constituent:ident ^ $exp:literal),+) => {
        #[cfg(test)]
        paste::paste! {
            #[test]
            fn [<$Kind:snake _from_ $path>]() {
                use $crate::{si::SiDimensions, unit::Kind};

                // The last library unit of each constituent is rarely its standard unit.
                $(
                    let $arg = *<$Constituent as Kind>::LIBRARY_UNITS
                        .last()
                        .expect("kinds define units");
                )+
                let unit = $crate::builder::UnitBuilder::<$Kind>::new(
                    "test",
                    "test",
                    $crate::unit_system::UnitSystem::Other,
                )
                .$path($($arg),+)
                .definition();
                let expected = 1.0 $(* $arg.scale_factor().powi($exp))+;
                approx::assert_relative_eq!(unit.scale.factor(), expected, max_relative = 1e-9);

                let composed = SiDimensions::DIMENSIONLESS
                    $(.plus(
                        SiDimensions::parse(<$Constituent as Kind>::SI_SIGNATURE)
                            .and_then(|dims| dims.pow($exp))
                            .expect("signature"),
                    ).expect("signature"))+;
                assert_eq!(
                    composed,
                    SiDimensions::parse(<$Kind as Kind>::SI_SIGNATURE).expect("signature")
                );
            }
        }
    };
}
