//! The static converter catalog
//!
//! Every supported quantity kind is assembled once, with exact-rational
//! scale tables. Unit and converter identifiers are stable strings: external
//! callers persist them to remember the last-used selection, so they must
//! never be recycled or reused for a different quantity kind.

use std::sync::LazyLock;

use metron_core::Rational;

use crate::converter::Converter;
use crate::system::MeasurementSystem::{Imperial, ImperialUs, Other, Si, UsCustomary};
use crate::unit::Unit;

/// Global converter catalog
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// All converters, in presentation order.
pub struct Catalog {
    converters: Vec<Converter>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            converters: vec![
                length(),
                mass(),
                time(),
                temperature(),
                data(),
                angle(),
                area(),
                volume(),
                pressure(),
                energy(),
                power(),
                speed(),
            ],
        }
    }

    /// Every converter, including empty placeholders.
    pub fn converters(&self) -> &[Converter] {
        &self.converters
    }

    /// Converters that can actually be selected (placeholders excluded).
    pub fn selectable(&self) -> impl Iterator<Item = &Converter> {
        self.converters.iter().filter(|c| c.has_units())
    }

    /// Look up a converter by its stable id.
    pub fn get(&self, id: &str) -> Option<&Converter> {
        self.converters.iter().find(|c| c.id() == id)
    }

    /// The converter shown when nothing has been persisted.
    pub fn default_converter(&self) -> &Converter {
        self.selectable()
            .next()
            .unwrap_or_else(|| unreachable!("catalog has at least one populated converter"))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn length() -> Converter {
    Converter::new(
        "converter_length",
        "Length",
        vec![
            Unit::linear("length_nanometre", Si, "Nanometre", "nm", Rational::ratio(1, 1_000_000_000)),
            Unit::linear("length_micrometre", Si, "Micrometre", "µm", Rational::ratio(1, 1_000_000)),
            Unit::linear("length_millimetre", Si, "Millimetre", "mm", Rational::ratio(1, 1000)),
            Unit::linear("length_centimetre", Si, "Centimetre", "cm", Rational::ratio(1, 100)),
            Unit::linear("length_metre", Si, "Metre", "m", Rational::ratio(1, 1)),
            Unit::linear("length_kilometre", Si, "Kilometre", "km", Rational::ratio(1000, 1)),
            Unit::linear("length_mile", Imperial, "Mile", "mi", Rational::ratio(1_609_344, 1000)),
            Unit::linear("length_nautical_mile", Imperial, "Nautical Mile", "nmi", Rational::ratio(1852, 1)),
            Unit::linear("length_yard", Imperial, "Yard", "yd", Rational::ratio(9144, 10000)),
            Unit::linear("length_foot", Imperial, "Foot", "ft", Rational::ratio(3048, 10000)),
            Unit::linear("length_inch", Imperial, "Inch", "in", Rational::ratio(254, 10000)),
            Unit::linear("length_astronomical_unit", Si, "Astronomical Unit", "AU", Rational::ratio(149_597_870_700, 1)),
            Unit::linear("length_light_year", Si, "Light Year", "ly", Rational::ratio(9_460_730_472_580_800, 1)),
        ],
    )
    // Metre to inch, not the first two array entries.
    .with_default_pair(4, 10)
}

fn mass() -> Converter {
    Converter::new(
        "converter_mass",
        "Weight and Mass",
        vec![
            Unit::linear("mass_carat", Si, "Carat", "ct", Rational::ratio(2, 10000)),
            Unit::linear("mass_milligram", Si, "Milligram", "mg", Rational::ratio(1, 1_000_000)),
            Unit::linear("mass_centigram", Si, "Centigram", "cg", Rational::ratio(1, 100_000)),
            Unit::linear("mass_decigram", Si, "Decigram", "dg", Rational::ratio(1, 10000)),
            Unit::linear("mass_gram", Si, "Gram", "g", Rational::ratio(1, 1000)),
            Unit::linear("mass_decagram", Si, "Decagram", "dag", Rational::ratio(1, 100)),
            Unit::linear("mass_hectogram", Si, "Hectogram", "hg", Rational::ratio(1, 10)),
            Unit::linear("mass_kilogram", Si, "Kilogram", "kg", Rational::ratio(1, 1)),
            Unit::linear("mass_metric_tonne", Si, "Metric Ton", "t", Rational::ratio(1000, 1)),
            Unit::linear("mass_ounce", Imperial, "Ounce", "oz", Rational::ratio(28_349_523_125, 1_000_000_000_000)),
            Unit::linear("mass_pound", Imperial, "Pound", "lb", Rational::ratio(45_359_237, 100_000_000)),
            Unit::linear("mass_stone", Imperial, "Stone", "st", Rational::ratio(635_029_318, 100_000_000)),
            Unit::linear("mass_short_tonne_us", ImperialUs, "Short Ton (US)", "ton", Rational::ratio(90_718_474, 100_000)),
            Unit::linear("mass_long_tonne_uk", Imperial, "Long Ton (UK)", "lt", Rational::ratio(10_160_469_088, 10_000_000)),
        ],
    )
}

fn time() -> Converter {
    Converter::new(
        "converter_time",
        "Time",
        vec![
            Unit::linear("time_nano_second", Si, "Nanosecond", "ns", Rational::ratio(1, 1_000_000_000)),
            Unit::linear("time_micro_second", Si, "Microsecond", "µs", Rational::ratio(1, 1_000_000)),
            Unit::linear("time_milli_second", Si, "Millisecond", "ms", Rational::ratio(1, 1000)),
            Unit::linear("time_second", Si, "Second", "s", Rational::ratio(1, 1)),
            Unit::linear("time_minute", Si, "Minute", "min", Rational::ratio(60, 1)),
            Unit::linear("time_hour", Si, "Hour", "h", Rational::ratio(3600, 1)),
            Unit::linear("time_day", Si, "Day", "d", Rational::ratio(86400, 1)),
            Unit::linear("time_week", Si, "Week", "wk", Rational::ratio(604_800, 1)),
            Unit::linear("time_year", Si, "Year", "yr", Rational::ratio(31_557_600, 1)),
        ],
    )
}

/// Temperature scales, all expressed relative to Celsius as the base.
fn temperature() -> Converter {
    Converter::new(
        "converter_temperature",
        "Temperature",
        vec![
            Unit::linear("temperature_celsius", Si, "Celsius", "°C", Rational::ratio(1, 1)),
            // C = (F - 32) * 5/9
            Unit::affine("temperature_fahrenheit", UsCustomary, "Fahrenheit", "°F", Rational::ratio(5, 9), Rational::ratio(-160, 9)),
            // C = K - 273.15
            Unit::affine("temperature_kelvin", Si, "Kelvin", "K", Rational::ratio(1, 1), Rational::ratio(-27315, 100)),
            // C = (R - 491.67) * 5/9
            Unit::affine("temperature_rankine", ImperialUs, "Rankine", "°R", Rational::ratio(5, 9), Rational::ratio(-27315, 100)),
            // C = 100 - De * 2/3
            Unit::affine("temperature_delisle", Other, "Delisle", "°De", Rational::ratio(-2, 3), Rational::ratio(100, 1)),
            // C = N * 100/33
            Unit::linear("temperature_newton", Other, "Newton", "°N", Rational::ratio(100, 33)),
            // C = (Rø - 7.5) * 40/21
            Unit::affine("temperature_romer", Other, "Rømer", "°Rø", Rational::ratio(40, 21), Rational::ratio(-100, 7)),
            // C = Ré * 5/4
            Unit::linear("temperature_reaumur", Other, "Réaumur", "°Ré", Rational::ratio(5, 4)),
        ],
    )
}

/// Placeholder: no units yet, excluded from selection.
fn data() -> Converter {
    Converter::new("converter_data", "Data", vec![])
}

fn angle() -> Converter {
    Converter::new(
        "converter_angle",
        "Angle",
        vec![
            Unit::linear("angle_degree", Si, "Degree", "deg", Rational::ratio(1, 1)),
            Unit::linear("angle_radian", Si, "Radian", "rad", Rational::ratio(572_957_795_130_823, 10_000_000_000_000)),
            Unit::linear("angle_gradian", Si, "Gradian", "grad", Rational::ratio(9, 10)),
        ],
    )
}

fn area() -> Converter {
    Converter::new(
        "converter_area",
        "Area",
        vec![
            Unit::linear("area_sq_millimetre", Si, "Square Millimetre", "mm²", Rational::ratio(1, 1_000_000)),
            Unit::linear("area_sq_centimetre", Si, "Square Centimetre", "cm²", Rational::ratio(1, 10000)),
            Unit::linear("area_sq_metre", Si, "Square Metre", "m²", Rational::ratio(1, 1)),
            Unit::linear("area_sq_hectare", Si, "Hectare", "ha", Rational::ratio(10000, 1)),
            Unit::linear("area_sq_kilometre", Si, "Square Kilometre", "km²", Rational::ratio(1_000_000, 1)),
            Unit::linear("area_sq_inch", Imperial, "Square Inch", "in²", Rational::ratio(64516, 100_000_000)),
            Unit::linear("area_sq_foot", Imperial, "Square Foot", "ft²", Rational::ratio(92903, 1_000_000)),
            Unit::linear("area_sq_yard", Imperial, "Square Yard", "yd²", Rational::ratio(836_127, 1_000_000)),
            Unit::linear("area_acre", Imperial, "Acre", "ac", Rational::ratio(40_468_564_224, 10_000_000)),
            Unit::linear("area_sq_mile", Imperial, "Square Mile", "mi²", Rational::ratio(2_589_988_110_336, 1_000_000)),
        ],
    )
}

/// Placeholder: no units yet, excluded from selection.
fn volume() -> Converter {
    Converter::new("converter_volume", "Volume", vec![])
}

fn pressure() -> Converter {
    Converter::new(
        "converter_pressure",
        "Pressure",
        vec![
            Unit::linear("pressure_atmosphere", Si, "Atmosphere", "atm", Rational::ratio(101_325, 1)),
            Unit::linear("pressure_bar", Si, "Bar", "bar", Rational::ratio(100_000, 1)),
            Unit::linear("pressure_kilo_pascal", Si, "Kilopascal", "kPa", Rational::ratio(1000, 1)),
            Unit::linear("pressure_pounds_per_inch", Si, "Pounds per Square Inch", "psi", Rational::ratio(689_475_729_316_836, 100_000_000_000)),
            Unit::linear("pressure_mms_of_mercury", Si, "Millimetre of Mercury", "mmHg", Rational::ratio(133_322_387_415, 1_000_000_000)),
            Unit::linear("pressure_pascal", Si, "Pascal", "Pa", Rational::ratio(1, 1)),
        ],
    )
}

fn energy() -> Converter {
    Converter::new(
        "converter_energy",
        "Energy",
        vec![
            Unit::linear("energy_electron_volt", Si, "Electronvolt", "eV", Rational::ratio(1_602_176_565, 10_000_000_000_000_000_000_000_000_000)),
            Unit::linear("energy_joule", Si, "Joule", "J", Rational::ratio(1, 1)),
            Unit::linear("energy_kilo_joule", Si, "Kilojoule", "kJ", Rational::ratio(1000, 1)),
            Unit::linear("energy_thermal_calorie", Si, "Thermal Calorie", "cal", Rational::ratio(4184, 1000)),
            Unit::linear("energy_food_calorie", Si, "Food Calorie", "kcal", Rational::ratio(4184, 1)),
            Unit::linear("energy_foot_pound", Imperial, "Foot-Pound", "ft·lb", Rational::ratio(13_558_179_483_314_003, 10_000_000_000_000_000)),
        ],
    )
}

fn power() -> Converter {
    Converter::new(
        "converter_power",
        "Power",
        vec![
            Unit::linear("power_watt", Si, "Watt", "W", Rational::ratio(1, 1)),
            Unit::linear("power_kilo_watt", Si, "Kilowatt", "kW", Rational::ratio(1000, 1)),
            Unit::linear("power_horse_power", ImperialUs, "Horsepower (US)", "hp", Rational::ratio(7_456_998_715_822_702, 10_000_000_000_000)),
            Unit::linear("power_foot_pounds_per_minute", Imperial, "Foot-Pounds per Minute", "ft·lb/min", Rational::ratio(22_596_966, 1_000_000_000)),
            Unit::linear("power_btu_per_minute", Imperial, "BTU per Minute", "BTU/min", Rational::ratio(175_842_641_667, 10_000_000_000)),
        ],
    )
}

/// Base unit: kilometres per hour.
fn speed() -> Converter {
    Converter::new(
        "converter_speed",
        "Speed",
        vec![
            Unit::linear("speed_cms_per_second", Si, "Centimetres per Second", "cm/s", Rational::ratio(36, 1000)),
            Unit::linear("speed_ms_per_second", Si, "Metres per Second", "m/s", Rational::ratio(36, 10)),
            Unit::linear("speed_kms_per_hour", Si, "Kilometres per Hour", "km/h", Rational::ratio(1, 1)),
            Unit::linear("speed_feet_per_second", Imperial, "Feet per Second", "ft/s", Rational::ratio(109_728, 100_000)),
            Unit::linear("speed_miles_per_hour", Imperial, "Miles per Hour", "mph", Rational::ratio(16092, 10000)),
            Unit::linear("speed_knot", Imperial, "Knot", "kn", Rational::ratio(185_184, 100_000)),
            Unit::linear("speed_mach", Imperial, "Mach", "Ma", Rational::ratio(122_508, 100)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_core::Real;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_globally_unique() {
        let catalog = Catalog::new();
        let mut seen = HashSet::new();
        for converter in catalog.converters() {
            assert!(seen.insert(converter.id()), "duplicate id {}", converter.id());
            for unit in converter.units() {
                assert!(seen.insert(unit.id()), "duplicate id {}", unit.id());
            }
        }
    }

    #[test]
    fn test_placeholders_not_selectable() {
        let catalog = Catalog::new();
        assert_eq!(catalog.converters().len(), 12);
        let selectable: Vec<_> = catalog.selectable().map(|c| c.id()).collect();
        assert_eq!(selectable.len(), 10);
        assert!(!selectable.contains(&"converter_data"));
        assert!(!selectable.contains(&"converter_volume"));
    }

    #[test]
    fn test_default_converter_is_length() {
        assert_eq!(CATALOG.default_converter().id(), "converter_length");
        let (from, to) = CATALOG.default_converter().default_pair().unwrap();
        assert_eq!(from.id(), "length_metre");
        assert_eq!(to.id(), "length_inch");
    }

    #[test]
    fn test_metre_to_inch() {
        let length = CATALOG.get("converter_length").unwrap();
        let metre = length.unit_by_id("length_metre").unwrap();
        let inch = length.unit_by_id("length_inch").unwrap();
        let result = length.convert(metre, inch, &Real::from_i64(1)).unwrap();
        assert!((result.to_f64() - 39.370_078_740_157_48).abs() < 1e-9);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let temp = CATALOG.get("converter_temperature").unwrap();
        let celsius = temp.unit_by_id("temperature_celsius").unwrap();
        let fahrenheit = temp.unit_by_id("temperature_fahrenheit").unwrap();
        let boiling = temp.convert(celsius, fahrenheit, &Real::from_i64(100)).unwrap();
        assert_eq!(boiling, Real::from_i64(212));
        let freezing = temp.convert(fahrenheit, celsius, &Real::from_i64(32)).unwrap();
        assert_eq!(freezing, Real::zero());
    }

    #[test]
    fn test_celsius_to_kelvin() {
        let temp = CATALOG.get("converter_temperature").unwrap();
        let celsius = temp.unit_by_id("temperature_celsius").unwrap();
        let kelvin = temp.unit_by_id("temperature_kelvin").unwrap();
        let absolute_zero = temp
            .convert(kelvin, celsius, &Real::zero())
            .unwrap();
        assert_eq!(absolute_zero, "-273.15".parse().unwrap());
    }

    #[test]
    fn test_temperature_scales_agree_at_boiling_point() {
        // 100 °C in every scale, exact.
        let cases = [
            ("temperature_fahrenheit", "212"),
            ("temperature_kelvin", "373.15"),
            ("temperature_rankine", "671.67"),
            ("temperature_delisle", "0"),
            ("temperature_newton", "33"),
            ("temperature_romer", "60"),
            ("temperature_reaumur", "80"),
        ];
        let temp = CATALOG.get("converter_temperature").unwrap();
        let celsius = temp.unit_by_id("temperature_celsius").unwrap();
        for (id, expected) in cases {
            let unit = temp.unit_by_id(id).unwrap();
            let got = temp.convert(celsius, unit, &Real::from_i64(100)).unwrap();
            assert_eq!(got, expected.parse().unwrap(), "100 °C in {id}");
        }
    }

    #[test]
    fn test_round_trip_every_unit() {
        let samples: Vec<Real> = ["1", "0.125", "-40", "123456.789"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        for converter in CATALOG.selectable() {
            for unit in converter.units() {
                for v in &samples {
                    let back = unit.from_base(&unit.to_base(v)).unwrap();
                    assert_eq!(back, *v, "round trip through {}", unit.id());
                    assert!(back.is_exact());
                }
            }
        }
    }

    #[test]
    fn test_base_routing_consistency() {
        let v: Real = "2.5".parse().unwrap();
        for converter in CATALOG.selectable() {
            let units = converter.units();
            let a = &units[0];
            let b = &units[units.len() - 1];
            let via_convert = converter.convert(a, b, &v).unwrap();
            let via_base = b.from_base(&a.to_base(&v)).unwrap();
            assert_eq!(via_convert, via_base, "{}", converter.id());
            let back = converter.convert(b, a, &via_convert).unwrap();
            assert_eq!(back, v, "{}", converter.id());
        }
    }
}
