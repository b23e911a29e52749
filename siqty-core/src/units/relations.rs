//! Operators between different dimensions.
//!
//! Every identity works on base-unit values, so `Voltage / Current` gives ohms regardless of the units the operands
//! were created from. Division by zero is not guarded and follows IEEE rules.

use super::area::AreaDim;
use super::areic_number::AreicNumberDim;
use super::capacitance::CapacitanceDim;
use super::charge::ChargeDim;
use super::current::CurrentDim;
use super::force::ForceDim;
use super::frequency::FrequencyDim;
use super::length::LengthDim;
use super::linear_density::LinearDensityDim;
use super::linear_number_density::LinearNumberDensityDim;
use super::lineic_number::LineicNumberDim;
use super::power::PowerDim;
use super::pressure::PressureDim;
use super::resistance::ResistanceDim;
use super::surface_number_density::SurfaceNumberDensityDim;
use super::time::TimeDim;
use super::velocity::VelocityDim;
use super::voltage::VoltageDim;
use super::volume::VolumeDim;
use super::volume_flow_rate::VolumeFlowRateDim;
use super::volumic_number::VolumicNumberDim;
use super::work::WorkDim;

// ─────────────────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────────────────

impl_product!(square LengthDim => AreaDim);
impl_quotient!(AreaDim, LengthDim => LengthDim);
impl_product!(LengthDim, AreaDim => VolumeDim);
impl_quotient!(VolumeDim, LengthDim => AreaDim);
impl_quotient!(VolumeDim, AreaDim => LengthDim);

// ─────────────────────────────────────────────────────────────────────────────
// Motion and flow
// ─────────────────────────────────────────────────────────────────────────────

impl_product!(VelocityDim, TimeDim => LengthDim);
impl_quotient!(LengthDim, TimeDim => VelocityDim);
impl_quotient!(LengthDim, VelocityDim => TimeDim);

impl_product!(VolumeFlowRateDim, TimeDim => VolumeDim);
impl_quotient!(VolumeDim, TimeDim => VolumeFlowRateDim);

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

impl_product!(PowerDim, TimeDim => WorkDim);
impl_quotient!(WorkDim, TimeDim => PowerDim);
impl_quotient!(WorkDim, PowerDim => TimeDim);

impl_product!(ForceDim, LengthDim => WorkDim);
impl_quotient!(WorkDim, LengthDim => ForceDim);
impl_quotient!(WorkDim, ForceDim => LengthDim);

impl_quotient!(ForceDim, AreaDim => PressureDim);
impl_product!(ForceDim, AreicNumberDim => PressureDim);

// ─────────────────────────────────────────────────────────────────────────────
// Electrical
// ─────────────────────────────────────────────────────────────────────────────

// Ohm's law
impl_product!(ResistanceDim, CurrentDim => VoltageDim);
impl_quotient!(VoltageDim, CurrentDim => ResistanceDim);
impl_quotient!(VoltageDim, ResistanceDim => CurrentDim);

impl_product!(VoltageDim, CurrentDim => PowerDim);
impl_quotient!(PowerDim, VoltageDim => CurrentDim);
impl_quotient!(PowerDim, CurrentDim => VoltageDim);

impl_product!(CapacitanceDim, VoltageDim => ChargeDim);
impl_quotient!(ChargeDim, VoltageDim => CapacitanceDim);
impl_quotient!(ChargeDim, CapacitanceDim => VoltageDim);

impl_product!(CurrentDim, TimeDim => ChargeDim);
impl_quotient!(ChargeDim, TimeDim => CurrentDim);

// ─────────────────────────────────────────────────────────────────────────────
// Reciprocals
// ─────────────────────────────────────────────────────────────────────────────

impl_reciprocal!(TimeDim, FrequencyDim);
impl_inverse!(TimeDim => FrequencyDim);

impl_reciprocal!(LengthDim, LineicNumberDim);
impl_reciprocal!(LengthDim, LinearDensityDim);
impl_reciprocal!(LengthDim, LinearNumberDensityDim);
impl_inverse!(LengthDim => LineicNumberDim);

impl_reciprocal!(AreaDim, AreicNumberDim);
impl_reciprocal!(AreaDim, SurfaceNumberDensityDim);
impl_inverse!(AreaDim => AreicNumberDim);

impl_reciprocal!(VolumeDim, VolumicNumberDim);
impl_inverse!(VolumeDim => VolumicNumberDim);

impl_product!(LengthDim, AreicNumberDim => LineicNumberDim);
impl_product!(LengthDim, SurfaceNumberDensityDim => LinearNumberDensityDim);
impl_product!(LengthDim, VolumicNumberDim => LineicNumberDim);

#[cfg(test)]
mod tests {
    use crate::area::Area;
    use crate::areic_number::{AreicNumber, AreicNumberDim};
    use crate::capacitance::Capacitance;
    use crate::charge::Charge;
    use crate::current::Current;
    use crate::force::Force;
    use crate::frequency::Frequency;
    use crate::length::{Length, LengthDim};
    use crate::linear_density::{LinearDensity, LinearDensityDim};
    use crate::linear_number_density::LinearNumberDensity;
    use crate::lineic_number::LineicNumber;
    use crate::power::Power;
    use crate::pressure::Pressure;
    use crate::resistance::Resistance;
    use crate::surface_number_density::{SurfaceNumberDensity, SurfaceNumberDensityDim};
    use crate::time::Time;
    use crate::velocity::Velocity;
    use crate::voltage::Voltage;
    use crate::volume::Volume;
    use crate::volume_flow_rate::VolumeFlowRate;
    use crate::volumic_number::VolumicNumber;
    use crate::work::Work;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn geometry() {
        let side = Length::from_meters(3.0);
        let area: Area = side * Length::from_meters(2.0);
        assert_eq!(area.in_square_meters(), 6.0);
        assert_eq!((area / side).in_meters(), 2.0);

        let volume: Volume = side * area;
        assert_eq!(volume.in_cubic_meters(), 18.0);
        assert_eq!((area * side).in_cubic_meters(), 18.0);
        assert_eq!((volume / side).in_square_meters(), 6.0);
        assert_eq!((volume / area).in_meters(), 3.0);
    }

    #[test]
    fn motion() {
        let v: Velocity = Length::from_kilometers(36.0) / Time::from_hours(1.0);
        assert_relative_eq!(v.in_meters_per_second(), 10.0, max_relative = 1e-6);
        assert_relative_eq!((v * Time::from_seconds(3.0)).in_meters(), 30.0, max_relative = 1e-6);
        assert_relative_eq!((Time::from_seconds(3.0) * v).in_meters(), 30.0, max_relative = 1e-6);
        assert_relative_eq!((Length::from_meters(50.0) / v).in_seconds(), 5.0, max_relative = 1e-6);
    }

    #[test]
    fn flow() {
        let rate = VolumeFlowRate::from_liters_per_second(2.0);
        let filled: Volume = rate * Time::from_minutes(1.0);
        assert_relative_eq!(filled.in_liters(), 120.0, max_relative = 1e-6);
        assert_relative_eq!((filled / Time::from_seconds(60.0)).in_liters_per_second(), 2.0, max_relative = 1e-6);
        assert_eq!((VolumeFlowRate::from_cubic_meters_per_second(1.0) * Time::from_seconds(2.0)).to_string(), "2 m³");
    }

    #[test]
    fn energy_and_force() {
        let w: Work = Power::from_watts(100.0) * Time::from_hours(1.0);
        assert_relative_eq!(w.in_watt_hours(), 100.0, max_relative = 1e-6);
        assert_relative_eq!((w / Time::from_seconds(3600.0)).in_watts(), 100.0, max_relative = 1e-6);
        assert_relative_eq!((w / Power::from_watts(50.0)).in_hours(), 2.0, max_relative = 1e-6);

        let lift: Work = Force::from_newtons(10.0) * Length::from_meters(2.0);
        assert_eq!(lift.in_joules(), 20.0);
        assert_eq!((Length::from_meters(2.0) * Force::from_newtons(10.0)).in_joules(), 20.0);
        assert_eq!((lift / Length::from_meters(4.0)).in_newtons(), 5.0);
        assert_eq!((lift / Force::from_newtons(4.0)).in_meters(), 5.0);
    }

    #[test]
    fn pressure() {
        let p: Pressure = Force::from_newtons(200.0) / Area::from_square_meters(4.0);
        assert_eq!(p.in_pascals(), 50.0);
        let per_area = AreicNumber::from_units_per_square_meter(0.25);
        assert_eq!((Force::from_newtons(200.0) * per_area).in_pascals(), 50.0);
        assert_eq!((per_area * Force::from_newtons(200.0)).in_pascals(), 50.0);
    }

    #[test]
    fn electrical() {
        let i = Current::from_milliamperes(20.0);
        let r = Resistance::from_kiloohms(1.0);
        let v: Voltage = r * i;
        assert_relative_eq!(v.in_volts(), 20.0, max_relative = 1e-6);
        assert_relative_eq!((i * r).in_volts(), 20.0, max_relative = 1e-6);
        assert_relative_eq!((v / i).in_ohms(), 1000.0, max_relative = 1e-6);
        assert_relative_eq!((v / r).in_milliamperes(), 20.0, max_relative = 1e-6);

        let p: Power = v * i;
        assert_relative_eq!(p.in_watts(), 0.4, max_relative = 1e-6);
        assert_relative_eq!((p / v).in_amperes(), 0.02, max_relative = 1e-6);
        assert_relative_eq!((p / i).in_volts(), 20.0, max_relative = 1e-6);

        let c = Capacitance::from_microfarads(4.7);
        let q: Charge = c * Voltage::from_volts(10.0);
        assert_relative_eq!(q.in_microcoulombs(), 47.0, max_relative = 1e-5);
        assert_relative_eq!((q / Voltage::from_volts(10.0)).in_microfarads(), 4.7, max_relative = 1e-5);
        assert_relative_eq!((q / c).in_volts(), 10.0, max_relative = 1e-5);

        let q: Charge = Current::from_amperes(2.0) * Time::from_seconds(3.0);
        assert_eq!(q.in_coulombs(), 6.0);
        assert_eq!((q / Time::from_seconds(2.0)).in_amperes(), 3.0);
    }

    #[test]
    fn frequency_and_period() {
        let f = Frequency::from_hertz(50.0);
        let period: Time = 1.0 / f;
        assert_relative_eq!(period.in_milliseconds(), 20.0, max_relative = 1e-6);
        assert_relative_eq!((1.0 / period).in_hertz(), 50.0, max_relative = 1e-6);
        assert_relative_eq!(f * period, 1.0);
        assert_relative_eq!(period * f, 1.0);
        assert_relative_eq!(period.recip::<crate::frequency::FrequencyDim>().in_hertz(), 50.0, max_relative = 1e-6);
    }

    #[test]
    fn per_length() {
        let spacing = Length::from_centimeters(25.0);
        let density: LineicNumber = 1.0 / spacing;
        assert_relative_eq!(density.in_units_per_meter(), 4.0);
        assert_relative_eq!(spacing * density, 1.0);
        assert_relative_eq!((1.0 / density).in_centimeters(), 25.0, max_relative = 1e-6);

        let linear: LinearDensity = spacing.recip::<LinearDensityDim>();
        assert_relative_eq!(linear.in_units_per_meter(), 4.0);
        assert_relative_eq!(linear * spacing, 1.0);
        assert_relative_eq!((1.0 / linear).in_meters(), 0.25);
        assert_relative_eq!(linear.recip::<LengthDim>().in_meters(), 0.25);

        let n = LinearNumberDensity::from_units_per_millimeter(2.0);
        assert_relative_eq!((1.0 / n).in_millimeters(), 0.5, max_relative = 1e-6);
    }

    #[test]
    fn per_area_and_volume() {
        let cell = Area::from_square_centimeters(4.0);
        let per_area: AreicNumber = 1.0 / cell;
        assert_relative_eq!(per_area.in_units_per_square_centimeter(), 0.25, max_relative = 1e-6);
        assert_relative_eq!(cell * per_area, 1.0, max_relative = 1e-6);
        assert_relative_eq!(cell.recip::<AreicNumberDim>().in_units_per_square_meter(), 2500.0, max_relative = 1e-6);

        let surface: SurfaceNumberDensity = cell.recip::<SurfaceNumberDensityDim>();
        assert_relative_eq!(surface * cell, 1.0, max_relative = 1e-6);
        assert_relative_eq!((1.0 / surface).in_square_centimeters(), 4.0, max_relative = 1e-6);

        let box_volume = Volume::from_liters(2.0);
        let per_volume: VolumicNumber = 1.0 / box_volume;
        assert_relative_eq!(per_volume.in_units_per_liter(), 0.5, max_relative = 1e-6);
        assert_relative_eq!(box_volume * per_volume, 1.0, max_relative = 1e-6);
        assert_relative_eq!((1.0 / per_volume).in_liters(), 2.0, max_relative = 1e-6);
    }

    #[test]
    fn mixed_reciprocal_products() {
        let path = Length::from_meters(2.0);
        let lineic: LineicNumber = path * AreicNumber::from_units_per_square_meter(3.0);
        assert_eq!(lineic.in_units_per_meter(), 6.0);
        let linear: LinearNumberDensity = SurfaceNumberDensity::from_units_per_square_meter(3.0) * path;
        assert_eq!(linear.in_units_per_meter(), 6.0);
        let from_volume: LineicNumber = path * VolumicNumber::from_units_per_cubic_meter(5.0);
        assert_eq!(from_volume.in_units_per_meter(), 10.0);
    }

    #[test]
    fn unknown_and_zero_division() {
        assert!((Length::UNKNOWN * Length::from_meters(1.0)).is_unknown());
        assert!((Voltage::from_volts(1.0) / Current::UNKNOWN).is_unknown());
        let r = Voltage::from_volts(1.0) / Current::ZERO;
        assert!(!r.is_unknown());
        assert!(!r.is_finite());
        assert!((Voltage::ZERO / Current::ZERO).is_unknown());
    }

    proptest! {
        #[test]
        fn prop_ohms_law_commutes(r in 0.001f32..1e6, i in 0.001f32..1e3) {
            let r = Resistance::from_ohms(r);
            let i = Current::from_amperes(i);
            prop_assert_eq!((r * i).in_volts(), (i * r).in_volts());
            let back = (r * i) / i;
            prop_assert!((back.in_ohms() - r.in_ohms()).abs() <= r.in_ohms() * 1e-5);
        }

        #[test]
        fn prop_reciprocal_identity(l in 1e-6f32..1e6) {
            let l = Length::from_meters(l);
            let inv: LineicNumber = 1.0 / l;
            prop_assert!((l * inv - 1.0).abs() <= 1e-6);
            let back: Length = 1.0 / inv;
            prop_assert!((back.in_meters() - l.in_meters()).abs() <= l.in_meters() * 1e-6);
        }

        #[test]
        fn prop_charge_identities(c in 1e-9f32..1.0, v in 0.1f32..1e3, t in 0.1f32..1e3) {
            let c = Capacitance::from_farads(c);
            let v = Voltage::from_volts(v);
            prop_assert_eq!((c * v).in_coulombs(), (v * c).in_coulombs());
            let i = Current::from_amperes(1.5);
            let t = Time::from_seconds(t);
            prop_assert_eq!((i * t).in_coulombs(), (t * i).in_coulombs());
        }
    }
}
