//! Human-readable rendering of quantities.
//!
//! Three display styles cover every predefined quantity:
//!
//! - [`DisplayStyle::Ladder`]: a per-quantity table of display units, scanned from the largest to the smallest
//!   (Length picks km/m/cm/mm/µm/nm, Pressure picks GPa/MPa/bar/kPa/Pa/mPa/µPa, …).
//! - [`DisplayStyle::Si`]: the SI magnitude formatter, which picks a prefix between pico and Peta
//!   ([`format_simple_si_value`]).
//! - [`DisplayStyle::PerUnit`]: a plain number followed by a suffix such as `/m²`.
//!
//! Mantissas are always rendered like C's `%g` (see [`format_g`]).

use crate::unit::Unit;
use core::fmt::{self, Write};

/// How a dimension renders its values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayStyle {
    /// Pick the first rung whose threshold the magnitude equals or exceeds.
    ///
    /// `base` is printed for unknown and zero values. The last rung is the fallback for anything smaller than every
    /// other threshold.
    Ladder {
        /// Symbol of the base unit.
        base: &'static str,
        /// Display units, largest first.
        rungs: &'static [Rung],
    },
    /// SI prefix selection around a single unit label.
    Si {
        /// Unit label the prefix is attached to.
        unit: &'static str,
    },
    /// `%g` followed by a suffix, e.g. `1.5/m²`.
    PerUnit {
        /// Text appended after the number.
        suffix: &'static str,
    },
}

/// One display unit of a [`DisplayStyle::Ladder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rung {
    /// Smallest magnitude, in base units, rendered with this rung.
    pub threshold: f32,
    /// Base units per one display unit.
    pub ratio: f64,
    /// Printed unit symbol.
    pub symbol: &'static str,
}

impl Rung {
    /// A rung displaying unit `U` for magnitudes of at least `threshold` base units.
    pub const fn new<U: Unit>(threshold: f32) -> Self {
        Self {
            threshold,
            ratio: U::RATIO,
            symbol: U::SYMBOL,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// %g emulation
// ─────────────────────────────────────────────────────────────────────────────

/// Significant digits printed by `%g`.
const G_PRECISION: i32 = 6;

/// Writes `value` the way C's `printf("%g", value)` does.
///
/// Six significant digits, trailing zeros removed, scientific notation (`1.5e+06`) when the decimal exponent is below
/// -4 or at least 6.
pub fn write_g<W: Write + ?Sized>(w: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return w.write_str("nan");
    }
    if value.is_infinite() {
        return w.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return w.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // The exponent has to be taken after rounding to the target precision: 999999.5 becomes 1e+06.
    let scientific = format!("{:.*e}", (G_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return w.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if exponent < -4 || exponent >= G_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            w,
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (G_PRECISION - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        w.write_str(trim_fraction(&fixed))
    }
}

/// Renders `value` the way C's `printf("%g", value)` does.
///
/// ```rust
/// use siqty_core::format::format_g;
///
/// assert_eq!(format_g(1.5), "1.5");
/// assert_eq!(format_g(1500000.0), "1.5e+06");
/// assert_eq!(format_g(0.0001), "0.0001");
/// assert_eq!(format_g(0.00001), "1e-05");
/// ```
pub fn format_g(value: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_g(&mut out, value);
    out
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI magnitude formatter
// ─────────────────────────────────────────────────────────────────────────────

struct SiPrefix {
    threshold: f32,
    factor: f64,
    symbol: &'static str,
}

/// Largest first. Thresholds are `f32` so that boundary values compare exactly as the stored magnitudes do.
const SI_PREFIXES: [SiPrefix; 10] = [
    SiPrefix { threshold: 1e15, factor: 1e-15, symbol: "P" },
    SiPrefix { threshold: 1e12, factor: 1e-12, symbol: "T" },
    SiPrefix { threshold: 1e9, factor: 1e-9, symbol: "G" },
    SiPrefix { threshold: 1e6, factor: 1e-6, symbol: "M" },
    SiPrefix { threshold: 1e3, factor: 1e-3, symbol: "k" },
    SiPrefix { threshold: 1.0, factor: 1.0, symbol: "" },
    SiPrefix { threshold: 1e-3, factor: 1e3, symbol: "m" },
    SiPrefix { threshold: 1e-6, factor: 1e6, symbol: "µ" },
    SiPrefix { threshold: 1e-9, factor: 1e9, symbol: "n" },
    SiPrefix { threshold: 0.0, factor: 1e12_f32 as f64, symbol: "p" },
];

/// Writes `value` with the SI prefix that brings its mantissa into `[1, 1000)`.
///
/// - NaN renders as `? <unit>`.
/// - Exactly zero renders as `0 <unit>`.
/// - Infinity renders as `∞ <unit>` or `-∞ <unit>`.
/// - Every other value renders as `[-]<%g mantissa> <prefix><unit>`, with prefixes from `p` to `P`. A magnitude
///   exactly on a threshold (e.g. `1000.0`) takes the higher prefix.
pub fn write_simple_si_value<W: Write + ?Sized>(
    w: &mut W,
    value: f32,
    base_unit: &str,
) -> fmt::Result {
    if value.is_nan() {
        return write!(w, "? {}", base_unit);
    }
    if value == 0.0 {
        return write!(w, "0 {}", base_unit);
    }
    let (sign, magnitude) = split_sign(value);
    if magnitude.is_infinite() {
        return write!(w, "{}∞ {}", sign, base_unit);
    }

    let prefix = SI_PREFIXES
        .iter()
        .find(|prefix| magnitude >= prefix.threshold)
        .unwrap_or(&SI_PREFIXES[SI_PREFIXES.len() - 1]);
    let mantissa = (f64::from(magnitude) * prefix.factor) as f32;

    w.write_str(sign)?;
    write_g(w, f64::from(mantissa))?;
    write!(w, " {}{}", prefix.symbol, base_unit)
}

/// Renders `value` with the SI prefix that brings its mantissa into `[1, 1000)`.
///
/// ```rust
/// use siqty_core::format::format_simple_si_value;
///
/// assert_eq!(format_simple_si_value(1243.3, "V"), "1.2433 kV");
/// assert_eq!(format_simple_si_value(0.0, "A"), "0 A");
/// assert_eq!(format_simple_si_value(-0.032, "A"), "-32 mA");
/// assert_eq!(format_simple_si_value(f32::NAN, "A"), "? A");
/// ```
pub fn format_simple_si_value(value: f32, base_unit: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_simple_si_value(&mut out, value, base_unit);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Style dispatch
// ─────────────────────────────────────────────────────────────────────────────

/// Writes a base-unit magnitude according to `style`.
pub fn write_styled<W: Write + ?Sized>(w: &mut W, value: f32, style: &DisplayStyle) -> fmt::Result {
    match *style {
        DisplayStyle::Ladder { base, rungs } => write_ladder(w, value, base, rungs),
        DisplayStyle::Si { unit } => write_simple_si_value(w, value, unit),
        DisplayStyle::PerUnit { suffix } => {
            if value.is_nan() {
                write!(w, "?{}", suffix)
            } else {
                write_g(w, f64::from(value))?;
                w.write_str(suffix)
            }
        }
    }
}

fn write_ladder<W: Write + ?Sized>(
    w: &mut W,
    value: f32,
    base: &str,
    rungs: &[Rung],
) -> fmt::Result {
    if value.is_nan() {
        return write!(w, "? {}", base);
    }
    if value == 0.0 {
        return write!(w, "0 {}", base);
    }
    let (sign, magnitude) = split_sign(value);

    // Infinity lands on the first rung.
    let Some(rung) = rungs
        .iter()
        .find(|rung| magnitude >= rung.threshold)
        .or_else(|| rungs.last())
    else {
        w.write_str(sign)?;
        write_g(w, f64::from(magnitude))?;
        return write!(w, " {}", base);
    };
    let scaled = (f64::from(magnitude) / rung.ratio) as f32;

    w.write_str(sign)?;
    write_g(w, f64::from(scaled))?;
    write!(w, " {}", rung.symbol)
}

fn split_sign(value: f32) -> (&'static str, f32) {
    if value < 0.0 {
        ("-", -value)
    } else {
        ("", value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounded output
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of [`write_truncated`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Written {
    /// Bytes written, not counting the trailing NUL.
    pub len: usize,
    /// `true` if the rendering did not fit and was cut short.
    pub truncated: bool,
}

impl Written {
    /// The written text, borrowed from the buffer passed to [`write_truncated`].
    pub fn as_str<'a>(&self, buf: &'a [u8]) -> &'a str {
        buf.get(..self.len)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .unwrap_or("")
    }
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        // One byte is always kept for the NUL terminator.
        let capacity = self.buf.len().saturating_sub(1);
        for c in s.chars() {
            let width = c.len_utf8();
            if self.len + width > capacity {
                self.truncated = true;
                break;
            }
            c.encode_utf8(&mut self.buf[self.len..self.len + width]);
            self.len += width;
        }
        Ok(())
    }
}

/// Renders `value` into `buf` like `snprintf`: output is cut at the last whole character that fits, and a NUL byte
/// follows the text whenever `buf` is non-empty.
///
/// ```rust
/// use siqty_core::format::write_truncated;
///
/// let mut buf = [0xffu8; 6];
/// let written = write_truncated(&mut buf, &"1.5 µm");
/// assert_eq!(written.as_str(&buf), "1.5 ");
/// assert!(written.truncated);
/// assert_eq!(buf[written.len], 0);
/// ```
pub fn write_truncated<T: fmt::Display + ?Sized>(buf: &mut [u8], value: &T) -> Written {
    let empty = buf.is_empty();
    let mut writer = SliceWriter {
        buf,
        len: 0,
        truncated: false,
    };
    let failed = write!(writer, "{}", value).is_err();
    let SliceWriter { buf, len, truncated } = writer;
    if let Some(terminator) = buf.get_mut(len) {
        *terminator = 0;
    }
    Written {
        len,
        truncated: truncated || failed || empty,
    }
}

/// Capacity of a [`ShortString`], terminator included.
pub const SHORT_STRING_CAPACITY: usize = 16;

/// A rendering held on the stack in [`SHORT_STRING_CAPACITY`] bytes.
///
/// Longer renderings are cut at the last whole character that fits in 15 bytes.
#[derive(Clone, Copy)]
pub struct ShortString {
    buf: [u8; SHORT_STRING_CAPACITY],
    written: Written,
}

impl ShortString {
    /// Renders `value` into a new short string.
    pub fn new<T: fmt::Display + ?Sized>(value: &T) -> Self {
        let mut buf = [0u8; SHORT_STRING_CAPACITY];
        let written = write_truncated(&mut buf, value);
        Self { buf, written }
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        self.written.as_str(&self.buf)
    }

    /// `true` if the rendering was cut short.
    pub fn is_truncated(&self) -> bool {
        self.written.truncated
    }
}

impl core::ops::Deref for ShortString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for ShortString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for ShortString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for ShortString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_down(x: f32) -> f32 {
        f32::from_bits(x.to_bits() - 1)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // %g
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn g_strips_trailing_zeros() {
        assert_eq!(format_g(1.0), "1");
        assert_eq!(format_g(1.5), "1.5");
        assert_eq!(format_g(150.3), "150.3");
        assert_eq!(format_g(-2.0), "-2");
    }

    #[test]
    fn g_rounds_to_six_significant_digits() {
        assert_eq!(format_g(1.23456789), "1.23457");
        assert_eq!(format_g(543.2221), "543.222");
        assert_eq!(format_g(123456.7), "123457");
    }

    #[test]
    fn g_switches_to_scientific_notation() {
        assert_eq!(format_g(1.5e6), "1.5e+06");
        assert_eq!(format_g(1.5e9), "1.5e+09");
        assert_eq!(format_g(1.5e-6), "1.5e-06");
        assert_eq!(format_g(2.5e-5), "2.5e-05");
        assert_eq!(format_g(1e100), "1e+100");
    }

    #[test]
    fn g_keeps_fixed_notation_down_to_1e_minus_4() {
        assert_eq!(format_g(0.0015), "0.0015");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(999999.0), "999999");
    }

    #[test]
    fn g_uses_exponent_after_rounding() {
        assert_eq!(format_g(999999.5), "1e+06");
        assert_eq!(format_g(0.000099999999), "0.0001");
    }

    #[test]
    fn g_special_values() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
        assert_eq!(format_g(f64::INFINITY), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_g(f64::NAN), "nan");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // SI formatter
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn si_literal_vectors() {
        let cases: &[(f32, &str, &str)] = &[
            (0.0, "A", "0 A"),
            (0.032, "A", "32 mA"),
            (0.0324, "A", "32.4 mA"),
            (1243.3, "V", "1.2433 kV"),
            (4.7e-6, "F", "4.7 µF"),
            (1e-9, "F", "1 nF"),
            (2.2e-12, "F", "2.2 pF"),
            (6.8e-15, "F", "0.0068 pF"),
            (1e6, "Pa", "1 MPa"),
            (54.3e9, "J", "54.3 GJ"),
            (54.3e12, "W", "54.3 TW"),
            (54.3e15, "W", "54.3 PW"),
            (5.43e19, "W", "54300 PW"),
            (0.003333, "m", "3.333 mm"),
            (-0.032, "A", "-32 mA"),
            (-543222.0, "V", "-543.222 kV"),
        ];
        for &(value, unit, expected) in cases {
            assert_eq!(format_simple_si_value(value, unit), expected, "{value:e} {unit}");
        }
    }

    #[test]
    fn si_unknown_and_infinite() {
        assert_eq!(format_simple_si_value(f32::NAN, "A"), "? A");
        assert_eq!(format_simple_si_value(f32::INFINITY, "A"), "∞ A");
        assert_eq!(format_simple_si_value(f32::NEG_INFINITY, "A"), "-∞ A");
    }

    #[test]
    fn si_negative_zero_is_zero() {
        assert_eq!(format_simple_si_value(-0.0, "V"), "0 V");
    }

    #[test]
    fn si_threshold_selects_higher_tier() {
        assert_eq!(format_simple_si_value(1000.0, "V"), "1 kV");
        assert_eq!(format_simple_si_value(999.999, "V"), "999.999 V");
        assert_eq!(format_simple_si_value(1.0, "V"), "1 V");
        assert_eq!(format_simple_si_value(1e6, "V"), "1 MV");
        assert_eq!(format_simple_si_value(1e9, "V"), "1 GV");
    }

    #[test]
    fn si_every_boundary_splits_tiers() {
        let boundaries: &[(f32, &str, &str)] = &[
            (1e15, "P", "T"),
            (1e12, "T", "G"),
            (1e9, "G", "M"),
            (1e6, "M", "k"),
            (1e3, "k", ""),
            (1.0, "", "m"),
            (1e-3, "m", "µ"),
            (1e-6, "µ", "n"),
            (1e-9, "n", "p"),
        ];
        for &(threshold, upper, lower) in boundaries {
            let at = format_simple_si_value(threshold, "X");
            assert!(at.ends_with(&format!(" {upper}X")), "{threshold:e} rendered as {at}");

            let below = format_simple_si_value(next_down(threshold), "X");
            assert!(
                below.ends_with(&format!(" {lower}X")),
                "{:e} rendered as {below}",
                next_down(threshold)
            );
        }
    }

    #[test]
    fn si_tiny_values_stay_in_pico() {
        assert_eq!(format_simple_si_value(1e-15, "F"), "0.001 pF");
        assert!(format_simple_si_value(f32::MIN_POSITIVE, "F").ends_with(" pF"));
    }

    #[test]
    fn si_writer_appends() {
        let mut out = String::from("U=");
        write_simple_si_value(&mut out, 230.0, "V").unwrap();
        assert_eq!(out, "U=230 V");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Big {}
    impl Unit for Big {
        const RATIO: f64 = 100.0;
        type Dim = crate::length::LengthDim;
        const SYMBOL: &'static str = "big";
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Small {}
    impl Unit for Small {
        const RATIO: f64 = 0.01;
        type Dim = crate::length::LengthDim;
        const SYMBOL: &'static str = "small";
    }

    const TEST_LADDER: DisplayStyle = DisplayStyle::Ladder {
        base: "b",
        rungs: &[Rung::new::<Big>(100.0), Rung::new::<Small>(0.0)],
    };

    fn styled(value: f32, style: &DisplayStyle) -> String {
        let mut out = String::new();
        write_styled(&mut out, value, style).unwrap();
        out
    }

    #[test]
    fn ladder_picks_first_matching_rung() {
        assert_eq!(styled(250.0, &TEST_LADDER), "2.5 big");
        assert_eq!(styled(100.0, &TEST_LADDER), "1 big");
        assert_eq!(styled(99.0, &TEST_LADDER), "9900 small");
    }

    #[test]
    fn ladder_handles_sign_zero_and_unknown() {
        assert_eq!(styled(-250.0, &TEST_LADDER), "-2.5 big");
        assert_eq!(styled(0.0, &TEST_LADDER), "0 b");
        assert_eq!(styled(f32::NAN, &TEST_LADDER), "? b");
    }

    #[test]
    fn ladder_does_not_special_case_infinity() {
        assert_eq!(styled(f32::INFINITY, &TEST_LADDER), "inf big");
        assert_eq!(styled(f32::NEG_INFINITY, &TEST_LADDER), "-inf big");
    }

    #[test]
    fn empty_ladder_falls_back_to_base() {
        let style = DisplayStyle::Ladder {
            base: "b",
            rungs: &[],
        };
        assert_eq!(styled(1.5, &style), "1.5 b");
    }

    #[test]
    fn per_unit_style() {
        let style = DisplayStyle::PerUnit { suffix: "/m²" };
        assert_eq!(styled(1.5, &style), "1.5/m²");
        assert_eq!(styled(1.5e6, &style), "1.5e+06/m²");
        assert_eq!(styled(-2.0, &style), "-2/m²");
        assert_eq!(styled(f32::NAN, &style), "?/m²");
        assert_eq!(styled(f32::INFINITY, &style), "inf/m²");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Bounded output
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn truncated_output_fits_and_is_terminated() {
        let mut buf = [0xffu8; 8];
        let written = write_truncated(&mut buf, &"1.2433 kV");
        assert!(written.truncated);
        assert_eq!(written.as_str(&buf), "1.2433 ");
        assert_eq!(buf[7], 0);
    }

    #[test]
    fn truncation_never_splits_a_character() {
        // "µ" is two bytes; only one is left after "4.7 ".
        let mut buf = [0u8; 6];
        let written = write_truncated(&mut buf, &"4.7 µF");
        assert_eq!(written.as_str(&buf), "4.7 ");
        assert_eq!(written.len, 4);
        assert!(written.truncated);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let mut buf = [0u8; 5];
        let written = write_truncated(&mut buf, &"0 kg");
        assert!(!written.truncated);
        assert_eq!(written.as_str(&buf), "0 kg");
        assert_eq!(buf[4], 0);
    }

    #[test]
    fn short_string_keeps_fifteen_bytes() {
        let short = ShortString::new(&"-543.222 kV and more");
        assert_eq!(short, "-543.222 kV and");
        assert_eq!(short.len(), 15);
        assert!(short.is_truncated());

        let fits = ShortString::new(&"32 mA");
        assert_eq!(fits.as_str(), "32 mA");
        assert!(!fits.is_truncated());
    }

    #[test]
    fn empty_buffer_reports_truncation() {
        let mut buf: [u8; 0] = [];
        let written = write_truncated(&mut buf, &"x");
        assert_eq!(written.len, 0);
        assert!(written.truncated);
    }
}
