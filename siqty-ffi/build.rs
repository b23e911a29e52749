use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const UNIT_TABLE: &str = "units.csv";
const GENERATED_BANNER: &str = "// Generated by build.rs from units.csv. Do not edit.\n";

/// One row of `units.csv`.
struct UnitRow {
    discriminant: u32,
    dimension: String,
    name: String,
    symbol: String,
    /// Kept as source text so expressions like `1.0 / 0.0254` survive into the registry.
    ratio: String,
}

/// A dimension, numbered by its first unit's block (`discriminant / 100`).
struct DimensionRow {
    name: String,
    discriminant: u32,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    println!("cargo:rerun-if-changed={UNIT_TABLE}");

    let table = fs::read_to_string(manifest_dir.join(UNIT_TABLE))
        .unwrap_or_else(|e| panic!("cannot read {UNIT_TABLE}: {e}"));
    let units: Vec<UnitRow> = table
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_row(index + 1, line))
        .collect();
    let dimensions = dimensions_of(&units);

    emit(&out_dir, "ids.rs", id_enums(&units, &dimensions));

    emit_match(&out_dir, "unit_names.rs", "self", &units, |u| {
        format!("UnitId::{} => \"{}\"", u.name, u.name)
    });
    emit_match(&out_dir, "unit_symbols.rs", "self", &units, |u| {
        format!("UnitId::{} => \"{}\"", u.name, u.symbol)
    });
    emit_match(&out_dir, "unit_names_cstr.rs", "self", &units, |u| {
        format!("UnitId::{} => c\"{}\".as_ptr()", u.name, u.name)
    });
    emit_match(&out_dir, "unit_symbols_cstr.rs", "self", &units, |u| {
        format!("UnitId::{} => c\"{}\".as_ptr()", u.name, u.symbol)
    });
    emit_match(&out_dir, "unit_registry.rs", "id", &units, |u| {
        format!(
            "UnitId::{} => Some(UnitMeta {{ dim: DimensionId::{}, scale_to_base: {}, name: \"{}\", symbol: \"{}\" }})",
            u.name, u.dimension, u.ratio, u.name, u.symbol
        )
    });

    let from_u32 = match_block("value", &units, Some("_ => None"), |u| {
        format!("{} => Some(UnitId::{})", u.discriminant, u.name)
    });
    emit(&out_dir, "unit_from_u32.rs", from_u32);

    emit_match(&out_dir, "dimension_styles.rs", "dim", &dimensions, |d| {
        format!(
            "DimensionId::{} => <siqty::{}::{}Dim as siqty::Dimension>::STYLE",
            d.name,
            snake_case(&d.name),
            d.name
        )
    });

    write_header(&manifest_dir, &out_dir);
}

/// Parses one CSV line; blank lines and `#` comments yield `None`.
fn parse_row(line_no: usize, line: &str) -> Option<UnitRow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [discriminant, dimension, name, symbol, ratio] = fields.as_slice() else {
        println!("cargo:warning={UNIT_TABLE}:{line_no}: expected 5 fields, skipping");
        return None;
    };

    Some(UnitRow {
        discriminant: discriminant
            .parse()
            .unwrap_or_else(|_| panic!("{UNIT_TABLE}:{line_no}: bad discriminant `{discriminant}`")),
        dimension: dimension.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        ratio: ratio.to_string(),
    })
}

fn dimensions_of(units: &[UnitRow]) -> Vec<DimensionRow> {
    let mut dimensions: Vec<DimensionRow> = Vec::new();
    for unit in units {
        if !dimensions.iter().any(|d| d.name == unit.dimension) {
            dimensions.push(DimensionRow {
                name: unit.dimension.clone(),
                discriminant: unit.discriminant / 100,
            });
        }
    }
    dimensions
}

/// `VolumeFlowRate` -> `volume_flow_rate`, the module holding that dimension.
fn snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for (i, c) in camel.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

fn id_enums(units: &[UnitRow], dimensions: &[DimensionRow]) -> String {
    let mut code = String::from(GENERATED_BANNER);

    code.push_str(
        "/// Unit identifier for FFI.\n///\n/// Discriminants are part of the ABI contract.\n\
         #[repr(u32)]\n#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]\npub enum UnitId {\n",
    );
    for u in units {
        let _ = writeln!(code, "    /// {} (`{}`)\n    {} = {},", u.name, u.symbol, u.name, u.discriminant);
    }
    code.push_str("}\n\n");

    code.push_str(
        "/// Dimension identifier for FFI.\n///\n/// Discriminants are part of the ABI contract.\n\
         #[repr(u32)]\n#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]\npub enum DimensionId {\n",
    );
    for d in dimensions {
        let _ = writeln!(code, "    /// {}\n    {} = {},", d.name, d.name, d.discriminant);
    }
    code.push_str("}\n");
    code
}

/// A `match <scrutinee> { ... }` expression with one arm per row and an optional last arm.
fn match_block<T>(scrutinee: &str, rows: &[T], last: Option<&str>, arm: impl Fn(&T) -> String) -> String {
    let mut code = String::from(GENERATED_BANNER);
    let _ = writeln!(code, "match {scrutinee} {{");
    for row in rows {
        let _ = writeln!(code, "    {},", arm(row));
    }
    if let Some(last) = last {
        let _ = writeln!(code, "    {last},");
    }
    code.push_str("}\n");
    code
}

fn emit_match<T>(out_dir: &Path, file: &str, scrutinee: &str, rows: &[T], arm: impl Fn(&T) -> String) {
    emit(out_dir, file, match_block(scrutinee, rows, None, arm));
}

fn emit(out_dir: &Path, file: &str, code: String) {
    fs::write(out_dir.join(file), code).unwrap_or_else(|e| panic!("cannot write {file}: {e}"));
}

/// Writes `include/siqty_ffi.h`. Failures only warn, so a missing header never breaks a Rust build.
fn write_header(manifest_dir: &Path, out_dir: &Path) {
    if env::var_os("DOCS_RS").is_some() {
        return;
    }

    let include_dir = manifest_dir.join("include");
    if let Err(e) = fs::create_dir_all(&include_dir) {
        println!("cargo:warning=cannot create {}: {e}", include_dir.display());
        return;
    }

    let config = match cbindgen::Config::from_file(manifest_dir.join("cbindgen.toml")) {
        Ok(config) => config,
        Err(e) => {
            println!("cargo:warning=cannot read cbindgen.toml: {e}");
            return;
        }
    };

    // The id enums live in OUT_DIR behind `include!`, which cbindgen does not follow.
    let generated = cbindgen::Builder::new()
        .with_crate(manifest_dir)
        .with_src(out_dir.join("ids.rs"))
        .with_config(config)
        .generate();

    match generated {
        Ok(bindings) => {
            bindings.write_to_file(include_dir.join("siqty_ffi.h"));
            println!("cargo:rerun-if-changed=src/");
            println!("cargo:rerun-if-changed=cbindgen.toml");
        }
        Err(e) => println!("cargo:warning=C header not generated: {e}"),
    }
}
