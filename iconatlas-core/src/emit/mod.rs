//! Rendering of the generated lookup module.
//!
//! Output is plain Rust source: an enum whose discriminants are the table
//! ranks, a `TEXCOORDS` table indexed by discriminant, and accessors. The
//! text depends only on the table and options, so re-running on the same
//! manifest reproduces it byte for byte.

use std::io::Write;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coords::AtlasDimension;
use crate::error::AtlasError;
use crate::naming::is_identifier;
use crate::order::IconTable;

pub const HEADER: &str = "// generated by iconatlas; DO NOT EDIT\n";

/// Names the generated module uses for its own items.
const RESERVED_VALUES: [&str; 2] = ["TEXCOORDS", "NAMES"];
const RESERVED_MEMBERS: [&str; 4] = ["COUNT", "ALL", "texcoords", "name"];

/// Primitive types the generated code refers to by bare name.
const PRIMITIVES: [&str; 17] = [
    "bool", "char", "str", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    pub enum_name: String,
    /// Free function `fn <accessor>(icon) -> (f32, f32)`.
    pub accessor: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            enum_name: "Icon".into(),
            accessor: "lookup".into(),
        }
    }
}

impl EmitOptions {
    pub fn validate(&self) -> Result<(), AtlasError> {
        if !is_identifier(&self.enum_name) || PRIMITIVES.contains(&self.enum_name.as_str()) {
            return Err(AtlasError::EmitOption(format!(
                "enum name `{}` is not usable",
                self.enum_name
            )));
        }
        if !is_identifier(&self.accessor) || RESERVED_VALUES.contains(&self.accessor.as_str()) {
            return Err(AtlasError::EmitOption(format!(
                "accessor `{}` is not usable",
                self.accessor
            )));
        }
        Ok(())
    }
}

/// Render `table` as Rust source. `manifest` is the manifest file name
/// recorded in the header.
pub fn render(
    table: &IconTable,
    manifest: &str,
    dim: AtlasDimension,
    opts: &EmitOptions,
) -> Result<String, AtlasError> {
    opts.validate()?;
    if let Some(e) = table.iter().find(|e| RESERVED_MEMBERS.contains(&e.name.as_str())) {
        return Err(AtlasError::EmitOption(format!(
            "icon #{} `{}` derives the reserved name `{}`",
            e.source, e.raw_name, e.name
        )));
    }

    let ty = &opts.enum_name;
    let n = table.len();
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(&format!("// source: {}\n", manifest.replace('\n', " ")));
    let plural = if n == 1 { "" } else { "s" };
    out.push_str(&format!("// atlas: {}px, {} icon{}\n\n", dim.get(), n, plural));

    out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    if table.is_empty() {
        out.push_str(&format!("pub enum {} {{}}\n\n", ty));
    } else {
        out.push_str("#[repr(u32)]\n");
        out.push_str(&format!("pub enum {} {{\n", ty));
        for (i, e) in table.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("    {} = 0,\n", e.name));
            } else {
                out.push_str(&format!("    {},\n", e.name));
            }
        }
        out.push_str("}\n\n");

        out.push_str(&format!("static TEXCOORDS: [[f32; 2]; {}] = [\n", n));
        for e in table.iter() {
            out.push_str(&format!("    [{:?}, {:?}],\n", e.coord.x, e.coord.y));
        }
        out.push_str("];\n\n");

        out.push_str(&format!("static NAMES: [&str; {}] = [\n", n));
        for e in table.iter() {
            out.push_str(&format!("    {:?},\n", e.name));
        }
        out.push_str("];\n\n");
    }

    out.push_str(&format!("impl {} {{\n", ty));
    out.push_str(&format!("    pub const COUNT: usize = {};\n\n", n));
    if table.is_empty() {
        out.push_str(&format!("    pub const ALL: [{}; 0] = [];\n\n", ty));
    } else {
        out.push_str(&format!("    pub const ALL: [{}; {}] = [\n", ty, n));
        for e in table.iter() {
            out.push_str(&format!("        {}::{},\n", ty, e.name));
        }
        out.push_str("    ];\n\n");
    }
    let (texcoords_body, name_body) = if table.is_empty() {
        ("        match self {}\n", "        match self {}\n")
    } else {
        (
            "        let tc = TEXCOORDS[self as usize];\n        (tc[0], tc[1])\n",
            "        NAMES[self as usize]\n",
        )
    };
    out.push_str("    /// Unit coordinates of the icon's top-left corner in the atlas.\n");
    out.push_str("    pub fn texcoords(self) -> (f32, f32) {\n");
    out.push_str(texcoords_body);
    out.push_str("    }\n\n");
    out.push_str("    pub fn name(self) -> &'static str {\n");
    out.push_str(name_body);
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("pub fn {}(icon: {}) -> (f32, f32) {{\n", opts.accessor, ty));
    out.push_str("    icon.texcoords()\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl ::core::fmt::Display for {} {{\n", ty));
    out.push_str("    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>)");
    out.push_str(" -> ::core::fmt::Result {\n");
    out.push_str("        f.write_str(self.name())\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    // Members may be named `Err`, so the signature spells the error type out.
    const RESULT: &str = "::core::result::Result";
    out.push_str(&format!("impl ::core::str::FromStr for {} {{\n", ty));
    out.push_str("    type Err = &'static str;\n\n");
    let arg = if table.is_empty() { "_s" } else { "s" };
    out.push_str(&format!(
        "    fn from_str({}: &str) -> {}<Self, &'static str> {{\n",
        arg, RESULT
    ));
    if table.is_empty() {
        out.push_str(&format!("        {}::Err(\"unknown icon\")\n", RESULT));
    } else {
        out.push_str("        match NAMES.binary_search(&s) {\n");
        out.push_str(&format!("            {0}::Ok(i) => {0}::Ok(Self::ALL[i]),\n", RESULT));
        out.push_str(&format!(
            "            {0}::Err(_) => {0}::Err(\"unknown icon\"),\n",
            RESULT
        ));
        out.push_str("        }\n");
    }
    out.push_str("    }\n");
    out.push_str("}\n");

    syn::parse_file(&out).map_err(|e| AtlasError::Render(e.to_string()))?;
    Ok(out)
}

/// Replace `path` with `source`. A failed write leaves any previous artifact in place.
pub fn write_artifact(path: &Path, source: &str) -> Result<(), AtlasError> {
    let err = |source| AtlasError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".iconatlas")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(err)?;
    tmp.write_all(source.as_bytes()).map_err(err)?;
    tmp.as_file().sync_all().map_err(err)?;
    tmp.persist(path).map_err(|e| err(e.error))?;
    debug!("wrote {} bytes to {}", source.len(), path.display());
    Ok(())
}
