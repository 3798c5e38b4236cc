use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use foundation::contract::{Symbol, SymbolKind};
use object::read::archive::ArchiveFile;
use object::{Object, ObjectSymbol};

use crate::profile::ProfileArgs;

/// Print the symbols a profile must export, or check them against an image
#[derive(Args, Debug)]
pub struct SymbolsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// ELF object or static archive to verify
    #[arg(long)]
    pub elf: Option<PathBuf>,
}

/// Defined global symbols of an image, by name.
pub type SymbolMap = BTreeMap<String, object::SymbolKind>;

pub fn run(args: SymbolsArgs) -> Result<()> {
    let profile = args.profile.profile()?;
    let expected: Vec<&Symbol> = profile.symbols().collect();

    let Some(path) = args.elf else {
        for s in &expected {
            println!("{:<10} {:<9} {}", format!("{:?}", s.layer), kind_name(s.kind), s.name);
        }
        return Ok(());
    };

    let defined = read_defined_symbols(&path)?;
    log::info!(
        "{}: {} defined global symbols",
        path.display(),
        defined.len()
    );

    let missing = verify(&expected, &defined);
    if !missing.is_empty() {
        for name in &missing {
            eprintln!("missing: {name}");
        }
        bail!(
            "{} of {} symbols missing from {}",
            missing.len(),
            expected.len(),
            path.display()
        );
    }

    println!("ok: {} symbols present in {}", expected.len(), path.display());
    Ok(())
}

fn kind_name(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Function => "function",
        SymbolKind::Data => "data",
    }
}

/// Names from `expected` that `defined` lacks. A kind mismatch is only
/// logged, since assemblers do not always tag symbol types.
pub fn verify(expected: &[&Symbol], defined: &SymbolMap) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for s in expected {
        match defined.get(s.name) {
            None => missing.push(s.name),
            Some(kind) => {
                let matches = match s.kind {
                    SymbolKind::Function => *kind == object::SymbolKind::Text,
                    SymbolKind::Data => *kind == object::SymbolKind::Data,
                };
                if !matches {
                    log::warn!("{}: expected {}, found {:?}", s.name, kind_name(s.kind), kind);
                }
            }
        }
    }
    missing
}

pub fn read_defined_symbols(path: &Path) -> Result<SymbolMap> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let mut symbols = SymbolMap::new();

    if let Ok(archive) = ArchiveFile::parse(&*data) {
        for member in archive.members() {
            let member = member.context("reading archive member")?;
            let name = String::from_utf8_lossy(member.name()).into_owned();
            let bytes = member.data(&*data)?;
            // rlibs carry metadata members that are not objects.
            match object::File::parse(bytes) {
                Ok(file) => collect(&file, &mut symbols),
                Err(e) => log::debug!("skipping member {name}: {e}"),
            }
        }
    } else {
        let file = object::File::parse(&*data)
            .with_context(|| format!("parsing {}", path.display()))?;
        collect(&file, &mut symbols);
    }

    Ok(symbols)
}

fn collect<'data>(file: &object::File<'data>, out: &mut SymbolMap) {
    for sym in file.symbols() {
        if sym.is_undefined() || !sym.is_global() {
            continue;
        }
        if let Ok(name) = sym.name() {
            out.insert(name.to_string(), sym.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::contract::{Arch, Chip, Profile};

    fn profile() -> Profile {
        Profile {
            arch: Arch::Arm,
            chip: Chip::Rp2040,
            libc: true,
            runtime: true,
            gpio_coproc: false,
        }
    }

    #[test]
    fn reports_missing_symbols() {
        let p = profile();
        let expected: Vec<&Symbol> = p.symbols().collect();
        let mut defined = SymbolMap::new();
        for s in &expected {
            if s.name != "malloc" && s.name != "__wfi" {
                let kind = match s.kind {
                    SymbolKind::Function => object::SymbolKind::Text,
                    SymbolKind::Data => object::SymbolKind::Data,
                };
                defined.insert(s.name.to_string(), kind);
            }
        }
        let mut missing = verify(&expected, &defined);
        missing.sort_unstable();
        assert_eq!(missing, ["__wfi", "malloc"]);
    }

    #[test]
    fn kind_mismatch_is_not_missing() {
        let p = profile();
        let expected: Vec<&Symbol> = p.symbols().collect();
        let defined: SymbolMap = expected
            .iter()
            .map(|s| (s.name.to_string(), object::SymbolKind::Unknown))
            .collect();
        assert!(verify(&expected, &defined).is_empty());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        assert!(read_defined_symbols(Path::new("/nonexistent/image.elf")).is_err());
    }
}
