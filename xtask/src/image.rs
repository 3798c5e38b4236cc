use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::profile::{facade_features, target_triple, ProfileArgs};
use crate::sh::{ShOptionsBuilder, StreamMode};

/// Cross-build the facade as a static archive and verify its symbols
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Build with the dev profile instead of release
    #[arg(long)]
    pub debug: bool,

    /// Stop after building; do not check the archive's symbols
    #[arg(long = "no-verify")]
    pub no_verify: bool,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let profile = args.profile.profile()?;
    let root = crate::findup::workspace_root()?;
    let target = target_triple(&profile);
    let features = facade_features(&profile).join(",");
    let (flag, dir) = if args.debug {
        ("", "debug")
    } else {
        ("--release", "release")
    };

    log::info!("building picobase for {target} [{features}]");
    let opts = ShOptionsBuilder::default()
        .cwd(Some(root.clone()))
        .stdout(StreamMode::Inherit)
        .build()?;
    crate::sh!(
        options(opts),
        format!(
            "cargo rustc -p picobase --crate-type staticlib --target {target} \
             --no-default-features --features {features} {flag}"
        )
    )?;

    let archive: PathBuf = root
        .join("target")
        .join(target)
        .join(dir)
        .join("libpicobase.a");
    println!("{}", archive.display());

    if args.no_verify {
        return Ok(());
    }

    crate::symbols::run(crate::symbols::SymbolsArgs {
        profile: args.profile,
        elf: Some(archive),
    })
}
