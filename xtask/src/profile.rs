use clap::{Args, ValueEnum};
use foundation::contract::{Arch, Chip, Profile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArchArg {
    Arm,
    Riscv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChipArg {
    Rp2040,
    Rp2350,
}

/// Build profile shared by the subcommands.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Instruction set of the intrinsics backend
    #[arg(long, value_enum)]
    pub arch: ArchArg,

    /// Chip generation
    #[arg(long, value_enum)]
    pub chip: ChipArg,

    /// Include the GPIO coprocessor layer (RP2350 Arm only)
    #[arg(long = "gpio-coproc")]
    pub gpio_coproc: bool,

    /// Leave out the libc stub layer
    #[arg(long = "no-libc")]
    pub no_libc: bool,
}

impl ProfileArgs {
    pub fn profile(&self) -> anyhow::Result<Profile> {
        let profile = Profile {
            arch: match self.arch {
                ArchArg::Arm => Arch::Arm,
                ArchArg::Riscv => Arch::Riscv,
            },
            chip: match self.chip {
                ChipArg::Rp2040 => Chip::Rp2040,
                ChipArg::Rp2350 => Chip::Rp2350,
            },
            libc: !self.no_libc,
            runtime: true,
            gpio_coproc: self.gpio_coproc,
        };
        profile.validate().map_err(anyhow::Error::msg)?;
        Ok(profile)
    }
}

/// Rust target triple for a profile.
pub fn target_triple(profile: &Profile) -> &'static str {
    match (profile.arch, profile.chip) {
        (Arch::Arm, Chip::Rp2040) => "thumbv6m-none-eabi",
        (Arch::Arm, Chip::Rp2350) => "thumbv8m.main-none-eabihf",
        (Arch::Riscv, _) => "riscv32imac-unknown-none-elf",
    }
}

/// Facade features that select a profile.
pub fn facade_features(profile: &Profile) -> Vec<&'static str> {
    let mut features = vec![
        match profile.arch {
            Arch::Arm => "arch-arm",
            Arch::Riscv => "arch-riscv",
        },
        match profile.chip {
            Chip::Rp2040 => "rp2040",
            Chip::Rp2350 => "rp2350",
        },
        "panic",
    ];
    if profile.libc {
        features.push("libc-minimal");
    }
    if profile.gpio_coproc {
        features.push("gpio-coproc");
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(arch: ArchArg, chip: ChipArg, gpio_coproc: bool) -> ProfileArgs {
        ProfileArgs {
            arch,
            chip,
            gpio_coproc,
            no_libc: false,
        }
    }

    #[test]
    fn rejects_impossible_profiles() {
        assert!(args(ArchArg::Riscv, ChipArg::Rp2040, false).profile().is_err());
        assert!(args(ArchArg::Arm, ChipArg::Rp2040, true).profile().is_err());
        assert!(args(ArchArg::Riscv, ChipArg::Rp2350, true).profile().is_err());
    }

    #[test]
    fn maps_profiles_to_targets() {
        let m0 = args(ArchArg::Arm, ChipArg::Rp2040, false).profile().unwrap();
        let m33 = args(ArchArg::Arm, ChipArg::Rp2350, true).profile().unwrap();
        let hazard3 = args(ArchArg::Riscv, ChipArg::Rp2350, false).profile().unwrap();

        assert_eq!(target_triple(&m0), "thumbv6m-none-eabi");
        assert_eq!(target_triple(&m33), "thumbv8m.main-none-eabihf");
        assert_eq!(target_triple(&hazard3), "riscv32imac-unknown-none-elf");
    }

    #[test]
    fn features_follow_profile() {
        let m33 = args(ArchArg::Arm, ChipArg::Rp2350, true).profile().unwrap();
        assert_eq!(
            facade_features(&m33),
            ["arch-arm", "rp2350", "panic", "libc-minimal", "gpio-coproc"]
        );

        let mut bare = args(ArchArg::Riscv, ChipArg::Rp2350, false);
        bare.no_libc = true;
        let bare = bare.profile().unwrap();
        assert_eq!(facade_features(&bare), ["arch-riscv", "rp2350", "panic"]);
    }
}
