//! Security levels, resource profiles, and the parameter catalog.
//!
//! A [`SecurityLevel`] sets the floor below which derivation cost never
//! falls; a [`ResourceProfile`] chooses how additional cost is spent
//! (memory vs. iterations). [`resolve`] merges one row from each table
//! into the effective [`ParameterSet`] by taking the field-wise maximum.

use std::fmt;
use std::str::FromStr;

use crate::crypto::{KEY_LEN, NONCE_LEN};
use crate::error::CryptioError;

/// Overall strength target for key derivation, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SecurityLevel {
    /// Tests and constrained devices only, not for production.
    UltraFast,
    /// OWASP-recommended baseline.
    Standard,
    /// NIST moderate / enterprise data.
    Medium,
    /// Critical, health, and finance data.
    High,
    /// Vaults and long-lived secrets.
    Extreme,
}

/// Memory/CPU tradeoff profile, following the Argon2id recommendations.
///
/// Profiles are an allocation strategy, not a strength ranking, so unlike
/// [`SecurityLevel`] they carry no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceProfile {
    /// m=47104 KiB, t=1: spend the budget on memory.
    RamHeavy,
    /// m=19456 KiB, t=2.
    Balanced,
    /// m=12288 KiB, t=3.
    Tradeoff,
    /// m=9216 KiB, t=4.
    CpuFavor,
    /// m=7168 KiB, t=5: spend the budget on iterations.
    CpuHeavy,
}

/// Resolved Argon2id and AEAD configuration for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    /// Salt length in bytes.
    pub salt_len: usize,
    /// Derived key length in bytes.
    pub key_len: usize,
    /// AEAD nonce length in bytes.
    pub nonce_len: usize,
    /// Argon2 iteration count.
    pub time_cost: u32,
    /// Argon2 memory cost in KiB.
    pub mem_cost_kib: u32,
    /// Argon2 lane count.
    pub parallelism: u32,
}

impl SecurityLevel {
    /// All defined levels, weakest first.
    pub const ALL: [SecurityLevel; 5] = [
        SecurityLevel::UltraFast,
        SecurityLevel::Standard,
        SecurityLevel::Medium,
        SecurityLevel::High,
        SecurityLevel::Extreme,
    ];

    /// Catalog row for this level. Total over the enum; values fixed at
    /// compile time.
    pub const fn params(self) -> ParameterSet {
        match self {
            SecurityLevel::UltraFast => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 1,
                mem_cost_kib: 16 * 1024,
                parallelism: 1,
            },
            SecurityLevel::Standard => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 2,
                mem_cost_kib: 64 * 1024,
                parallelism: 1,
            },
            SecurityLevel::Medium => ParameterSet {
                salt_len: 24,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 3,
                mem_cost_kib: 128 * 1024,
                parallelism: 2,
            },
            SecurityLevel::High => ParameterSet {
                salt_len: 32,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 4,
                mem_cost_kib: 256 * 1024,
                parallelism: 2,
            },
            SecurityLevel::Extreme => ParameterSet {
                salt_len: 32,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 6,
                mem_cost_kib: 1024 * 1024,
                parallelism: 4,
            },
        }
    }
}

impl ResourceProfile {
    /// All defined profiles.
    pub const ALL: [ResourceProfile; 5] = [
        ResourceProfile::RamHeavy,
        ResourceProfile::Balanced,
        ResourceProfile::Tradeoff,
        ResourceProfile::CpuFavor,
        ResourceProfile::CpuHeavy,
    ];

    /// Catalog row for this profile. Total over the enum; values fixed at
    /// compile time.
    pub const fn params(self) -> ParameterSet {
        match self {
            ResourceProfile::RamHeavy => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 1,
                mem_cost_kib: 47104,
                parallelism: 1,
            },
            ResourceProfile::Balanced => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 2,
                mem_cost_kib: 19456,
                parallelism: 1,
            },
            ResourceProfile::Tradeoff => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 3,
                mem_cost_kib: 12288,
                parallelism: 1,
            },
            ResourceProfile::CpuFavor => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 4,
                mem_cost_kib: 9216,
                parallelism: 1,
            },
            ResourceProfile::CpuHeavy => ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 5,
                mem_cost_kib: 7168,
                parallelism: 1,
            },
        }
    }
}

/// Merges a level and a profile into the effective parameter set.
///
/// Each field is the maximum of the two catalog rows, independently per
/// field. The level is a floor the profile can never weaken; the profile
/// can only shift cost upward. Pure and deterministic: identical inputs
/// always produce an identical set.
pub const fn resolve(level: SecurityLevel, profile: ResourceProfile) -> ParameterSet {
    let l = level.params();
    let p = profile.params();

    ParameterSet {
        salt_len: max_usize(l.salt_len, p.salt_len),
        key_len: max_usize(l.key_len, p.key_len),
        nonce_len: max_usize(l.nonce_len, p.nonce_len),
        time_cost: max_u32(l.time_cost, p.time_cost),
        mem_cost_kib: max_u32(l.mem_cost_kib, p.mem_cost_kib),
        parallelism: max_u32(l.parallelism, p.parallelism),
    }
}

const fn max_usize(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

const fn max_u32(a: u32, b: u32) -> u32 {
    if a > b { a } else { b }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SecurityLevel::UltraFast => "UltraFast",
            SecurityLevel::Standard => "Standard",
            SecurityLevel::Medium => "Medium",
            SecurityLevel::High => "High",
            SecurityLevel::Extreme => "Extreme",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ResourceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceProfile::RamHeavy => "RAMHeavy",
            ResourceProfile::Balanced => "Balanced",
            ResourceProfile::Tradeoff => "Tradeoff",
            ResourceProfile::CpuFavor => "CPUFavor",
            ResourceProfile::CpuHeavy => "CPUHeavy",
        };
        f.write_str(name)
    }
}

impl FromStr for SecurityLevel {
    type Err = CryptioError;

    /// Boundary for level names arriving from outside the type system
    /// (CLI arguments, config files). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ultrafast" => Ok(SecurityLevel::UltraFast),
            "standard" => Ok(SecurityLevel::Standard),
            "medium" => Ok(SecurityLevel::Medium),
            "high" => Ok(SecurityLevel::High),
            "extreme" => Ok(SecurityLevel::Extreme),
            _ => Err(CryptioError::UnknownConfiguration(s.to_string())),
        }
    }
}

impl FromStr for ResourceProfile {
    type Err = CryptioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ramheavy" => Ok(ResourceProfile::RamHeavy),
            "balanced" => Ok(ResourceProfile::Balanced),
            "tradeoff" => Ok(ResourceProfile::Tradeoff),
            "cpufavor" => Ok(ResourceProfile::CpuFavor),
            "cpuheavy" => Ok(ResourceProfile::CpuHeavy),
            _ => Err(CryptioError::UnknownConfiguration(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_exact_fieldwise_max() {
        for level in SecurityLevel::ALL {
            for profile in ResourceProfile::ALL {
                let l = level.params();
                let p = profile.params();
                let r = resolve(level, profile);

                assert_eq!(r.salt_len, l.salt_len.max(p.salt_len));
                assert_eq!(r.key_len, l.key_len.max(p.key_len));
                assert_eq!(r.nonce_len, l.nonce_len.max(p.nonce_len));
                assert_eq!(r.time_cost, l.time_cost.max(p.time_cost));
                assert_eq!(r.mem_cost_kib, l.mem_cost_kib.max(p.mem_cost_kib));
                assert_eq!(r.parallelism, l.parallelism.max(p.parallelism));
            }
        }
    }

    #[test]
    fn merge_is_deterministic() {
        let a = resolve(SecurityLevel::Medium, ResourceProfile::CpuFavor);
        let b = resolve(SecurityLevel::Medium, ResourceProfile::CpuFavor);
        assert_eq!(a, b);
    }

    #[test]
    fn profiles_converge_at_high_levels() {
        // Extreme's memory floor dominates every profile's memory cost.
        for profile in ResourceProfile::ALL {
            let r = resolve(SecurityLevel::Extreme, profile);
            assert_eq!(r.mem_cost_kib, SecurityLevel::Extreme.params().mem_cost_kib);
        }
    }

    #[test]
    fn profile_dominates_at_lowest_level() {
        let r = resolve(SecurityLevel::UltraFast, ResourceProfile::RamHeavy);
        assert_eq!(r.mem_cost_kib, 47104);
        assert_eq!(r.time_cost, 1);

        let r = resolve(SecurityLevel::UltraFast, ResourceProfile::CpuHeavy);
        assert_eq!(r.mem_cost_kib, 16 * 1024);
        assert_eq!(r.time_cost, 5);
    }

    #[test]
    fn standard_balanced_matches_owasp_row() {
        let r = resolve(SecurityLevel::Standard, ResourceProfile::Balanced);
        assert_eq!(
            r,
            ParameterSet {
                salt_len: 16,
                key_len: KEY_LEN,
                nonce_len: NONCE_LEN,
                time_cost: 2,
                mem_cost_kib: 64 * 1024,
                parallelism: 1,
            }
        );
    }

    #[test]
    fn levels_are_ordered() {
        assert!(SecurityLevel::UltraFast < SecurityLevel::Standard);
        assert!(SecurityLevel::High < SecurityLevel::Extreme);
    }

    #[test]
    fn names_roundtrip_through_fromstr() {
        for level in SecurityLevel::ALL {
            assert_eq!(level.to_string().parse::<SecurityLevel>().unwrap(), level);
        }
        for profile in ResourceProfile::ALL {
            assert_eq!(
                profile.to_string().parse::<ResourceProfile>().unwrap(),
                profile
            );
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "Turbo".parse::<SecurityLevel>(),
            Err(CryptioError::UnknownConfiguration(_))
        ));
        assert!(matches!(
            "DiskHeavy".parse::<ResourceProfile>(),
            Err(CryptioError::UnknownConfiguration(_))
        ));
    }
}
