// CLASSIFICATION: COMMUNITY
// Filename: variant.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-03

//! Static table of trlte regional variants.
//!
//! The table is the single source of truth for everything the resolver
//! writes: adding a SKU means adding one record here, never another code
//! branch.

/// CDMA carrier provisioning constants for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdmaConfig {
    /// Home operator display name (`ro.cdma.home.operator.alpha`).
    pub operator_alpha: &'static str,
    /// Home operator MCC+MNC (`ro.cdma.home.operator.numeric`).
    pub operator_numeric: &'static str,
    /// Default CDMA subscription source (`ro.telephony.default_cdma_sub`).
    pub cdma_sub: &'static str,
}

/// Radio flavour a variant ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelephonyMode {
    /// LTE on GSM, default network type 9.
    Gsm,
    /// LTE on CDMA, default network type 10, NV/RUIM subscription.
    Cdma(CdmaConfig),
}

/// One regional SKU of the trlte hardware family.
#[derive(Debug, Clone, Copy)]
pub struct VariantRecord {
    /// Literal prefix matched against `ro.bootloader`.
    pub bootloader_prefix: &'static str,
    /// Marketing model name.
    pub model: &'static str,
    /// Device codename written to `ro.product.{ns.}device`.
    pub device: &'static str,
    /// Product name written to `ro.product.{ns.}name`.
    pub name: &'static str,
    /// Full build fingerprint for this SKU.
    pub fingerprint: &'static str,
    /// `ro.build.description` value.
    pub build_description: &'static str,
    /// Radio flavour.
    pub telephony: TelephonyMode,
}

/// Property source namespaces, in the order target-files packaging emits
/// them: base, product, product_services, odm, vendor, system.
pub const RO_PRODUCT_SOURCES: [&str; 6] = [
    "",
    "product.",
    "product_services.",
    "odm.",
    "vendor.",
    "system.",
];

/// The seven trlte SKUs this vendor image can boot as.
pub static VARIANTS: [VariantRecord; 7] = [
    VariantRecord {
        bootloader_prefix: "N910F",
        model: "SM-N910F",
        device: "trlte",
        name: "trltexx",
        fingerprint: "samsung/trltexx/trlte:6.0.1/MMB29M/N910FXXU1DRD1:user/release-keys",
        build_description: "trltexx-user 6.0.1 MMB29M N910FXXU1DRD1 release-keys",
        telephony: TelephonyMode::Gsm,
    },
    VariantRecord {
        bootloader_prefix: "N910G",
        model: "SM-N910G",
        device: "trlte",
        name: "trltedt",
        fingerprint: "samsung/trltedt/trlte:6.0.1/MMB29M/N910GDTU1DRD1:user/release-keys",
        build_description: "trltedt-user 6.0.1 MMB29M N910GDTU1DRD1 release-keys",
        telephony: TelephonyMode::Gsm,
    },
    VariantRecord {
        bootloader_prefix: "N910P",
        model: "SM-N910P",
        device: "trltespr",
        name: "trltespr",
        fingerprint: "samsung/trltespr/trltespr:6.0.1/MMB29M/N910PVPU5DQI5:user/release-keys",
        build_description: "trltespr-user 6.0.1 MMB29M N910PVPU5DQI5 release-keys",
        telephony: TelephonyMode::Cdma(CdmaConfig {
            operator_alpha: "Sprint",
            operator_numeric: "310120",
            cdma_sub: "1",
        }),
    },
    VariantRecord {
        bootloader_prefix: "N910R4",
        model: "SM-N910R4",
        device: "trlteusc",
        name: "trlteusc",
        fingerprint: "samsung/trlteusc/trlteusc:6.0.1/MMB29M/N910R4TYS1CQC1:user/release-keys",
        build_description: "trlteusc-user 6.0.1 MMB29M N910R4TYS1CQC1 release-keys",
        telephony: TelephonyMode::Cdma(CdmaConfig {
            operator_alpha: "U.S. Cellular",
            operator_numeric: "311580",
            cdma_sub: "1",
        }),
    },
    VariantRecord {
        bootloader_prefix: "N910T",
        model: "SM-N910T",
        device: "trltetmo",
        name: "trltetmo",
        fingerprint: "samsung/trltetmo/trltetmo:6.0.1/MMB29M/N910TUVU2EQI2:user/release-keys",
        build_description: "trltetmo-user 6.0.1 MMB29M N910TUVU2EQI2 release-keys",
        telephony: TelephonyMode::Gsm,
    },
    VariantRecord {
        bootloader_prefix: "N910V",
        model: "SM-N910V",
        device: "trltevzw",
        name: "trltevzw",
        fingerprint: "Verizon/trltevzw/trltevzw:6.0.1/MMB29M/N910VVRU2CQL1:user/release-keys",
        build_description: "trltevzw-user 6.0.1 MMB29M N910VVRU2CQL1 release-keys",
        telephony: TelephonyMode::Cdma(CdmaConfig {
            operator_alpha: "Verizon",
            operator_numeric: "311480",
            cdma_sub: "1",
        }),
    },
    VariantRecord {
        bootloader_prefix: "N910W8",
        model: "SM-N910W8",
        device: "trltecan",
        name: "trltecan",
        fingerprint: "samsung/trltecan/trltecan:6.0.1/MMB29M/N910W8VLS1DQH2:user/release-keys",
        build_description: "trltecan-user 6.0.1 MMB29M N910W8VLS1DQH2 release-keys",
        telephony: TelephonyMode::Gsm,
    },
];

/// Select the variant whose bootloader prefix matches `bootloader`.
///
/// Scans [`VARIANTS`] in declaration order and the first matching prefix
/// wins. Current prefixes are pairwise non-overlapping, so order does not
/// change the result, but the rule is fixed here in case future entries
/// overlap.
pub fn match_variant(bootloader: &str) -> Option<&'static VariantRecord> {
    VARIANTS
        .iter()
        .find(|v| bootloader.starts_with(v.bootloader_prefix))
}
