// CLASSIFICATION: COMMUNITY
// Filename: resolver.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-02-03

//! Device identity resolution.
//!
//! Reads `ro.bootloader`, selects the matching [`VariantRecord`], and
//! writes that SKU's identity and telephony properties into the injected
//! store. Runs once, synchronously, during vendor init.

use log::info;

use crate::props::PropertyStore;
use crate::variant::{match_variant, CdmaConfig, TelephonyMode, VariantRecord, RO_PRODUCT_SOURCES};

/// Overwrite `key` if it already exists; create it only when `add` is set.
///
/// The sole mutation primitive of the resolver. Identity properties pass
/// `add = false` so namespaces the base image never defined stay
/// undefined.
pub fn property_override(store: &mut dyn PropertyStore, key: &str, value: &str, add: bool) {
    if store.find(key).is_some() {
        store.update(key, value);
    } else if add {
        store.add(key, value);
    }
}

fn set_ro_product_prop(store: &mut dyn PropertyStore, source: &str, attr: &str, value: &str) {
    let key = format!("ro.product.{source}{attr}");
    property_override(store, &key, value, false);
}

fn gsm_properties(store: &mut dyn PropertyStore) {
    store.set("telephony.lteOnGsmDevice", "1");
    store.set("ro.telephony.default_network", "9");
}

fn cdma_properties(store: &mut dyn PropertyStore, cdma: &CdmaConfig) {
    // Per-carrier values.
    store.set("ro.cdma.home.operator.alpha", cdma.operator_alpha);
    store.set("ro.cdma.home.operator.numeric", cdma.operator_numeric);
    store.set("ro.telephony.default_cdma_sub", cdma.cdma_sub);

    // Static CDMA values.
    store.set("ril.subscription.types", "NV,RUIM");
    store.set("ro.telephony.default_network", "10");
    store.set("telephony.lteOnCdmaDevice", "1");
}

fn apply_variant(store: &mut dyn PropertyStore, variant: &VariantRecord) {
    for source in RO_PRODUCT_SOURCES {
        set_ro_product_prop(store, source, "fingerprint", variant.fingerprint);
        set_ro_product_prop(store, source, "model", variant.model);
        set_ro_product_prop(store, source, "device", variant.device);
        set_ro_product_prop(store, source, "name", variant.name);
    }
    property_override(store, "ro.build.description", variant.build_description, true);
    match &variant.telephony {
        TelephonyMode::Gsm => gsm_properties(store),
        TelephonyMode::Cdma(cdma) => cdma_properties(store, cdma),
    }
}

/// Resolve the device variant from `ro.bootloader` and write its identity
/// and telephony properties into `store`.
///
/// An unrecognised or empty bootloader id is not an error: identity
/// properties are left as the base image set them and only the GSM
/// telephony defaults are applied.
pub fn resolve_and_apply(store: &mut dyn PropertyStore) {
    let bootloader = store.get("ro.bootloader", "");

    match match_variant(&bootloader) {
        Some(variant) => apply_variant(store, variant),
        None => gsm_properties(store),
    }

    let device = store.get("ro.product.device", "");
    info!("Found bootloader id {bootloader} setting build properties for {device} device");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::InMemoryPropertyStore;
    use crate::variant::VARIANTS;

    const GSM_KEYS: [&str; 2] = ["telephony.lteOnGsmDevice", "ro.telephony.default_network"];
    const CDMA_KEYS: [&str; 5] = [
        "ro.cdma.home.operator.alpha",
        "ro.cdma.home.operator.numeric",
        "ro.telephony.default_cdma_sub",
        "ril.subscription.types",
        "telephony.lteOnCdmaDevice",
    ];

    fn store_with_bootloader(id: &str) -> InMemoryPropertyStore {
        let mut store = InMemoryPropertyStore::new();
        store.add("ro.bootloader", id);
        store
    }

    /// Store shaped like a base image that pre-defines the four identity
    /// properties in every source namespace.
    fn seeded_store(id: &str) -> InMemoryPropertyStore {
        let mut store = store_with_bootloader(id);
        for source in RO_PRODUCT_SOURCES {
            for attr in ["fingerprint", "model", "device", "name"] {
                store.add(&format!("ro.product.{source}{attr}"), "base");
            }
        }
        store
    }

    #[test]
    fn tmo_bootloader_sets_gsm_identity() {
        let mut store = seeded_store("N910TUVU2EQI2");
        resolve_and_apply(&mut store);

        assert_eq!(
            store.get("ro.build.description", ""),
            "trltetmo-user 6.0.1 MMB29M N910TUVU2EQI2 release-keys"
        );
        assert_eq!(store.get("ro.product.device", ""), "trltetmo");
        assert_eq!(store.get("ro.product.system.model", ""), "SM-N910T");
        assert_eq!(store.get("telephony.lteOnGsmDevice", ""), "1");
        assert_eq!(store.get("ro.telephony.default_network", ""), "9");
        for key in CDMA_KEYS {
            assert!(store.find(key).is_none(), "unexpected CDMA key {key}");
        }
    }

    #[test]
    fn sprint_bootloader_sets_cdma_identity() {
        let mut store = seeded_store("N910PVPU5DQI5");
        resolve_and_apply(&mut store);

        assert_eq!(store.get("ro.cdma.home.operator.alpha", ""), "Sprint");
        assert_eq!(store.get("ro.cdma.home.operator.numeric", ""), "310120");
        assert_eq!(store.get("ro.telephony.default_cdma_sub", ""), "1");
        assert_eq!(store.get("ril.subscription.types", ""), "NV,RUIM");
        assert_eq!(store.get("ro.telephony.default_network", ""), "10");
        assert_eq!(store.get("telephony.lteOnCdmaDevice", ""), "1");
        assert!(store.find("telephony.lteOnGsmDevice").is_none());
    }

    #[test]
    fn identity_writes_are_override_only() {
        // No pre-existing ro.product.* keys: all 24 must stay absent while
        // ro.build.description is still written.
        let mut store = store_with_bootloader("N910FXXU1DRD1");
        resolve_and_apply(&mut store);

        for source in RO_PRODUCT_SOURCES {
            for attr in ["fingerprint", "model", "device", "name"] {
                let key = format!("ro.product.{source}{attr}");
                assert!(store.find(&key).is_none(), "{key} should be absent");
            }
        }
        assert_eq!(
            store.get("ro.build.description", ""),
            "trltexx-user 6.0.1 MMB29M N910FXXU1DRD1 release-keys"
        );
    }

    #[test]
    fn unmatched_bootloader_applies_gsm_defaults_only() {
        let mut store = store_with_bootloader("G900FXXU1POJ2");
        resolve_and_apply(&mut store);

        assert_eq!(store.get("telephony.lteOnGsmDevice", ""), "1");
        assert_eq!(store.get("ro.telephony.default_network", ""), "9");
        assert!(store.find("ro.build.description").is_none());
        assert!(store.find("ro.product.device").is_none());
    }

    #[test]
    fn empty_bootloader_routes_to_default_branch() {
        let mut store = InMemoryPropertyStore::new();
        resolve_and_apply(&mut store);

        // Only the two GSM defaults appear.
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("telephony.lteOnGsmDevice", ""), "1");
        assert_eq!(store.get("ro.telephony.default_network", ""), "9");
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut once = seeded_store("N910VVRU2CQL1");
        resolve_and_apply(&mut once);
        let mut twice = seeded_store("N910VVRU2CQL1");
        resolve_and_apply(&mut twice);
        resolve_and_apply(&mut twice);
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn telephony_modes_are_mutually_exclusive() {
        for variant in &VARIANTS {
            let mut store = seeded_store(variant.bootloader_prefix);
            resolve_and_apply(&mut store);
            let gsm = GSM_KEYS
                .iter()
                .filter(|k| store.find(k).is_some() && **k != "ro.telephony.default_network")
                .count();
            let cdma = CDMA_KEYS.iter().filter(|k| store.find(k).is_some()).count();
            match variant.telephony {
                TelephonyMode::Gsm => {
                    assert_eq!(gsm, 1, "{}: missing GSM flag", variant.name);
                    assert_eq!(cdma, 0, "{}: stray CDMA keys", variant.name);
                }
                TelephonyMode::Cdma(_) => {
                    assert_eq!(gsm, 0, "{}: stray GSM flag", variant.name);
                    assert_eq!(cdma, 5, "{}: missing CDMA keys", variant.name);
                }
            }
        }
    }

    #[test]
    fn property_override_respects_add_flag() {
        let mut store = InMemoryPropertyStore::new();
        property_override(&mut store, "ro.product.model", "SM-N910W8", false);
        assert!(store.find("ro.product.model").is_none());

        property_override(&mut store, "ro.build.description", "desc", true);
        assert_eq!(store.get("ro.build.description", ""), "desc");

        property_override(&mut store, "ro.build.description", "desc2", false);
        assert_eq!(store.get("ro.build.description", ""), "desc2");
    }
}
