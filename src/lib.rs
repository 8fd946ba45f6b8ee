// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-02-03

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Boot-time device identity resolution for the Galaxy Note 4 (`trlte`)
//! vendor image.
//!
//! One vendor build ships to seven regional variants of the same physical
//! hardware. At early boot the bootloader id (`ro.bootloader`) is the only
//! reliable discriminator between them, so this crate prefix-matches it
//! against a static table and rewrites the identity properties (model,
//! device codename, fingerprint, build description) plus the telephony
//! network defaults for the matched SKU.
//!
//! The property space is abstracted behind [`props::PropertyStore`] so the
//! resolver runs against an in-memory fake in tests and against a platform
//! binding in production.

pub mod props;
pub mod resolver;
pub mod variant;

pub use props::{InMemoryPropertyStore, PropFileError, PropertyStore};
pub use resolver::resolve_and_apply;
pub use variant::{match_variant, TelephonyMode, VariantRecord};
