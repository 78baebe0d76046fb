#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(test)]
extern crate alloc;

pub mod barrett;
pub mod limbs;
pub mod r1;

pub use crate::limbs::Limbs;
pub use num_bigint::{self, BigUint};

/// Hex-encoded sample digest (SHA-384 sized) dumped as decimal byte
/// values alongside the curve constants.
pub const SAMPLE_DIGEST_HEX: &str = "c99bfafc04367131e792c1383719238d2bce8d4c91ceb76d73f3a80cb4d997470868ae19f748e8183b82ff46aa3edd6a";
