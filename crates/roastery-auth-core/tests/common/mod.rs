//! Common test utilities for roastery-auth-core integration tests

pub mod jwks_mock;

#[allow(unused_imports)]
pub use jwks_mock::{
    trusted_jwks, JwksMockServer, TestClaims, TestSigner, TEST_AUDIENCE, TEST_ISSUER, TEST_KEY_ID,
};
