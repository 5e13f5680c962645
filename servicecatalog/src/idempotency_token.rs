/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Idempotency tokens for mutating requests.
//!
//! The service deduplicates retried requests that carry the same token. Builders never fill a
//! token in on their own; use the `*_from` builder methods to draw one from a provider.

use std::sync::Mutex;

/// Formats 122 random bits as a version 4 UUID.
pub(crate) fn uuid_v4(input: u128) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(36);
    // u4-aligned index into `input`
    let mut rnd_idx: u8 = 0;

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        } else if str_idx == 14 {
            // version
            out.push('4');
        } else {
            let mut dat = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            if str_idx == 19 {
                // RFC 4122 variant
                dat = (dat & 0b0011) | 0b1000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Source of idempotency tokens.
#[derive(Debug)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Static(String),
    Random(Mutex<fastrand::Rng>),
}

impl IdempotencyTokenProvider {
    /// Random tokens seeded from the thread-local generator.
    pub fn random() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// A reproducible sequence of tokens.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Random(Mutex::new(rng)),
        }
    }

    /// Always returns `token`.
    pub fn fixed(token: impl Into<String>) -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Static(token.into()),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.clone(),
            Inner::Random(rng) => {
                let input = match rng.lock() {
                    Ok(mut rng) => rng.u128(..),
                    Err(poisoned) => poisoned.into_inner().u128(..),
                };
                uuid_v4(input)
            }
        }
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        Self::random()
    }
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};
    use proptest::prelude::*;

    #[test]
    fn uuid_layout() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn seeded_providers_repeat() {
        let a = IdempotencyTokenProvider::with_seed(7);
        let b = IdempotencyTokenProvider::with_seed(7);
        let first = a.make_idempotency_token();
        assert_eq!(first, b.make_idempotency_token());
        assert_ne!(first, a.make_idempotency_token());
    }

    #[test]
    fn fixed_provider() {
        let provider = IdempotencyTokenProvider::from("tok-1");
        assert_eq!(provider.make_idempotency_token(), "tok-1");
        assert_eq!(provider.make_idempotency_token(), "tok-1");
    }

    proptest! {
        #[test]
        fn tokens_are_v4_uuids(input: u128) {
            let token = uuid_v4(input);
            prop_assert_eq!(token.len(), 36);
            prop_assert_eq!(&token[14..15], "4");
            prop_assert!(matches!(&token[19..20], "8" | "9" | "a" | "b"));
            prop_assert!(token
                .chars()
                .all(|c| c == '-' || (c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
        }
    }
}
