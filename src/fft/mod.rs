//! Evaluation domains and radix-2 number-theoretic transforms.
//!
//! Domains are produced by a runtime factory ([`EvaluationDomain::new`],
//! [`EvaluationDomain::new_coset`] or the cached [`evaluation_domain`]) and
//! are validated once at construction.  All evaluation vectors use natural
//! ordering: entry `i` is the evaluation at `offset * omega^i`.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::field::FieldElement;

pub mod domain;
pub mod ifft;
pub mod lde;

pub use domain::{CosetDomain, DomainError, EvaluationDomain, Radix2Domain};
pub use ifft::interpolate;
pub use lde::low_degree_extend;

/// Maximum supported radix-2 domain size expressed as `log2(n)`.
pub const RADIX2_MAX_LOG2_SIZE: u32 = FieldElement::MODULUS.two_adicity;

/// Upper bound on the number of domains kept by [`evaluation_domain`].
///
/// Once full, further domains are built on demand without being cached.
pub const DOMAIN_CACHE_CAPACITY: usize = 64;

type DomainKey = (u32, u64);

static DOMAIN_CACHE: OnceLock<Mutex<HashMap<DomainKey, EvaluationDomain>>> = OnceLock::new();

fn domain_cache() -> &'static Mutex<HashMap<DomainKey, EvaluationDomain>> {
    DOMAIN_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the (cached) domain of `size` points shifted by `offset`.
///
/// An offset of one yields the plain radix-2 subgroup.  The cache is keyed
/// by `(log2(size), offset)`, never evicts and stops growing at
/// [`DOMAIN_CACHE_CAPACITY`] entries.  Domains are a handful of field
/// elements, so handing out clones is cheap.
pub fn evaluation_domain(size: usize, offset: FieldElement) -> Result<EvaluationDomain, DomainError> {
    let log_size = domain::log2_exact(size)?;
    let key = (log_size, offset.as_u64());
    if let Ok(cache) = domain_cache().lock() {
        if let Some(domain) = cache.get(&key) {
            return Ok(domain.clone());
        }
    }
    let domain = if offset == FieldElement::ONE {
        EvaluationDomain::new(size)?
    } else {
        EvaluationDomain::new_coset(size, offset)?
    };
    if let Ok(mut cache) = domain_cache().lock() {
        if cache.len() < DOMAIN_CACHE_CAPACITY {
            cache.insert(key, domain.clone());
        }
    }
    Ok(domain)
}

/// In-place radix-2 decimation-in-time transform over `values`.
///
/// `root` must be a primitive `values.len()`-th root of unity; the output is
/// in natural order.
pub(crate) fn ntt_in_place(values: &mut [FieldElement], root: FieldElement) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    bit_reverse_permute(values);
    let mut len = 2;
    while len <= n {
        let step = root.pow((n / len) as u64);
        let half = len / 2;
        for chunk in values.chunks_mut(len) {
            let mut twiddle = FieldElement::ONE;
            for j in 0..half {
                let even = chunk[j];
                let odd = chunk[j + half] * twiddle;
                chunk[j] = even + odd;
                chunk[j + half] = even - odd;
                twiddle *= step;
            }
        }
        len <<= 1;
    }
}

fn bit_reverse_permute(values: &mut [FieldElement]) {
    let n = values.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            values.swap(i, j);
        }
    }
}
