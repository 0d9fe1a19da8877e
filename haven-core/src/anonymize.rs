//! Tenant-identity anonymization for cross-tenant aggregation.
//!
//! A 32-bit rolling hash is enough for unlinkable unique-counting; it is
//! deliberately not cryptographic. Distinct tenant ids can collide and
//! undercount, which is acceptable at current scale.

use std::fmt;

/// Hash a tenant id into a 32-bit anonymous identity.
///
/// Rolling hash over the UTF-8 bytes: `h = h * 31 + byte` on a wrapping
/// i32, absolute value taken at the end so the result is stable across
/// sign-extension differences.
pub fn tenant_hash(tenant_id: &str) -> u32 {
    let mut h: i32 = 0;
    for byte in tenant_id.bytes() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(byte));
    }
    h.unsigned_abs()
}

/// Anonymous tenant label used in error records and logs in place of the
/// raw id, formatted as `fam_{hash:08x}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnonymousTenant(pub u32);

impl AnonymousTenant {
    pub fn of(tenant_id: &str) -> Self {
        Self(tenant_hash(tenant_id))
    }
}

impl fmt::Display for AnonymousTenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fam_{:08x}", self.0)
    }
}
