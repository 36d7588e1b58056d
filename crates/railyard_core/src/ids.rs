//! Compile-time names for clans and card pools.
//!
//! Both are opaque strings to the engine. Implementing these traits on a unit
//! type lets builders say `set_clan_of::<Hellhorned>()` instead of repeating
//! the literal.

pub trait ClanId {
    const ID: &'static str;
}

pub trait CardPoolId {
    const ID: &'static str;
}

/// Implement [`ClanId`] or [`CardPoolId`] for a unit struct.
///
/// # Example
/// ```ignore
/// define_id!(ClanId for Hellhorned = "c595c344-d323-4cf1-9ad6-41edc2aebbd0");
/// ```
#[macro_export]
macro_rules! define_id {
    ($trait:ident for $ty:ident = $id:expr) => {
        pub struct $ty;

        impl $crate::ids::$trait for $ty {
            const ID: &'static str = $id;
        }
    };
}
