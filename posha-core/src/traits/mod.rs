//! Persistence seams. Analytics never touches these directly; the engine
//! loads a snapshot through [`IWardrobeStore`] and hands plain slices to the
//! pure functions.

pub mod key_value;
pub mod wardrobe;

pub use key_value::IKeyValueStore;
pub use wardrobe::IWardrobeStore;
