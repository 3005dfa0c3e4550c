#[path = "property/decoder_determinism.rs"]
mod decoder_determinism;

#[path = "property/comparator_disjoint.rs"]
mod comparator_disjoint;

#[path = "property/stability_reproducible.rs"]
mod stability_reproducible;
