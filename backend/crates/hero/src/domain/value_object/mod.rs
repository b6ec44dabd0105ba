//! Value Object Module

pub mod hero_attributes;

pub use hero_attributes::HeroAttributes;
