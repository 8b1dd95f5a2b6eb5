//! Listing schemas of the Oikotie portal
//!
//! Apartments and housing companies are published as separate documents; their element shapes
//! (names, order, which values are attributes) are fixed by the portal's RelaxNG schemas.

pub mod apartment;
pub mod enums;
pub mod housing_company;
