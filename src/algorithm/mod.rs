//! Algorithm implementations for nutritional screening
//!
//! This module contains the MUAC/edema classification rule and the
//! aggregate reporting built on its output.

pub mod nutrition;
pub mod reporting;
