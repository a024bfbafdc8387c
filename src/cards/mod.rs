//! Card identity and the catalog seam.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque card identifier
//! - `CardInfo`: Display name and artwork reference
//! - `CardCatalog`: Lookup trait implemented by the host's card database
//! - `CardRegistry`: In-memory catalog

pub mod definition;
pub mod registry;

pub use definition::{CardId, CardInfo};
pub use registry::{CardCatalog, CardRegistry};
