//! Agreement document rendering
//!
//! Layout produces a flat list of blocks; the `rental_agreement` template
//! flows them onto pages. Nothing is written to disk.

pub mod blocks;
pub mod layout;
pub mod render;

pub use blocks::{Align, Block, DocumentWriter, SignatureParty};
pub use layout::{layout_agreement, AgreementContext};
pub use render::{render_agreement, RenderOptions, DEFAULT_AUTHOR};
