//! Compiled-in template text for every rule document.
//!
//! Static, framework and task documents are complete files emitted verbatim.
//! The constants in [`sections`] are Handlebars fragments stitched together
//! by the renderer for the three state-dependent documents.

pub mod frameworks;
pub mod sections;
pub mod static_rules;
pub mod tasks;
