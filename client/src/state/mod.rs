//! Client-side state kept outside the view tree.

pub mod nav;
