pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod grid;
pub(crate) mod model;
pub(crate) mod palette;
