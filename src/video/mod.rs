pub(crate) mod config;
pub(crate) mod data;
pub(crate) mod demo;
pub(crate) mod scenes;
pub(crate) mod theme;
