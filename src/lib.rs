//! Embeds articles from an external knowledge base into a host page, with
//! their stylesheets confined to the article container and the fetched
//! content kept in a cache-aside layer.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
